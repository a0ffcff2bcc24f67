#[cfg(test)]
mod tests {
    use csvanon::anonymize::{main::run, Anonymizer};
    use csvanon::{AnonymizeConfig, Digester};
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn anonymize(input: &str) -> (String, u64) {
        let mut out = Vec::new();
        let lines = Anonymizer::default()
            .process(Cursor::new(input.as_bytes()), &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), lines)
    }

    #[test]
    fn test_each_field_digested() {
        let digester = Digester::full();
        let line = Anonymizer::default().anonymize_line("John Doe#Chicago");

        let expected = format!("{}#{}", digester.digest("John Doe"), digester.digest("Chicago"));
        assert_eq!(line, expected);
    }

    #[test]
    fn test_empty_field_is_digested() {
        let digester = Digester::full();
        let line = Anonymizer::default().anonymize_line("a##b");

        let parts: Vec<&str> = line.split('#').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], digester.digest(""));
    }

    #[test]
    fn test_blank_lines_preserved() {
        let (output, lines) = anonymize("alice#1\n\nbob#2\n\n");

        assert_eq!(lines, 4);
        let out_lines: Vec<&str> = output.lines().collect();
        assert_eq!(out_lines.len(), 4);
        assert!(!out_lines[0].is_empty());
        assert_eq!(out_lines[1], "");
        assert!(!out_lines[2].is_empty());
        assert_eq!(out_lines[3], "");
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let (crlf, _) = anonymize("alice\r\nbob");
        let (lf, lines) = anonymize("alice\nbob\n");

        assert_eq!(lines, 2);
        assert_eq!(crlf, lf);
        assert!(crlf.ends_with('\n'));
    }

    #[test]
    fn test_custom_delimiter() {
        let anonymizer = Anonymizer::new(AnonymizeConfig { delimiter: ';' });
        let line = anonymizer.anonymize_line("x;y");

        assert_eq!(line.split(';').count(), 2);
        assert!(!line.contains('#'));
    }

    #[test]
    fn test_run_in_place_overwrites_input() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");
        fs::write(&path, "alice#1\nbob#2\n").unwrap();

        let lines = run(&path, Some(&path), AnonymizeConfig::default()).unwrap();

        let digester = Digester::full();
        let expected = format!(
            "{}#{}\n{}#{}\n",
            digester.digest("alice"),
            digester.digest("1"),
            digester.digest("bob"),
            digester.digest("2")
        );
        assert_eq!(lines, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_run_failure_leaves_no_partial_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, b"alice#1\nbob#2\nbad\xff\n").unwrap();

        let result = run(&input, Some(&output), AnonymizeConfig::default());

        assert!(result.is_err());
        assert!(!output.exists());
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "only the input should remain");
    }

    #[test]
    fn test_run_failure_keeps_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, b"ok\n\xfe\n").unwrap();
        fs::write(&output, "previous\n").unwrap();

        assert!(run(&input, Some(&output), AnonymizeConfig::default()).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous\n");
    }
}
