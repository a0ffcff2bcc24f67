#[cfg(test)]
mod tests {
    use csvanon::combine::{discover_csv_files, FileReport, HeaderMapping, Outcome, Unifier};
    use csvanon::{CombineConfig, Error};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, contents: &[u8]) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn combine(dir: &Path) -> Outcome {
        Unifier::new(CombineConfig::new(dir)).run().unwrap().outcome
    }

    #[test]
    fn test_case_insensitive_columns_unified() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"Name,City\nAlice,Stockholm\n");
        write(temp_dir.path(), "b.csv", b"NAME,Age\nBob,42\n");

        let summary = match combine(temp_dir.path()) {
            Outcome::Combined(summary) => summary,
            other => panic!("expected combined output, got {:?}", other),
        };

        assert_eq!(summary.columns, vec!["Name", "City", "Age"]);
        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.preview[0], vec!["Alice", "Stockholm", ""]);
        assert_eq!(summary.preview[1], vec!["Bob", "", "42"]);

        let output = fs::read_to_string(temp_dir.path().join("out.csv")).unwrap();
        assert_eq!(output, "Name,City,Age\r\nAlice,Stockholm,\r\nBob,,42\r\n");
    }

    #[test]
    fn test_header_mapping_reported_per_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"Name,City\nAlice,Stockholm\n");
        write(temp_dir.path(), "b.csv", b" name ,CITY\nBob,Lund\n");

        let Outcome::Combined(summary) = combine(temp_dir.path()) else {
            panic!("expected combined output");
        };

        match &summary.file_reports[1] {
            FileReport::Added { headers, rows, .. } => {
                assert_eq!(*rows, 1);
                assert_eq!(
                    headers[0],
                    HeaderMapping::Mapped { from: " name ".to_string(), to: "Name".to_string() }
                );
            }
            other => panic!("unexpected report {:?}", other),
        }
        assert_eq!(summary.preview[1], vec!["Bob", "Lund"]);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "one.csv", b"Id,Email\n1,a@example.com\n2,b@example.com\n");
        write(temp_dir.path(), "two.csv", b"EMAIL,Phone\nc@example.com,555\n");

        let first_run = Unifier::new(CombineConfig::new(temp_dir.path())).run().unwrap();
        let first = fs::read(temp_dir.path().join("out.csv")).unwrap();

        let second_run = Unifier::new(CombineConfig::new(temp_dir.path())).run().unwrap();
        let second = fs::read(temp_dir.path().join("out.csv")).unwrap();

        assert_eq!(first, second);
        assert!(!first_run.removed_previous_output);
        assert!(second_run.removed_previous_output);
        let Outcome::Combined(summary) = second_run.outcome else {
            panic!("expected combined output");
        };
        assert_eq!(summary.files.len(), 2, "previous output must not be merged");
    }

    #[test]
    fn test_empty_directory_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "notes.txt", b"not a csv");

        assert!(matches!(combine(temp_dir.path()), Outcome::NoFiles));
        assert!(!temp_dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_stale_output_removed_even_without_inputs() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "out.csv", b"Old\nstale\n");

        let run = Unifier::new(CombineConfig::new(temp_dir.path())).run().unwrap();

        assert!(run.removed_previous_output);
        assert!(matches!(run.outcome, Outcome::NoFiles));
        assert!(!temp_dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_header_only_files_write_nothing() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"Name,City\n");

        assert!(matches!(combine(temp_dir.path()), Outcome::NoRows { .. }));
        assert!(!temp_dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        let result = Unifier::new(CombineConfig::new(&missing)).run();
        assert!(matches!(result, Err(Error::DirectoryNotFound(_))));
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"Name\nAlice\n");
        fs::create_dir(temp_dir.path().join("broken.csv")).unwrap();

        let Outcome::Combined(summary) = combine(temp_dir.path()) else {
            panic!("expected combined output");
        };

        assert_eq!(summary.row_count, 1);
        assert!(summary
            .file_reports
            .iter()
            .any(|r| matches!(r, FileReport::Skipped { path, .. } if path.ends_with("broken.csv"))));
    }

    #[test]
    fn test_short_and_long_rows() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"A,B,C\n1\n1,2,3,4\n\n5,6,7\n");

        let Outcome::Combined(summary) = combine(temp_dir.path()) else {
            panic!("expected combined output");
        };

        assert_eq!(summary.row_count, 3);
        assert_eq!(summary.preview[0], vec!["1", "", ""]);
        assert_eq!(summary.preview[1], vec!["1", "2", "3"]);
        assert_eq!(summary.preview[2], vec!["5", "6", "7"]);
    }

    #[test]
    fn test_latin1_input_written_as_utf8() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"Stad\nMalm\xF6\n");

        combine(temp_dir.path());

        let output = fs::read_to_string(temp_dir.path().join("out.csv")).unwrap();
        assert_eq!(output, "Stad\r\nMalmö\r\n");
    }

    #[test]
    fn test_custom_output_file_name() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "a.csv", b"X\n1\n");

        let config = CombineConfig::new(temp_dir.path()).with_output_file("merged.csv");
        Unifier::new(config).run().unwrap();

        assert!(temp_dir.path().join("merged.csv").exists());
        assert!(!temp_dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_discovery_sorted_and_non_recursive() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "b.csv", b"X\n");
        write(temp_dir.path(), "a.csv", b"X\n");
        write(temp_dir.path(), "c.CSV", b"X\n");
        write(temp_dir.path(), "out.csv", b"X\n");
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        write(&temp_dir.path().join("nested"), "d.csv", b"X\n");

        let files = discover_csv_files(temp_dir.path(), Some("out.csv")).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }
}
