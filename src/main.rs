use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use csvanon::config::{AnonymizeConfig, CombineConfig, SearchConfig, DEFAULT_DELIMITER, DEFAULT_OUTPUT_FILE};
use csvanon::search::{Query, SearchMode};
use csvanon::SEARCH_HASH_LENGTH;

#[derive(Parser)]
#[command(name = "csvanon")]
#[command(about = "Hash-based anonymization, merging and lookup of tabular data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace every delimited field of a text file with its SHA-256 digest
    Anonymize {
        input: PathBuf,
        /// Defaults to standard output
        output: Option<PathBuf>,
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },
    /// Merge every CSV file in a directory, matching columns case-insensitively
    Combine {
        #[arg(short, long, env = "CSVANON_INPUT_DIR", default_value = ".")]
        input_dir: PathBuf,
        #[arg(short, long, env = "CSVANON_OUTPUT_FILE", default_value = DEFAULT_OUTPUT_FILE)]
        output_file: String,
    },
    /// Print the encoded form of a search term
    Encode {
        words: Vec<String>,
        #[arg(long, default_value_t = SEARCH_HASH_LENGTH as u8, value_parser = clap::value_parser!(u8).range(1..=64))]
        hash_length: u8,
    },
    /// Find rows of an anonymized CSV matching column=term queries
    Search {
        input: PathBuf,
        #[arg(required = true)]
        queries: Vec<Query>,
        /// Match rows satisfying any query instead of all of them
        #[arg(long)]
        any: bool,
        #[arg(long, default_value_t = SEARCH_HASH_LENGTH as u8, value_parser = clap::value_parser!(u8).range(1..=64))]
        hash_length: u8,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled by user.");
        std::process::exit(130);
    }) {
        tracing::warn!("Could not install Ctrl+C handler: {}", e);
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Anonymize { input, output, delimiter } => {
            let config = AnonymizeConfig { delimiter };
            if let Err(e) = csvanon::anonymize::main::run(&input, output.as_deref(), config) {
                eprintln!("Anonymize error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Combine { input_dir, output_file } => {
            let config = CombineConfig::new(input_dir).with_output_file(output_file);
            if let Err(e) = csvanon::combine::main::run(config) {
                eprintln!("Combine error: {:#}", e);
                std::process::exit(1);
            }
        }
        Commands::Encode { words, hash_length } => {
            let config = SearchConfig::with_hash_length(hash_length as usize);
            csvanon::search::encode::run(&words, config);
        }
        Commands::Search { input, queries, any, hash_length } => {
            let config = SearchConfig::with_hash_length(hash_length as usize);
            let mode = if any { SearchMode::Any } else { SearchMode::All };
            if let Err(e) = csvanon::search::main::run(&input, &queries, mode, config) {
                eprintln!("Search error: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}
