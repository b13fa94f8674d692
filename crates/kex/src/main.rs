//! Command-line interface for the `kex` FAQ keyword extraction tool.

use std::{
    error::Error,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use kex_corpus::{FaqKeywords, clean_text, load_records, to_json, write_keywords};
use kex_engine::{DEFAULT_TOP_K, ScorerKind, extract_keywords};

#[derive(Parser)]
#[command(name = "kex")]
#[command(about = "Keyword extraction for FAQ corpora")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `kex` subcommands.
enum Commands {
    /// Extract ranked keywords for each question in a FAQ JSON file
    Extract {
        /// FAQ JSON file: an array of {question, answer} records
        input: PathBuf,

        /// Write {question, keywords} records here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum keywords per question
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Print which scorer implementation this build uses
    Mode,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            top_k,
        } => cmd_extract(&input, output.as_deref(), top_k),
        Commands::Mode => {
            println!("{}", ScorerKind::detect());
            ExitCode::SUCCESS
        }
    }
}

/// Runs `extract` and maps any error to a failing exit code.
fn cmd_extract(input: &Path, output: Option<&Path>, top_k: usize) -> ExitCode {
    match run_extract(input, output, top_k) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the FAQ, scores every question, and emits keyword records.
fn run_extract(input: &Path, output: Option<&Path>, top_k: usize) -> Result<(), Box<dyn Error>> {
    let records = load_records(input)?;

    // Questions may still carry emoji from the word-processor export.
    let questions: Vec<String> = records
        .iter()
        .map(|record| clean_text(&record.question))
        .collect();

    eprintln!("scorer: {}", ScorerKind::detect());
    let keyword_lists = extract_keywords(&questions, top_k)?;

    let results: Vec<FaqKeywords> = records
        .into_iter()
        .zip(keyword_lists)
        .map(|(record, keywords)| FaqKeywords {
            question: record.question,
            keywords,
        })
        .collect();

    match output {
        Some(path) => write_keywords(path, &results)?,
        None => println!("{}", to_json(&results)),
    }
    Ok(())
}
