//! dirscope: directory size scanner.
//!
//! Thin binary entry point. All logic lives in the `dirscope-core` crate;
//! this only parses arguments, sets up logging and prints JSON documents.

use clap::{Parser, Subcommand};
use dirscope_core::api::{DriveList, ErrorDocument, ScanRequest};
use dirscope_core::browse::browse;
use dirscope_core::model::size;
use dirscope_core::{scan_with, ScanConfig, ScanError};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status used when the request itself was invalid.
const EXIT_INVALID_REQUEST: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "dirscope", version, about = "Scan a directory tree and report sizes as JSON")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file overriding the default ignore/charset policy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Worker threads for the scan (defaults to one per CPU).
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a directory and print `{"files": [...], "skipped": [...]}`.
    Scan {
        path: String,
        /// Also log a one-line summary of totals.
        #[arg(long)]
        summary: bool,
    },
    /// Scan using a request body such as `{"path": "C:/Users"}`.
    ScanRequest { body: String },
    /// List the immediate subdirectories of a path.
    Browse { path: Option<String> },
    /// List drive roots.
    Drives,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialise structured logging on stderr so stdout stays pure JSON.
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(json) => {
            println!("{}", json?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report(&err, cli.pretty),
    }
}

/// Load the configuration and execute the subcommand.
///
/// Every caller-facing failure, including a bad `--config` file, comes back
/// as a [`ScanError`] so it is reported as an error document.
fn run(cli: &Cli) -> Result<serde_json::Result<String>, ScanError> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::from_json_file(path)?,
        None => ScanConfig::default(),
    };
    if cli.threads.is_some() {
        config.threads = cli.threads;
    }

    Ok(match &cli.command {
        Command::Scan { path, summary } => {
            let result = scan_with(path, &config)?;
            if *summary {
                tracing::info!(
                    "{}",
                    size::describe_totals(
                        result.file_count(),
                        result.total_size(),
                        result.skipped.len()
                    )
                );
            }
            to_json(&result, cli.pretty)
        }
        Command::ScanRequest { body } => {
            let request = ScanRequest::from_json(body)?;
            to_json(&scan_with(request.root()?, &config)?, cli.pretty)
        }
        Command::Browse { path } => to_json(&browse(path.as_deref(), &config.ignore)?, cli.pretty),
        Command::Drives => to_json(&DriveList::current(), cli.pretty),
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Print the error document on stdout, the message on stderr.
fn report(err: &ScanError, pretty: bool) -> anyhow::Result<ExitCode> {
    tracing::error!("{err}");
    println!("{}", to_json(&ErrorDocument::from(err), pretty)?);
    Ok(ExitCode::from(EXIT_INVALID_REQUEST))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dirscope").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_unreadable_config_is_an_error_document() {
        let cli = parse(&["--config", "/definitely/not/here.json", "drives"]);

        let err = run(&cli).unwrap_err();
        assert!(matches!(err, ScanError::ConfigRead { .. }));
        assert_eq!(ErrorDocument::from(&err).code, "INVALID_CONFIG");
    }

    #[test]
    fn test_malformed_config_is_an_error_document() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let cli = parse(&["--config", file.path().to_str().unwrap(), "drives"]);
        let err = run(&cli).unwrap_err();

        assert!(matches!(err, ScanError::ConfigParse { .. }));
        assert_eq!(ErrorDocument::from(&err).code, "INVALID_CONFIG");
    }

    #[test]
    fn test_null_request_path_is_invalid() {
        let cli = parse(&["scan-request", r#"{"path": null}"#]);
        let err = run(&cli).unwrap_err();
        assert_eq!(ErrorDocument::from(&err).code, "INVALID_PATH");
    }

    #[test]
    fn test_drives_document() {
        let cli = parse(&["drives"]);
        let json = run(&cli).unwrap().unwrap();
        assert!(json.starts_with(r#"{"drives":["#));
    }
}
