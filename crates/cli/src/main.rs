//! CLI binary for writing and analyzing log files.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log_analyzer_logger::{ConsoleSink, FanoutSink, FileSink, Sink};
use log_analyzer_scanner::{count_by_level, filter_logs};

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Logger error
    #[error(transparent)]
    Logger(#[from] log_analyzer_logger::Error),

    /// Scanner error
    #[error(transparent)]
    Scanner(#[from] log_analyzer_scanner::Error),
}

#[derive(Clone, Debug, Parser)]
#[command(name = "log-analyzer", version, about, long_about = None)]
struct Args {
    /// Log file appended to by `log` and by the analyze summary records
    #[arg(
        long,
        default_value = "log.txt",
        env = "LOG_ANALYZER_LOG_FILE",
        global = true
    )]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Append one record to the console and the log file
    Log {
        /// Level token: Error, Info, or Debug
        level: String,

        /// Message words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Count and filter records in an existing log file
    Analyze {
        /// File to scan
        filename: PathBuf,

        /// Level token to match
        #[arg(long)]
        level: String,

        /// Case-insensitive keyword; empty matches every line
        #[arg(long, default_value = "")]
        keyword: String,
    },
}

async fn run(args: Args) -> Result<(), Error> {
    let sink = FanoutSink::new(vec![
        Arc::new(ConsoleSink::new()) as Arc<dyn Sink>,
        Arc::new(FileSink::open(&args.log_file).await?),
    ]);

    match args.command {
        Command::Log { level, message } => {
            sink.log(&level, &message.join(" ")).await?;
        }
        Command::Analyze {
            filename,
            level,
            keyword,
        } => {
            let count = count_by_level(&filename, &level)?;
            sink.log("Info", &format!("counted level {level}: {count}"))
                .await?;

            let lines = filter_logs(&filename, &level, &keyword)?;
            sink.log("Info", &format!("filtered lines {level}: {lines:?}"))
                .await?;
        }
    }

    sink.close().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            // clap exits 2 on usage errors by default; this tool promises 1.
            let _ = error.print();
            std::process::exit(i32::from(error.use_stderr()));
        }
    };

    if let Err(error) = run(args).await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
