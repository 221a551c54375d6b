use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use daily_words::config::{Config, DEFAULT_CONFIG_FILE};
use daily_words::date::SystemClock;
use daily_words::index::{collect_stats, load_index, rebuild_index};
use daily_words::{WordAppender, WordSplitter};

/// Keeps a vocabulary list as one JSON file per day
#[derive(Parser, Debug)]
#[command(name = "daily-words", version, about)]
struct Cli {
    /// Config file (TOML); defaults are used when it does not exist
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory holding the word files, overrides the config
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append word=meaning lines to a day's file
    Add {
        /// Target date as DD.MM.YYYY (default: today)
        date: Option<String>,

        /// Input text file
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Split an aggregate words file into one file per day
    Split {
        /// Aggregate JSON file
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Rebuild the index from the daily files on disk
    Reindex,
    /// Word counts per indexed file
    Stats,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(dir) = cli.dir {
        config = config.with_data_dir(dir);
    }
    tracing::debug!(data_dir = %config.data_dir().display(), "configuration loaded");

    match cli.command {
        Command::Add { date, input } => {
            let appender = WordAppender::new(&config, SystemClock);
            // Bad dates and missing input are reported, not failed on
            match input {
                Some(input) => appender.append_from(&config.resolve(&input), date.as_deref())?,
                None => appender.append(date.as_deref())?,
            };
        }
        Command::Split { input } => {
            let splitter = WordSplitter::new(&config);
            match input {
                Some(input) => splitter.split_file(&config.resolve(&input))?,
                None => splitter.split()?,
            };
        }
        Command::Reindex => {
            rebuild_index(config.data_dir(), &config.index_path())?;
        }
        Command::Stats => {
            let index = load_index(&config.index_path())?;
            println!("📚 {} dates indexed", index.dates.len());
            let stats = collect_stats(config.data_dir(), &index)?;
            let missing = stats.missing().count();
            if missing > 0 {
                println!(
                    "⚠️  {} indexed files are missing, run `daily-words reindex`",
                    missing
                );
            }
        }
    }

    Ok(())
}
