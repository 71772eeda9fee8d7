mod list;
mod mock;
mod score;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wfpop_scoring::query::DEFAULT_QUERY_LIMIT;

#[derive(Debug, Parser)]
#[command(name = "wfpop")]
#[command(about = "Workflow popularity scoring command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Deduplicate, score and rank a raw dataset
    Score {
        /// Raw dataset to read (defaults to `WFPOP_INPUT_PATH`)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Scored dataset to write (defaults to `WFPOP_OUTPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print records from the scored dataset, falling back to the raw one
    List {
        /// Only records from this platform (case-insensitive)
        #[arg(long)]
        platform: Option<String>,

        /// Only records from this country (case-insensitive)
        #[arg(long)]
        country: Option<String>,

        /// Maximum number of records to print (1-1000)
        #[arg(long, default_value_t = DEFAULT_QUERY_LIMIT)]
        limit: usize,

        /// Read the raw dataset even if a scored one exists
        #[arg(long, conflicts_with = "dataset")]
        raw: bool,

        /// Read this document instead of the configured datasets
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Write a deterministic mock raw dataset for offline runs
    Mock {
        /// Where to write the dataset (defaults to `WFPOP_INPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Seed-keyword YAML file (defaults to `WFPOP_KEYWORDS_PATH`, then built-ins)
        #[arg(long)]
        keywords: Option<PathBuf>,

        /// Mock videos per keyword and region
        #[arg(long)]
        videos_per_keyword: Option<usize>,

        /// Mock forum topics per keyword
        #[arg(long)]
        topics_per_keyword: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = wfpop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Score { input, output }) => score::run_score(&config, input, output),
        Some(Commands::List {
            platform,
            country,
            limit,
            raw,
            dataset,
        }) => list::run_list(
            &config,
            &list::ListArgs {
                platform,
                country,
                limit,
                raw,
                dataset,
            },
        ),
        Some(Commands::Mock {
            output,
            keywords,
            videos_per_keyword,
            topics_per_keyword,
        }) => mock::run_mock(
            &config,
            &mock::MockArgs {
                output,
                keywords,
                videos_per_keyword,
                topics_per_keyword,
            },
        ),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
