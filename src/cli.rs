use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Fetch(FetchArgs),
    Extract(ExtractArgs),
    Weekly(WeeklyArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// JLPT level to download (only 5 is currently supported).
    #[arg(long)]
    pub level: u8,

    /// Output file path for the raw page HTML.
    #[arg(long)]
    pub out: String,
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input path to a saved vocabulary page (created by `fetch`).
    #[arg(long)]
    pub input: String,

    /// Output file path for the JSON vocabulary store.
    #[arg(long)]
    pub out: String,
}

#[derive(Debug, Args)]
pub struct WeeklyArgs {
    /// JLPT level to study (only 5 is currently supported).
    #[arg(long)]
    pub level: u8,

    /// Allow a network fetch when no store file exists yet for the level.
    #[arg(long)]
    pub fetch: bool,

    /// Number of unseen words to pick for the week.
    #[arg(long, default_value_t = 10)]
    pub count: usize,

    /// Directory holding the per-level JSON stores.
    #[arg(long, default_value = ".")]
    pub store_dir: String,
}
