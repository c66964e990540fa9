use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    jlptvocab::logging::init().context("init logging")?;

    let cli = jlptvocab::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        jlptvocab::cli::Command::Fetch(args) => {
            jlptvocab::fetch::run(args).context("fetch")?;
        }
        jlptvocab::cli::Command::Extract(args) => {
            jlptvocab::extract::run(args).context("extract")?;
        }
        jlptvocab::cli::Command::Weekly(args) => {
            jlptvocab::weekly::run(args).context("weekly")?;
        }
    }

    Ok(())
}
