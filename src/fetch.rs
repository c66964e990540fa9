use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use reqwest::header::{ACCEPT, USER_AGENT};

use crate::cli::FetchArgs;
use crate::error::VocabError;
use crate::level::Level;

/// Retrieve the raw vocabulary page for `level`.
///
/// One blocking GET against the level's fixed source url. No disk side
/// effects; callers decide whether and where to persist the body.
pub fn page(level: Level) -> Result<String, VocabError> {
    let url = level.source_url()?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    tracing::info!(%url, "fetching vocabulary page");
    let response = client
        .get(url)
        .header(USER_AGENT, "jlptvocab/0.1")
        .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(VocabError::RemoteFetch {
            status: status.as_u16(),
        });
    }

    Ok(response.text()?)
}

pub fn run(args: FetchArgs) -> anyhow::Result<()> {
    let out_path = Path::new(&args.out);
    if out_path.exists() {
        anyhow::bail!("raw page output already exists: {}", out_path.display());
    }

    let body = page(Level(args.level)).context("fetch vocabulary page")?;

    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(out_path)
        .with_context(|| format!("create raw page file: {}", out_path.display()))?;
    file.write_all(body.as_bytes())
        .with_context(|| format!("write raw page: {}", out_path.display()))?;

    tracing::info!(bytes = body.len(), path = %out_path.display(), "saved raw page");
    Ok(())
}
