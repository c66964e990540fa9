use std::path::PathBuf;

use anyhow::Context as _;

use crate::cli::WeeklyArgs;
use crate::level::Level;

/// The composite command: make sure a store exists for the level, then
/// draw and print this week's batch.
///
/// A missing store is only fetched when `--fetch` was given; the seen
/// flags flipped by the draw are persisted before anything is printed,
/// so a failed save never leaves the selection half-delivered.
pub fn run(args: WeeklyArgs) -> anyhow::Result<()> {
    let level = Level(args.level);
    let store_path = PathBuf::from(&args.store_dir).join(level.store_file_name());

    if !store_path.exists() {
        if !args.fetch {
            anyhow::bail!(
                "no store for {level} at {}; re-run with --fetch to download the vocabulary list",
                store_path.display()
            );
        }

        tracing::info!(%level, "weekly: fetch");
        let html = crate::fetch::page(level).context("fetch vocabulary page")?;

        tracing::info!("weekly: extract");
        let records = crate::extract::records(&html).context("parse vocabulary table")?;
        if records.is_empty() {
            anyhow::bail!("no vocabulary rows found on the {level} page");
        }

        crate::store::save(&store_path, &records).context("save store")?;
        tracing::info!(count = records.len(), path = %store_path.display(), "weekly: store created");
    }

    let mut records = crate::store::load(&store_path).context("load store")?;
    let picked = crate::sample::weekly(&mut records, args.count, &mut rand::rng())
        .context("draw weekly vocabulary")?;
    crate::store::save(&store_path, &records).context("save store")?;

    print!("{}", crate::present::table(&picked));
    Ok(())
}
