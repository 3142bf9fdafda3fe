//! Startup seeding.

use std::path::Path;

use vocab_core::types::SeedReport;

use crate::db::Database;
use crate::error::Result;
use crate::services::assets::load_seed_file;

/// Seed the store from `seed_file` if it holds no rows yet.
///
/// Returns `None` when the store already had data.
pub async fn seed_if_empty(db: &Database, seed_file: &Path) -> Result<Option<SeedReport>> {
    if db.count_vocab().await? > 0 {
        return Ok(None);
    }

    let entries = load_seed_file(seed_file).await?;
    let report = db.seed_vocab(&entries).await?;

    tracing::info!(
        "Seeded vocabulary from {}: {} inserted, {} skipped, {} failed",
        seed_file.display(),
        report.inserted,
        report.skipped,
        report.failed
    );

    Ok(Some(report))
}
