//! SQLite database operations

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use vocab_core::seed::pending_entries;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper around a single-connection pool.
///
/// All writes go through one connection, which also keeps `sqlite::memory:`
/// databases alive for the lifetime of the pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the SQLite database at `database_url`
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    // === Vocabulary Repository ===

    /// Get all vocabulary rows
    pub async fn get_all_vocab(&self) -> Result<Vec<DbVocab>> {
        let rows = sqlx::query_as::<_, DbVocab>(
            r#"
            SELECT id, word, translation, level, last_usage
            FROM vocab
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a vocabulary row by ID
    pub async fn get_vocab(&self, id: i64) -> Result<Option<DbVocab>> {
        let row = sqlx::query_as::<_, DbVocab>(
            r#"
            SELECT id, word, translation, level, last_usage
            FROM vocab
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Count vocabulary rows
    pub async fn count_vocab(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vocab")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Overwrite the row with `item.id`. Returns the number of rows touched.
    pub async fn update_vocab(&self, item: &VocabularyItem) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE vocab
            SET word = ?, translation = ?, level = ?, last_usage = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.word)
        .bind(&item.translation)
        .bind(item.level.map(i64::from))
        .bind(item.last_usage)
        .bind(item.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Insert every entry whose word/translation pair is not stored yet.
    ///
    /// Runs in one transaction. A failed insert is logged and counted, the
    /// remaining entries are still attempted.
    pub async fn seed_vocab(&self, entries: &[SeedEntry]) -> Result<SeedReport> {
        let mut tx = self.pool.begin().await?;

        let existing: Vec<VocabularyItem> = sqlx::query_as::<_, DbVocab>(
            r#"
            SELECT id, word, translation, level, last_usage
            FROM vocab
            "#,
        )
        .fetch_all(&mut *tx)
        .await?
        .iter()
        .map(DbVocab::to_api_item)
        .collect();

        let pending = pending_entries(&existing, entries);
        let mut report = SeedReport {
            skipped: entries.len() - pending.len(),
            ..SeedReport::default()
        };

        for entry in &pending {
            let inserted = sqlx::query(
                r#"
                INSERT INTO vocab (word, translation)
                VALUES (?, ?)
                "#,
            )
            .bind(&entry.word)
            .bind(&entry.translation)
            .execute(&mut *tx)
            .await;

            match inserted {
                Ok(_) => report.inserted += 1,
                Err(e) => {
                    tracing::warn!("Failed to insert seed entry {:?}: {}", entry.word, e);
                    report.failed += 1;
                }
            }
        }

        tx.commit().await?;

        Ok(report)
    }
}
