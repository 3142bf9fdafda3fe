//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a test server over an in-memory database
//! - Helper functions for creating test data
//!
//! Every context gets its own `sqlite::memory:` database, so tests do not
//! share state and need no external services.

pub mod fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use vocab_trainer_backend::config::Config;
use vocab_trainer_backend::db::Database;
use vocab_trainer_backend::models::VocabularyItem;
use vocab_trainer_backend::{router, AppState};

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context using the bundled seed and rule files.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test context after adjusting the default test config.
    ///
    /// # Panics
    /// Panics if the in-memory database cannot be opened or migrated.
    pub async fn with_config<F>(adjust: F) -> Self
    where
        F: FnOnce(&mut Config),
    {
        let mut config = Config {
            database_url: "sqlite::memory:".to_string(),
            seed_file: fixtures::data_path("vocab.json"),
            rules_file: fixtures::data_path("ruleSet.json"),
            allowed_origins: Vec::new(),
            seed_on_startup: false,
            ..Config::default()
        };
        adjust(&mut config);

        let db = Database::connect(&config.database_url)
            .await
            .expect("Failed to open test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            config: Arc::new(config),
        };

        Self {
            db,
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start an axum-test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Insert a never-graded row and return it.
    pub async fn create_vocab(&self, word: &str, translation: &str) -> VocabularyItem {
        let id = sqlx::query("INSERT INTO vocab (word, translation) VALUES (?, ?)")
            .bind(word)
            .bind(translation)
            .execute(self.db.pool())
            .await
            .expect("Failed to insert test vocab")
            .last_insert_rowid();
        VocabularyItem::new(id, word, translation)
    }

    /// Read a row straight from the database.
    pub async fn stored(&self, id: i64) -> Option<VocabularyItem> {
        self.db
            .get_vocab(id)
            .await
            .expect("Failed to read test vocab")
            .map(|row| row.to_api_item())
    }

    /// Path to a file under `tests/data`.
    pub fn test_data(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data")
            .join(name)
    }
}
