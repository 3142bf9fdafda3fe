//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from vocab-core
pub use vocab_core::types::{LevelRule, SeedEntry, SeedReport, VocabularyItem};

// === Database Entity Types ===

/// Vocabulary row in SQLite
#[derive(Debug, Clone, FromRow)]
pub struct DbVocab {
    pub id: i64,
    pub word: String,
    pub translation: String,
    pub level: Option<i64>,
    pub last_usage: Option<DateTime<Utc>>,
}

impl DbVocab {
    /// Convert to API vocabulary item
    pub fn to_api_item(&self) -> VocabularyItem {
        VocabularyItem {
            id: self.id,
            word: self.word.clone(),
            translation: self.translation.clone(),
            level: self
                .level
                .and_then(|level| u32::try_from(level).ok())
                .filter(|level| *level >= 1),
            last_usage: self.last_usage,
        }
    }
}

// === API Request/Response Types ===

/// PUT /api/vocab/:id body. Any `id` in the body is ignored in favour of the path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVocabRequest {
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub last_usage: Option<DateTime<Utc>>,
}

impl UpdateVocabRequest {
    /// Attach the path id to produce the row to store.
    pub fn into_item(self, id: i64) -> VocabularyItem {
        VocabularyItem {
            id,
            word: self.word,
            translation: self.translation,
            level: self.level,
            last_usage: self.last_usage,
        }
    }
}

/// POST /api/vocab/load response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadVocabResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: SeedReport,
}
