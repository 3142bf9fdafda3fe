//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vocabulary row as stored by the backend and shown by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub id: i64,
    pub word: String,
    pub translation: String,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub last_usage: Option<DateTime<Utc>>,
}

impl VocabularyItem {
    /// Create a never-graded item.
    pub fn new(id: i64, word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            translation: translation.into(),
            level: None,
            last_usage: None,
        }
    }

    /// Level used for grading. Unset (or non-positive) levels count as 1.
    pub fn effective_level(&self) -> u32 {
        self.graded_level().unwrap_or(1)
    }

    /// The stored level, if it is a valid (>= 1) level.
    pub fn graded_level(&self) -> Option<u32> {
        self.level.filter(|level| *level >= 1)
    }

    /// True until the item has both a level and a last usage timestamp.
    pub fn is_new(&self) -> bool {
        self.graded_level().is_none() || self.last_usage.is_none()
    }
}

/// Minimum cooldown before an item at `level` may be shown again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRule {
    pub level: u32,
    pub minimum_hours_since_last_use: u32,
}

/// One `{word, translation}` pair from the seed vocabulary document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedEntry {
    pub word: String,
    pub translation: String,
}

impl SeedEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }

    /// Both sides must contain something other than whitespace.
    pub fn is_valid(&self) -> bool {
        !self.word.trim().is_empty() && !self.translation.trim().is_empty()
    }
}

/// Outcome of one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Self-assessed recall for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Correct,
    Incorrect,
}
