//! Level grading.

use chrono::{DateTime, Utc};

use crate::types::{Grade, VocabularyItem};

/// Apply a grade to an item, returning the row to persist.
///
/// Correct recall moves the item up one level; incorrect recall drops it back
/// to level 1. Either way `last_usage` becomes `now`.
pub fn apply_grade(item: &VocabularyItem, grade: Grade, now: DateTime<Utc>) -> VocabularyItem {
    let level = match grade {
        Grade::Correct => item.effective_level().saturating_add(1),
        Grade::Incorrect => 1,
    };

    VocabularyItem {
        level: Some(level),
        last_usage: Some(now),
        ..item.clone()
    }
}
