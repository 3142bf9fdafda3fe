//! Test fixtures and factory functions for creating test data.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde_json::json;

/// Path to a file in the workspace `data/` directory.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

/// Number of entries in the bundled seed file.
pub fn bundled_seed_len() -> usize {
    let content = std::fs::read_to_string(data_path("vocab.json")).expect("bundled seed file");
    vocab_core::seed::parse_seed(&content)
        .expect("bundled seed parses")
        .len()
}

/// Create a load request body from word/translation pairs.
pub fn load_request(pairs: &[(&str, &str)]) -> serde_json::Value {
    json!(pairs
        .iter()
        .map(|(word, translation)| json!({ "word": word, "translation": translation }))
        .collect::<Vec<_>>())
}

/// Create an update request body the way the client sends it.
pub fn update_request(
    id: i64,
    word: &str,
    translation: &str,
    level: Option<u32>,
    last_usage: Option<DateTime<Utc>>,
) -> serde_json::Value {
    json!({
        "id": id,
        "word": word,
        "translation": translation,
        "level": level,
        "lastUsage": last_usage,
    })
}
