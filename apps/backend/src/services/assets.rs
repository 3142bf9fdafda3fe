//! Static asset loading: seed vocabulary and rule table documents.

use std::path::Path;

use vocab_core::rules::RuleTable;
use vocab_core::seed::parse_seed;
use vocab_core::types::SeedEntry;

use crate::error::{ApiError, Result};

/// Read and parse the seed vocabulary document.
pub async fn load_seed_file(path: &Path) -> Result<Vec<SeedEntry>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ApiError::Seed(format!("cannot read seed file {}: {}", path.display(), e))
    })?;

    parse_seed(&content).map_err(|e| {
        ApiError::Seed(format!("cannot parse seed file {}: {}", path.display(), e))
    })
}

/// Read and validate the rule table document.
pub async fn load_rule_table(path: &Path) -> Result<RuleTable> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        ApiError::Rules(format!("cannot read rules file {}: {}", path.display(), e))
    })?;

    RuleTable::from_json(&content).map_err(|e| {
        ApiError::Rules(format!("invalid rules file {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../data")
            .join(name)
    }

    #[tokio::test]
    async fn loads_bundled_seed_file() {
        let entries = load_seed_file(&data_file("vocab.json")).await.unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|entry| entry.is_valid()));
    }

    #[tokio::test]
    async fn loads_bundled_rule_table() {
        let rules = load_rule_table(&data_file("ruleSet.json")).await.unwrap();
        assert_eq!(rules.rule_for(1).map(|r| r.minimum_hours_since_last_use), Some(0));
    }

    #[tokio::test]
    async fn missing_seed_file_is_a_seed_error() {
        let err = load_seed_file(&data_file("missing.json")).await.unwrap_err();
        assert!(matches!(err, ApiError::Seed(_)));
    }

    #[tokio::test]
    async fn missing_rules_file_is_a_rules_error() {
        let err = load_rule_table(&data_file("missing.json")).await.unwrap_err();
        assert!(matches!(err, ApiError::Rules(_)));
    }
}
