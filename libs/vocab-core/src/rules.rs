//! Rule table loading.
//!
//! # Format
//! ```json
//! [
//!   { "Level": 1, "duration": "0" },
//!   { "Level": 2, "duration": "24" }
//! ]
//! ```
//!
//! `duration` is a whole number of hours, given either as a numeric string
//! or a JSON number. Fractional values are truncated toward zero. Anything
//! non-numeric or negative is rejected when the table is loaded.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::types::LevelRule;

/// Rule as written in the static rule document.
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(rename = "Level", alias = "level")]
    level: u32,
    #[serde(alias = "minimumHoursSinceLastUse")]
    duration: RawDuration,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Number(f64),
    Text(String),
}

/// Validated mapping from level to cooldown, ordered by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<LevelRule>,
}

impl RuleTable {
    /// Build a table, rejecting level 0 and duplicate levels.
    pub fn new(mut rules: Vec<LevelRule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if rule.level == 0 {
                return Err(RuleError::InvalidLevel { level: rule.level });
            }
            if !seen.insert(rule.level) {
                return Err(RuleError::DuplicateLevel { level: rule.level });
            }
        }
        rules.sort_by_key(|rule| rule.level);
        Ok(Self { rules })
    }

    /// Parse the static rule document (`[{Level, duration}]`).
    pub fn from_json(content: &str) -> Result<Self, RuleError> {
        let raw: Vec<RawRule> = serde_json::from_str(content)?;
        let rules = raw
            .into_iter()
            .map(|rule| {
                Ok(LevelRule {
                    level: rule.level,
                    minimum_hours_since_last_use: parse_hours(rule.level, &rule.duration)?,
                })
            })
            .collect::<Result<Vec<_>, RuleError>>()?;
        Self::new(rules)
    }

    /// Rule for exactly this level, if any.
    pub fn rule_for(&self, level: u32) -> Option<&LevelRule> {
        self.rules.iter().find(|rule| rule.level == level)
    }

    pub fn rules(&self) -> &[LevelRule] {
        &self.rules
    }
}

fn parse_hours(level: u32, raw: &RawDuration) -> Result<u32, RuleError> {
    let value = match raw {
        RawDuration::Number(n) => *n,
        RawDuration::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| RuleError::InvalidDuration {
                level,
                value: text.clone(),
            })?,
    };

    if !value.is_finite() || value > f64::from(u32::MAX) {
        return Err(RuleError::InvalidDuration {
            level,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(RuleError::NegativeDuration { level, value });
    }

    Ok(value.trunc() as u32)
}
