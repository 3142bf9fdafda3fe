//! Eligibility filter: may an item be shown right now?

use chrono::{DateTime, Duration, Utc};

use crate::rules::RuleTable;
use crate::types::VocabularyItem;

/// Decide whether `item` may be shown at `now`.
///
/// Never-graded items are always eligible. Graded items are eligible once at
/// least the rule's cooldown has elapsed since their last usage; a level with
/// no rule is never eligible.
pub fn is_eligible(item: &VocabularyItem, rules: &RuleTable, now: DateTime<Utc>) -> bool {
    let (Some(level), Some(last_usage)) = (item.graded_level(), item.last_usage) else {
        return true;
    };

    match rules.rule_for(level) {
        Some(rule) => now - last_usage >= cooldown(rule.minimum_hours_since_last_use),
        None => false,
    }
}

/// When a graded item becomes eligible again.
///
/// Returns `None` for never-graded items (eligible now), for items at a
/// level without a rule (never eligible) and for cooldowns that run past the
/// representable date range.
pub fn next_eligible_at(item: &VocabularyItem, rules: &RuleTable) -> Option<DateTime<Utc>> {
    let level = item.graded_level()?;
    let last_usage = item.last_usage?;
    let rule = rules.rule_for(level)?;
    last_usage.checked_add_signed(cooldown(rule.minimum_hours_since_last_use))
}

fn cooldown(hours: u32) -> Duration {
    Duration::hours(i64::from(hours))
}
