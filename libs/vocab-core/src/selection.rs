//! Session selector: uniform random pick among eligible items.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eligibility::is_eligible;
use crate::rules::RuleTable;
use crate::types::VocabularyItem;

/// All items that may be shown at `now`, in collection order.
pub fn eligible<'a>(
    items: &'a [VocabularyItem],
    rules: &RuleTable,
    now: DateTime<Utc>,
) -> Vec<&'a VocabularyItem> {
    items
        .iter()
        .filter(|item| is_eligible(item, rules, now))
        .collect()
}

/// Pick the next item to show, or `None` if nothing is eligible.
///
/// Every eligible item has the same chance; level and recency carry no weight.
pub fn select_next<'a, R: Rng + ?Sized>(
    items: &'a [VocabularyItem],
    rules: &RuleTable,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Option<&'a VocabularyItem> {
    eligible(items, rules, now).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LevelRule;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rules() -> RuleTable {
        RuleTable::new(vec![LevelRule {
            level: 2,
            minimum_hours_since_last_use: 24,
        }])
        .unwrap()
    }

    fn cooling(id: i64, now: DateTime<Utc>) -> VocabularyItem {
        VocabularyItem {
            level: Some(2),
            last_usage: Some(now - Duration::hours(1)),
            ..VocabularyItem::new(id, format!("word{id}"), format!("Wort{id}"))
        }
    }

    #[test]
    fn empty_collection_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_next(&[], &rules(), Utc::now(), &mut rng).is_none());
    }

    #[test]
    fn nothing_eligible_selects_nothing() {
        let now = Utc::now();
        let items = vec![cooling(1, now), cooling(2, now)];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(select_next(&items, &rules(), now, &mut rng).is_none());
    }

    #[test]
    fn always_selects_an_eligible_member() {
        let now = Utc::now();
        let items = vec![
            cooling(1, now),
            VocabularyItem::new(2, "casa", "Haus"),
            cooling(3, now),
            VocabularyItem::new(4, "gato", "Katze"),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let picked = select_next(&items, &rules(), now, &mut rng).unwrap();
            assert!(picked.id == 2 || picked.id == 4, "picked {}", picked.id);
        }
    }

    #[test]
    fn every_eligible_item_can_be_picked() {
        let now = Utc::now();
        let items: Vec<_> = (1..=5)
            .map(|id| VocabularyItem::new(id, format!("w{id}"), format!("t{id}")))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<i64> = (0..500)
            .filter_map(|_| select_next(&items, &rules(), now, &mut rng))
            .map(|item| item.id)
            .collect();
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn eligible_keeps_collection_order() {
        let now = Utc::now();
        let items = vec![
            VocabularyItem::new(3, "a", "b"),
            cooling(1, now),
            VocabularyItem::new(2, "c", "d"),
        ];
        let ids: Vec<i64> = eligible(&items, &rules(), now)
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
