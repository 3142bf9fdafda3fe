//! Seed planning.
//!
//! The seed document is a JSON array of `{word, translation}` objects. Extra
//! fields are ignored; seeded rows always start without a level or last usage.

use std::collections::HashSet;

use crate::types::{SeedEntry, VocabularyItem};

/// Parse the seed vocabulary document.
pub fn parse_seed(content: &str) -> Result<Vec<SeedEntry>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Entries that still need inserting, in input order.
///
/// Drops pairs that already exist, repeats within `entries`, and entries
/// with an empty word or translation.
pub fn pending_entries(existing: &[VocabularyItem], entries: &[SeedEntry]) -> Vec<SeedEntry> {
    let mut seen: HashSet<(&str, &str)> = existing
        .iter()
        .map(|item| (item.word.as_str(), item.translation.as_str()))
        .collect();

    let mut pending = Vec::new();
    for entry in entries {
        if entry.is_valid() && seen.insert((entry.word.as_str(), entry.translation.as_str())) {
            pending.push(entry.clone());
        }
    }
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_seed_document() {
        let entries = parse_seed(
            r#"[{"word": "perro", "translation": "Hund"}, {"word": "gato", "translation": "Katze", "level": 3}]"#,
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![SeedEntry::new("perro", "Hund"), SeedEntry::new("gato", "Katze")]
        );
    }

    #[test]
    fn rejects_malformed_seed_document() {
        assert!(parse_seed(r#"[{"word": "perro"}]"#).is_err());
        assert!(parse_seed("not json").is_err());
    }

    #[test]
    fn skips_existing_pairs() {
        let existing = vec![VocabularyItem::new(1, "perro", "Hund")];
        let entries = vec![SeedEntry::new("perro", "Hund"), SeedEntry::new("gato", "Katze")];
        assert_eq!(
            pending_entries(&existing, &entries),
            vec![SeedEntry::new("gato", "Katze")]
        );
    }

    #[test]
    fn same_word_with_other_translation_is_new() {
        let existing = vec![VocabularyItem::new(1, "banco", "Bank")];
        let entries = vec![SeedEntry::new("banco", "Sitzbank")];
        assert_eq!(pending_entries(&existing, &entries), entries);
    }

    #[test]
    fn dedups_within_input() {
        let entries = vec![
            SeedEntry::new("perro", "Hund"),
            SeedEntry::new("perro", "Hund"),
            SeedEntry::new("gato", "Katze"),
        ];
        assert_eq!(
            pending_entries(&[], &entries),
            vec![SeedEntry::new("perro", "Hund"), SeedEntry::new("gato", "Katze")]
        );
    }

    #[test]
    fn skips_empty_entries() {
        let entries = vec![SeedEntry::new("", "Hund"), SeedEntry::new("gato", " ")];
        assert!(pending_entries(&[], &entries).is_empty());
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let entries = vec![SeedEntry::new("perro", "Hund"), SeedEntry::new("gato", "Katze")];
        let first = pending_entries(&[], &entries);
        let stored: Vec<VocabularyItem> = first
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                VocabularyItem::new(idx as i64 + 1, &entry.word, &entry.translation)
            })
            .collect();
        assert!(pending_entries(&stored, &entries).is_empty());
    }
}
