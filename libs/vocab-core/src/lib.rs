//! Core vocabulary trainer library shared by the backend and the terminal client.
//!
//! Provides:
//! - Rule table loading (level -> minimum cooldown hours)
//! - Eligibility filter and random session selector
//! - Level grading and the review state machine
//! - Seed planning (dedup by word + translation)
//! - Shared types (VocabularyItem, LevelRule, SeedEntry, etc.)

pub mod eligibility;
pub mod error;
pub mod grading;
pub mod review;
pub mod rules;
pub mod seed;
pub mod selection;
pub mod types;

pub use eligibility::{is_eligible, next_eligible_at};
pub use error::{ReviewError, RuleError};
pub use grading::apply_grade;
pub use review::{ReviewSession, ReviewState};
pub use rules::RuleTable;
pub use seed::{parse_seed, pending_entries};
pub use selection::{eligible, select_next};
pub use types::{Grade, LevelRule, SeedEntry, SeedReport, VocabularyItem};
