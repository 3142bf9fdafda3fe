//! Review state machine.
//!
//! One [`ReviewSession`] value owns the current state, the local copy of the
//! vocabulary and the rule table. The cycle is:
//!
//! ```text
//! Prompting --reveal--> Revealed --grade--> Grading --persisted--> Prompting | Empty
//!                           ^                   |
//!                           +---persist_failed--+
//! ```
//!
//! Persisting is the caller's job: [`ReviewSession::grade`] hands back the
//! updated row, and the caller reports the outcome with
//! [`ReviewSession::persisted`] or [`ReviewSession::persist_failed`].

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::eligibility::next_eligible_at;
use crate::error::ReviewError;
use crate::grading::apply_grade;
use crate::rules::RuleTable;
use crate::selection::select_next;
use crate::types::{Grade, VocabularyItem};

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewState {
    /// Nothing is eligible right now.
    Empty,
    /// Only the translation is shown.
    Prompting(VocabularyItem),
    /// Both sides are shown, waiting for a grade.
    Revealed(VocabularyItem),
    /// A graded update is being persisted.
    Grading {
        item: VocabularyItem,
        update: VocabularyItem,
    },
}

impl ReviewState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Prompting(_) => "prompting",
            Self::Revealed(_) => "revealed",
            Self::Grading { .. } => "grading",
        }
    }

    /// The item on screen, if any.
    pub fn current(&self) -> Option<&VocabularyItem> {
        match self {
            Self::Empty => None,
            Self::Prompting(item) | Self::Revealed(item) => Some(item),
            Self::Grading { item, .. } => Some(item),
        }
    }
}

/// A single user's review session.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    state: ReviewState,
    items: Vec<VocabularyItem>,
    rules: RuleTable,
}

impl ReviewSession {
    /// Start a session and pick the first item.
    pub fn start<R: Rng + ?Sized>(
        items: Vec<VocabularyItem>,
        rules: RuleTable,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        let mut session = Self {
            state: ReviewState::Empty,
            items,
            rules,
        };
        session.select(now, rng);
        session
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn current(&self) -> Option<&VocabularyItem> {
        self.state.current()
    }

    pub fn items(&self) -> &[VocabularyItem] {
        &self.items
    }

    /// Show the hidden side of the current item.
    pub fn reveal(&mut self) -> Result<(), ReviewError> {
        match std::mem::replace(&mut self.state, ReviewState::Empty) {
            ReviewState::Prompting(item) => {
                self.state = ReviewState::Revealed(item);
                Ok(())
            }
            other => self.refuse("reveal", other),
        }
    }

    /// Grade the revealed item. Returns the row the caller must persist.
    pub fn grade(
        &mut self,
        grade: Grade,
        now: DateTime<Utc>,
    ) -> Result<VocabularyItem, ReviewError> {
        match std::mem::replace(&mut self.state, ReviewState::Empty) {
            ReviewState::Revealed(item) => {
                let update = apply_grade(&item, grade, now);
                self.state = ReviewState::Grading {
                    item,
                    update: update.clone(),
                };
                Ok(update)
            }
            other => self.refuse("grade", other),
        }
    }

    /// The update was stored; merge the stored row and pick the next item.
    pub fn persisted<R: Rng + ?Sized>(
        &mut self,
        stored: VocabularyItem,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(), ReviewError> {
        match std::mem::replace(&mut self.state, ReviewState::Empty) {
            ReviewState::Grading { .. } => {
                self.upsert_local(stored);
                self.select(now, rng);
                Ok(())
            }
            other => self.refuse("complete a grade", other),
        }
    }

    /// The update was not stored; stay on the current item so it can be graded again.
    pub fn persist_failed(&mut self) -> Result<(), ReviewError> {
        match std::mem::replace(&mut self.state, ReviewState::Empty) {
            ReviewState::Grading { item, .. } => {
                self.state = ReviewState::Revealed(item);
                Ok(())
            }
            other => self.refuse("abandon a grade", other),
        }
    }

    /// Replace the local collection. Reselects unless a grade is in flight.
    pub fn refresh<R: Rng + ?Sized>(
        &mut self,
        items: Vec<VocabularyItem>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) {
        self.items = items;
        if !matches!(self.state, ReviewState::Grading { .. }) {
            self.select(now, rng);
        }
    }

    /// Earliest moment a cooling item becomes eligible again.
    pub fn next_eligible_at(&self) -> Option<DateTime<Utc>> {
        self.items
            .iter()
            .filter_map(|item| next_eligible_at(item, &self.rules))
            .min()
    }

    fn select<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) {
        self.state = match select_next(&self.items, &self.rules, now, rng) {
            Some(item) => ReviewState::Prompting(item.clone()),
            None => ReviewState::Empty,
        };
    }

    fn upsert_local(&mut self, stored: VocabularyItem) {
        match self.items.iter_mut().find(|item| item.id == stored.id) {
            Some(existing) => *existing = stored,
            None => self.items.push(stored),
        }
    }

    fn refuse<T>(&mut self, action: &'static str, state: ReviewState) -> Result<T, ReviewError> {
        let name = state.name();
        self.state = state;
        Err(ReviewError::InvalidTransition {
            action,
            state: name,
        })
    }
}
