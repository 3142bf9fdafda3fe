//! Drives a [`ReviewSession`] against the backend.
//!
//! Transport and parse failures never end the session: fetches degrade to
//! empty results and failed grades leave the current card on screen.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vocab_core::error::ReviewError;
use vocab_core::review::ReviewSession;
use vocab_core::rules::RuleTable;
use vocab_core::types::{Grade, SeedEntry, SeedReport, VocabularyItem};

use crate::client::{ApiClient, ClientError};

/// Backend operations the trainer needs.
#[allow(async_fn_in_trait)]
pub trait VocabApi {
    async fn fetch_rules(&self) -> Result<RuleTable, ClientError>;
    async fn list_vocab(&self) -> Result<Vec<VocabularyItem>, ClientError>;
    async fn load_vocab(&self, entries: &[SeedEntry]) -> Result<SeedReport, ClientError>;
    async fn update_vocab(&self, item: &VocabularyItem) -> Result<VocabularyItem, ClientError>;
}

impl VocabApi for ApiClient {
    async fn fetch_rules(&self) -> Result<RuleTable, ClientError> {
        ApiClient::fetch_rules(self).await
    }

    async fn list_vocab(&self) -> Result<Vec<VocabularyItem>, ClientError> {
        ApiClient::list_vocab(self).await
    }

    async fn load_vocab(&self, entries: &[SeedEntry]) -> Result<SeedReport, ClientError> {
        ApiClient::load_vocab(self, entries).await
    }

    async fn update_vocab(&self, item: &VocabularyItem) -> Result<VocabularyItem, ClientError> {
        ApiClient::update_vocab(self, item).await
    }
}

/// Result of grading the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeOutcome {
    Saved,
    Failed(String),
}

pub struct Trainer<A> {
    api: A,
    rng: StdRng,
}

impl<A: VocabApi> Trainer<A> {
    pub fn new(api: A) -> Self {
        Self::with_rng(api, StdRng::from_entropy())
    }

    pub fn with_rng(api: A, rng: StdRng) -> Self {
        Self { api, rng }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load rules and vocabulary, seeding an empty store first.
    pub async fn start(&mut self, seed: &[SeedEntry]) -> ReviewSession {
        let rules = match self.api.fetch_rules().await {
            Ok(rules) => rules,
            Err(e) => {
                tracing::warn!("Failed to load rule table: {}", e);
                RuleTable::default()
            }
        };

        let mut items = self.fetch_items().await;
        if items.is_empty() {
            match self.api.load_vocab(seed).await {
                Ok(report) => tracing::info!(
                    "Seeded vocabulary: {} inserted, {} skipped, {} failed",
                    report.inserted,
                    report.skipped,
                    report.failed
                ),
                Err(e) => tracing::warn!("Failed to seed vocabulary: {}", e),
            }
            items = self.fetch_items().await;
        }

        ReviewSession::start(items, rules, Utc::now(), &mut self.rng)
    }

    /// Grade the revealed card and persist it.
    ///
    /// A failed save is logged and reported; the session stays on the card.
    pub async fn grade(
        &mut self,
        session: &mut ReviewSession,
        grade: Grade,
    ) -> Result<GradeOutcome, ReviewError> {
        let update = session.grade(grade, Utc::now())?;

        match self.api.update_vocab(&update).await {
            Ok(stored) => {
                session.persisted(stored, Utc::now(), &mut self.rng)?;
                Ok(GradeOutcome::Saved)
            }
            Err(e) => {
                tracing::warn!("Failed to save grade for vocab {}: {}", update.id, e);
                session.persist_failed()?;
                Ok(GradeOutcome::Failed(e.to_string()))
            }
        }
    }

    /// Re-read the vocabulary. On failure the session keeps its items.
    pub async fn reload(&mut self, session: &mut ReviewSession) {
        match self.api.list_vocab().await {
            Ok(items) => session.refresh(items, Utc::now(), &mut self.rng),
            Err(e) => tracing::warn!("Failed to reload vocabulary: {}", e),
        }
    }

    async fn fetch_items(&self) -> Vec<VocabularyItem> {
        match self.api.list_vocab().await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Failed to fetch vocabulary: {}", e);
                Vec::new()
            }
        }
    }
}
