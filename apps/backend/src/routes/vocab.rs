//! Vocabulary endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::assets::load_seed_file;
use crate::AppState;

/// GET /api/vocab
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<VocabularyItem>>> {
    let rows = state.db.get_all_vocab().await?;
    Ok(Json(rows.iter().map(DbVocab::to_api_item).collect()))
}

/// POST /api/vocab/load
/// Inserts every pair not already stored. An empty body (or empty array)
/// loads the configured seed file instead.
pub async fn load(State(state): State<AppState>, body: Bytes) -> Result<Json<LoadVocabResponse>> {
    let entries = match parse_seed_body(&body)? {
        Some(entries) if !entries.is_empty() => entries,
        _ => load_seed_file(&state.config.seed_file).await?,
    };

    let report = state.db.seed_vocab(&entries).await?;

    tracing::info!(
        "Loaded vocabulary: {} inserted, {} skipped, {} failed",
        report.inserted,
        report.skipped,
        report.failed
    );

    Ok(Json(LoadVocabResponse {
        message: "Vocabulary loaded into the database.".to_string(),
        report,
    }))
}

/// PUT /api/vocab/:id
/// Overwrites the row and returns it as stored. A missing id is not an error;
/// the payload is echoed back.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVocabRequest>,
) -> Result<Json<VocabularyItem>> {
    let item = payload.into_item(id);
    validate(&item)?;

    let touched = state.db.update_vocab(&item).await?;
    if touched == 0 {
        tracing::debug!("Update for vocab {} matched no row", id);
        return Ok(Json(item));
    }

    let stored = state.db.get_vocab(id).await?;
    Ok(Json(stored.map(|row| row.to_api_item()).unwrap_or(item)))
}

fn parse_seed_body(body: &[u8]) -> Result<Option<Vec<SeedEntry>>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::Seed(format!("unparsable request body: {}", e)))
}

fn validate(item: &VocabularyItem) -> Result<()> {
    if item.word.trim().is_empty() || item.translation.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "word and translation must not be empty".to_string(),
        ));
    }
    if item.level == Some(0) {
        return Err(ApiError::BadRequest("level must be at least 1".to_string()));
    }
    Ok(())
}
