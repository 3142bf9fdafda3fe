//! Rule table endpoint

use axum::{extract::State, Json};
use vocab_core::rules::RuleTable;

use crate::error::Result;
use crate::services::assets::load_rule_table;
use crate::AppState;

/// GET /api/rules
/// Reads the rule table fresh from disk on every call
pub async fn list(State(state): State<AppState>) -> Result<Json<RuleTable>> {
    let rules = load_rule_table(&state.config.rules_file).await?;
    Ok(Json(rules))
}
