use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use matcher::score_percent;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Plagiarism check request
#[derive(Debug, Deserialize)]
pub struct PlagiarismRequest {
    /// Submitted source code
    #[serde(default)]
    pub code: Option<String>,
}

/// Plagiarism check response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismResponse {
    /// Best corpus score as a percentage with one decimal
    pub score: f64,
    pub is_flagged: bool,
    /// Name of the matched reference; only set when flagged
    pub matched_with: Option<String>,
}

/// Score a submission against the reference corpus.
///
/// Missing or empty `code` is rejected with 400. Anything else, including
/// whitespace-only or very short code, is scored (and scores 0).
pub async fn check_plagiarism(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<PlagiarismRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload?;
    let code = match request.code {
        Some(code) if !code.is_empty() => code,
        _ => return Err(ServerError::BadRequest("No code provided".to_string())),
    };

    tracing::info!(length = code.len(), "analyzing submission");

    let result = state.matcher.match_submission(&code);
    let response = PlagiarismResponse {
        score: result.score_percent(),
        is_flagged: result.is_flagged,
        matched_with: result.matched_name().map(str::to_owned),
    };

    tracing::info!(
        score = response.score,
        flagged = response.is_flagged,
        matched_with = response.matched_with.as_deref().unwrap_or("-"),
        "submission scored"
    );

    Ok(Json(response))
}

/// Pairwise comparison request
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CompareResponse {
    /// Jaccard similarity as a percentage with one decimal
    pub score: f64,
}

/// Similarity of two snippets under the server's fingerprint rules.
pub async fn compare_code(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload?;
    let score = state.matcher.compare(&request.left, &request.right);

    Ok(Json(CompareResponse {
        score: score_percent(score),
    }))
}

/// Summary of one reference entry
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntrySummary {
    pub id: String,
    pub name: String,
    pub fingerprint_size: usize,
}

/// List the reference corpus in load order.
pub async fn list_corpus(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let entries: Vec<CorpusEntrySummary> = state
        .matcher
        .corpus()
        .iter()
        .map(|entry| CorpusEntrySummary {
            id: entry.id().to_string(),
            name: entry.name().to_string(),
            fingerprint_size: entry.fingerprint().len(),
        })
        .collect();

    Json(entries)
}
