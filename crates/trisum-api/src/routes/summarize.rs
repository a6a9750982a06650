use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use trisum_types::SummaryResult;

use crate::{
    error::{ApiError, ApiResult},
    service::{extract_text, SummarizeError},
    state::AppState,
};

/// `POST /api/summarize`: `{ "text": string }` in, three summaries out
///
/// The body is read raw: a missing, mistyped or unparseable `text` all map
/// to the same 400. A body over the configured limit is a JSON 413.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<SummaryResult>> {
    let body = body.map_err(|rejection| {
        tracing::warn!("Could not read request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let text = extract_text(&body).map_err(|e| {
        tracing::debug!("Rejected summarize request: {}", e);
        ApiError::from(e)
    })?;

    let summary = state.summarizer.summarize(&text).await.map_err(|e| {
        match &e {
            SummarizeError::MalformedResponse { reason, raw } => {
                tracing::error!(%reason, %raw, "AI response could not be parsed");
            }
            other => tracing::error!("Summarization failed: {}", other),
        }
        ApiError::from(e)
    })?;

    Ok(Json(summary))
}
