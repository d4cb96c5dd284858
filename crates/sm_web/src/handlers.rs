use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sm_core::{RawSummaryRequest, SummarizationResult};
use std::sync::Arc;

use crate::{ApiError, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Smart Summarizer API is running.".to_string(),
    })
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RawSummaryRequest>, JsonRejection>,
) -> Result<Json<SummarizationResult>, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        tracing::info!("Rejected summarize body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    match state.summarizer.create_summary(&raw).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_client_error() => {
            tracing::info!("Rejected summarize request: {}", e);
            Err(e.into())
        }
        Err(e) => {
            tracing::error!("Summarize request failed: {}", e);
            Err(e.into())
        }
    }
}
