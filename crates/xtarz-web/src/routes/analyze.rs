//! Analysis route handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{debug, error, info};
use xtarz_core::analyzer::validate_topic;
use xtarz_core::{AnalysisOutcome, AnalyzerError};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

/// POST /analyze - Classify the topic and render its report.
///
/// Any unusable body (missing, not JSON, topic absent or blank) is a 400.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> (StatusCode, Json<AnalysisOutcome>) {
    let raw = match payload {
        Ok(Json(req)) => req.topic.unwrap_or_default(),
        Err(rejection) => {
            debug!(%rejection, "Rejected analyze request body");
            String::new()
        }
    };

    let topic = match validate_topic(&raw) {
        Ok(topic) => topic,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(AnalysisOutcome::rejected(e.to_string())),
            )
        }
    };

    info!(%topic, "Starting analysis");

    let result = state.analyzer.analyze(topic).await;
    let status = match &result {
        Ok(report) => {
            info!(category = %report.category, bytes = report.html.len(), "Analysis completed successfully");
            StatusCode::OK
        }
        Err(e @ AnalyzerError::Validation(_)) => {
            debug!(error = %e, "Analysis rejected");
            StatusCode::BAD_REQUEST
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(AnalysisOutcome::from(result)))
}
