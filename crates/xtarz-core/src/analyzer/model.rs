//! Analysis boundary models.

use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;
use crate::render::RenderedReport;

pub const SUCCESS_MESSAGE: &str = "Deep analysis completed successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred during content analysis.";
pub const TOPIC_REQUIRED: &str = "Topic is required";

/// Structured result handed back to callers of the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisOutcome {
    /// A finished report.
    pub fn completed(html: String) -> Self {
        Self {
            success: true,
            result: Some(html),
            error: None,
            message: Some(SUCCESS_MESSAGE.to_string()),
        }
    }

    /// Failure while classifying or rendering.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            message: Some(FAILURE_MESSAGE.to_string()),
        }
    }

    /// The request itself was invalid.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

impl From<Result<RenderedReport, AnalyzerError>> for AnalysisOutcome {
    fn from(result: Result<RenderedReport, AnalyzerError>) -> Self {
        match result {
            Ok(report) => Self::completed(report.html),
            Err(AnalyzerError::Validation(msg)) => Self::rejected(msg),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}
