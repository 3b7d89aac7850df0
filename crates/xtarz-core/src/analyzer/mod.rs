//! Analysis boundary: validate the topic, classify, render.
//!
//! Every failure below this point is turned into an [`AnalyzerError`], and
//! [`AnalysisOutcome`] is the structured form handed to callers.

pub mod model;

use crate::category;
use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::render::{self, RenderedReport, ReportFooter};

pub use model::{AnalysisOutcome, FAILURE_MESSAGE, SUCCESS_MESSAGE, TOPIC_REQUIRED};

/// Stateless analyzer. Cheap to clone; one instance serves all requests.
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer {
    config: AnalyzerConfig,
}

impl ContentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Classify and render synchronously, without the processing delay.
    pub fn report(&self, topic: &str) -> AnalyzerResult<RenderedReport> {
        let topic = validate_topic(topic)?;

        let category = match category::matched_keyword(topic) {
            Some((category, keyword)) => {
                tracing::debug!(%category, keyword, "Topic matched keyword");
                category
            }
            None => category::Category::General,
        };

        render::render_report(category, topic, &ReportFooter::generate())
    }

    /// Full analysis: validation, simulated processing delay, then rendering
    /// on the blocking pool.
    pub async fn analyze(&self, topic: &str) -> AnalyzerResult<RenderedReport> {
        let topic = validate_topic(topic)?.to_string();

        if !self.config.processing_delay.is_zero() {
            tokio::time::sleep(self.config.processing_delay).await;
        }

        let analyzer = self.clone();
        run_blocking(move || analyzer.report(&topic)).await
    }

    /// Like [`analyze`](Self::analyze), folded into an [`AnalysisOutcome`].
    pub async fn run(&self, topic: &str) -> AnalysisOutcome {
        self.analyze(topic).await.into()
    }
}

/// Trim the topic and reject blank input.
pub fn validate_topic(topic: &str) -> AnalyzerResult<&str> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::validation(TOPIC_REQUIRED));
    }
    Ok(trimmed)
}

/// Run a render step on the blocking pool, turning a panic into an error.
async fn run_blocking<T, F>(f: F) -> AnalyzerResult<T>
where
    F: FnOnce() -> AnalyzerResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) if e.is_panic() => {
            let payload = e.into_panic();
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "render task panicked".to_string());
            Err(AnalyzerError::internal(msg))
        }
        Err(e) => Err(AnalyzerError::internal(e.to_string())),
    }
}
