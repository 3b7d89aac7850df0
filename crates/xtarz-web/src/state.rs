//! Application state.

use xtarz_core::{AnalyzerConfig, ContentAnalyzer};

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub analyzer: ContentAnalyzer,
}

impl AppState {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: ContentAnalyzer::new(config),
        }
    }
}
