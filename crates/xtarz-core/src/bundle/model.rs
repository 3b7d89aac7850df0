//! Content bundle models.
//!
//! Bundles are static text with a `{topic}` placeholder; substitution happens
//! at render time.

/// Placeholder token replaced with the caller's topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

/// A (title, description) pair used for trends and action plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitledItem {
    pub title: &'static str,
    pub description: &'static str,
}

/// A technology card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub description: &'static str,
}

/// A predicted development for a timeframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub timeframe: &'static str,
    pub prediction: &'static str,
}

/// The fixed set of report fields served for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisBundle {
    pub executive_summary: &'static str,
    pub insights: &'static [&'static str],
    pub market_analysis: &'static str,
    pub trends: &'static [TitledItem],
    pub technology_analysis: &'static str,
    pub technologies: &'static [Technology],
    pub opportunities: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub immediate_actions: &'static [TitledItem],
    pub medium_term_actions: &'static [TitledItem],
    pub long_term_actions: &'static [TitledItem],
    pub impact_assessment: &'static str,
    pub success_metrics: &'static [&'static str],
    pub future_outlook: &'static str,
    pub predictions: &'static [Prediction],
    pub resources: &'static [&'static str],
}
