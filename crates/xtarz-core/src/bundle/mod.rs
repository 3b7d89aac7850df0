//! Static per-category content bundles.

mod business;
mod education;
mod general;
mod healthcare;
pub mod model;
mod technology;

use crate::category::Category;

pub use model::{AnalysisBundle, Prediction, Technology, TitledItem, TOPIC_PLACEHOLDER};

/// Get the content bundle for a category.
pub fn bundle_for(category: Category) -> &'static AnalysisBundle {
    match category {
        Category::Technology => &technology::TECHNOLOGY,
        Category::Business => &business::BUSINESS,
        Category::Healthcare => &healthcare::HEALTHCARE,
        Category::Education => &education::EDUCATION,
        Category::General => &general::GENERAL,
    }
}

/// Substitute the topic into every placeholder of a template string.
pub fn fill(template: &str, topic: &str) -> String {
    template.replace(TOPIC_PLACEHOLDER, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_placeholder() {
        assert_eq!(
            fill("{topic} and {topic} again", "Quantum"),
            "Quantum and Quantum again"
        );
        assert_eq!(fill("no placeholder", "Quantum"), "no placeholder");
    }

    #[test]
    fn test_fill_does_not_expand_topic_braces() {
        // a topic that itself looks like a placeholder is inserted once
        assert_eq!(fill("About {topic}.", "{topic}"), "About {topic}.");
    }

    #[test]
    fn test_every_bundle_is_populated() {
        for category in Category::ALL {
            let bundle = bundle_for(category);
            assert!(bundle.executive_summary.contains(TOPIC_PLACEHOLDER));
            assert_eq!(bundle.insights.len(), 5);
            assert_eq!(bundle.trends.len(), 4);
            assert_eq!(bundle.technologies.len(), 4);
            assert_eq!(bundle.opportunities.len(), 5);
            assert_eq!(bundle.challenges.len(), 5);
            assert_eq!(bundle.immediate_actions.len(), 4);
            assert_eq!(bundle.medium_term_actions.len(), 4);
            assert_eq!(bundle.long_term_actions.len(), 4);
            assert_eq!(bundle.success_metrics.len(), 5);
            assert_eq!(bundle.predictions.len(), 3);
            assert_eq!(bundle.resources.len(), 5);
        }
    }

    #[test]
    fn test_bundles_are_distinct() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(
                    bundle_for(*a).executive_summary,
                    bundle_for(*b).executive_summary
                );
            }
        }
    }
}
