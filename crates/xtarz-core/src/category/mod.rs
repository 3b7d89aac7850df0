//! Topic classification.
//!
//! A topic is lowercased and tested against each category's keyword list in
//! priority order (technology, business, healthcare, education). The first
//! list with a keyword contained in the topic wins; otherwise the topic is
//! `General`.

pub mod model;

pub use model::Category;

/// Classify a free-text topic into a category.
pub fn classify(topic: &str) -> Category {
    matched_keyword(topic)
        .map(|(category, _)| category)
        .unwrap_or(Category::General)
}

/// Find the category and the keyword that decided it.
///
/// Returns `None` when the topic falls through to `General`.
pub fn matched_keyword(topic: &str) -> Option<(Category, &'static str)> {
    let topic_lower = topic.to_lowercase();

    Category::ALL.into_iter().find_map(|category| {
        category
            .keywords()
            .iter()
            .find(|keyword| topic_lower.contains(*keyword))
            .map(|keyword| (category, *keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technology_keywords_any_case() {
        assert_eq!(classify("AI"), Category::Technology);
        assert_eq!(classify("ai ethics"), Category::Technology);
        assert_eq!(classify("Blockchain"), Category::Technology);
        assert_eq!(classify("BLOCKCHAIN ledgers"), Category::Technology);
        assert_eq!(classify("Smart IoT devices"), Category::Technology);
    }

    #[test]
    fn test_technology_beats_business() {
        assert_eq!(classify("blockchain strategy"), Category::Technology);
        assert_eq!(classify("Marketing automation"), Category::Technology);
    }

    #[test]
    fn test_priority_order_below_technology() {
        assert_eq!(classify("Startup funding"), Category::Business);
        assert_eq!(classify("Wellness business"), Category::Business);
        assert_eq!(classify("Mental health"), Category::Healthcare);
        assert_eq!(classify("School fitness programs"), Category::Healthcare);
        assert_eq!(classify("Online school curriculum"), Category::Education);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "ai" is matched as a plain substring
        assert_eq!(classify("Teacher training"), Category::Technology);
        assert_eq!(
            matched_keyword("Teacher training"),
            Some((Category::Technology, "ai"))
        );
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("Ocean conservation"), Category::General);
        assert_eq!(classify("Jazz history"), Category::General);
        assert_eq!(classify(""), Category::General);
        assert_eq!(matched_keyword("Coffee roasting"), None);
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Business ".parse::<Category>().unwrap(), Category::Business);
        assert!("finance".parse::<Category>().is_err());
        assert!(Category::General.keywords().is_empty());
    }
}
