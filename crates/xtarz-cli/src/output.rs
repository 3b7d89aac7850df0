//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use std::path::Path;
use xtarz_core::{Category, RenderedReport};

/// Print a confirmation after a report was written to disk.
pub fn print_report_written(report: &RenderedReport, path: &Path) {
    println!(
        "{} {} {}",
        "✓".green().bold(),
        report.topic.bold(),
        format!("({})", category_colored(report.category)).dimmed()
    );
    println!("  {} {}", "Written to".dimmed(), path.display());
}

/// Print topics with their category and the keyword that decided it.
pub fn print_classification_table(rows: &[(&str, Category, Option<&str>)]) {
    println!("{:<40} {:<12} {:<24}", "Topic", "Category", "Keyword");
    println!("{}", "-".repeat(78));

    for (topic, category, keyword) in rows {
        println!(
            "{:<40} {:<12} {:<24}",
            truncate(topic, 38),
            category_colored(*category),
            keyword.map(|k| k.normal()).unwrap_or_else(|| "-".dimmed())
        );
    }
}

fn category_colored(category: Category) -> ColoredString {
    match category {
        Category::Technology => "technology".cyan(),
        Category::Business => "business".yellow(),
        Category::Healthcare => "healthcare".green(),
        Category::Education => "education".blue(),
        Category::General => "general".dimmed(),
    }
}

/// Truncate to a maximum number of characters, appending "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long topic name", 10), "a very ...");
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
