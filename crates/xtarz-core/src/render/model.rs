//! Render output models.

use chrono::{DateTime, Local};
use rand::Rng;
use serde::Serialize;

use crate::category::Category;

/// Inclusive range of generated analysis identifiers.
pub const ANALYSIS_ID_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Cosmetic footer fields. Not deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFooter {
    pub analysis_id: u32,
    pub generated_at: DateTime<Local>,
}

impl ReportFooter {
    /// Draw a random identifier and stamp the current local time.
    pub fn generate() -> Self {
        Self {
            analysis_id: rand::rng().random_range(ANALYSIS_ID_RANGE),
            generated_at: Local::now(),
        }
    }

    /// e.g. "March 05, 2026 at 02:30 PM"
    pub fn generated_on(&self) -> String {
        self.generated_at.format("%B %d, %Y at %I:%M %p").to_string()
    }
}

/// A fully rendered HTML report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub category: Category,
    pub topic: String,
    pub html: String,
}
