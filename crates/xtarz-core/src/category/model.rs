//! Category domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalyzerError;

/// Coarse topic category selecting which content bundle is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Healthcare,
    Education,
    General,
}

impl Category {
    /// All categories, in classification priority order.
    pub const ALL: [Category; 5] = [
        Self::Technology,
        Self::Business,
        Self::Healthcare,
        Self::Education,
        Self::General,
    ];

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Business => "business",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::General => "general",
        }
    }

    /// Lowercase keywords that select this category. `General` has none.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Technology => TECHNOLOGY_KEYWORDS,
            Self::Business => BUSINESS_KEYWORDS,
            Self::Healthcare => HEALTHCARE_KEYWORDS,
            Self::Education => EDUCATION_KEYWORDS,
            Self::General => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| AnalyzerError::UnknownCategory(s.to_string()))
    }
}

static TECHNOLOGY_KEYWORDS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "technology",
    "software",
    "digital",
    "automation",
    "blockchain",
    "iot",
];

static BUSINESS_KEYWORDS: &[&str] = &[
    "business",
    "marketing",
    "strategy",
    "management",
    "finance",
    "startup",
    "entrepreneurship",
    "sales",
];

static HEALTHCARE_KEYWORDS: &[&str] = &[
    "health",
    "medical",
    "healthcare",
    "medicine",
    "wellness",
    "fitness",
    "therapy",
];

static EDUCATION_KEYWORDS: &[&str] = &[
    "education",
    "learning",
    "training",
    "teaching",
    "academic",
    "university",
    "school",
];
