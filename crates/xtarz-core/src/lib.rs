//! Xtarz Core Library
//!
//! Topic classification, static content bundles and HTML report rendering
//! for the XtarzLab Content Analyzer.

pub mod analyzer;
pub mod bundle;
pub mod category;
pub mod config;
pub mod error;
pub mod render;

pub use analyzer::{AnalysisOutcome, ContentAnalyzer};
pub use category::{classify, Category};
pub use config::{AnalyzerConfig, ServerConfig};
pub use error::{AnalyzerError, AnalyzerResult};
pub use render::{render_report, RenderedReport, ReportFooter};
