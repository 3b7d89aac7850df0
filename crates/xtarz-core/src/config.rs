//! Runtime configuration passed explicitly into the analyzer and server.

use std::time::Duration;

use crate::error::{AnalyzerError, AnalyzerResult};

/// Simulated processing latency applied before each analysis.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Analyzer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub processing_delay: Duration,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }
}

impl AnalyzerConfig {
    /// Config without the artificial delay (offline rendering, tests).
    pub fn immediate() -> Self {
        Self {
            processing_delay: Duration::ZERO,
        }
    }

    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            processing_delay: Duration::from_millis(delay_ms),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> AnalyzerResult<String> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(AnalyzerError::Config("host must not be empty".to_string()));
        }
        Ok(format!("{}:{}", host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dev_server() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr().unwrap(), "0.0.0.0:5000");
        assert_eq!(config.analyzer.processing_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_empty_host_rejected() {
        let config = ServerConfig {
            host: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.bind_addr(), Err(AnalyzerError::Config(_))));
    }

    #[test]
    fn test_delay_from_millis() {
        assert_eq!(
            AnalyzerConfig::with_delay_ms(250).processing_delay,
            Duration::from_millis(250)
        );
        assert_eq!(AnalyzerConfig::immediate().processing_delay, Duration::ZERO);
    }
}
