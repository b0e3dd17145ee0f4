//! Field extraction configuration

use serde::Deserialize;

/// Extraction configuration
///
/// Only the mock extractor ships today; the flag exists so deployments can
/// opt into a vision-backed implementation once one lands without a config
/// format change.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Use the mock extractor (the only supported mode for now)
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_mock: default_use_mock(),
        }
    }
}

fn default_use_mock() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mock() {
        assert!(ExtractionConfig::default().use_mock);
    }
}
