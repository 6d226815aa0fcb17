//! Parser configuration with validation.

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Relay address parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayParserConfig {
    /// Scheme prepended to addresses without one (default: `http`)
    pub default_scheme: String,
    /// Accept `0x`-prefixed public keys (default: true)
    pub accept_hex_prefix: bool,
}

impl Default for GatewayParserConfig {
    fn default() -> Self {
        Self {
            default_scheme: "http".to_string(),
            accept_hex_prefix: true,
        }
    }
}

/// Configuration file structure.
///
/// ```toml
/// [parser]
/// default_scheme = "https"
/// accept_hex_prefix = true
/// ```
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    parser: GatewayParserConfig,
}

impl GatewayParserConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.default_scheme.as_str() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Missing tables and keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        file.parser.validate()?;
        Ok(file.parser)
    }
}
