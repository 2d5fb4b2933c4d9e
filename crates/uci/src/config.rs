//! Parser configuration.

use crate::UciError;
use serde::Deserialize;

/// Knobs that change how lines are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// When an integer argument is malformed (`depth x`), drop the bad token
    /// instead of re-reading it as the next keyword.
    pub consume_invalid_integers: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            consume_invalid_integers: true,
        }
    }
}

impl ParseOptions {
    /// Loads options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, UciError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_consume_invalid_integers() {
        assert!(ParseOptions::default().consume_invalid_integers);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        assert_eq!(ParseOptions::from_toml_str("").unwrap(), ParseOptions::default());
    }

    #[test]
    fn toml_overrides() {
        let opts = ParseOptions::from_toml_str("consume_invalid_integers = false").unwrap();
        assert!(!opts.consume_invalid_integers);
    }

    #[test]
    fn toml_type_mismatch_is_error() {
        let err = ParseOptions::from_toml_str("consume_invalid_integers = 3").unwrap_err();
        assert!(matches!(err, UciError::Config(_)));
    }
}
