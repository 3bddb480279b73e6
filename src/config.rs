//! Rendering configuration.

use serde::{Deserialize, Serialize};

/// Controls how a finished document is turned into JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit indented, multi-line JSON instead of a single line.
    pub pretty: bool,

    /// Number of spaces per indentation level when `pretty` is set.
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Compact single-line output.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Indented output with the default indentation width.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact() {
        let options = RenderOptions::default();
        assert!(!options.pretty);
        assert_eq!(options.indent, 2);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let options: RenderOptions = serde_json::from_str(r#"{"pretty": true}"#).unwrap();
        assert_eq!(options, RenderOptions::pretty());

        let options: RenderOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
        assert!(!options.pretty);
        assert_eq!(options.indent, 4);
    }
}
