//! Output format selection.

use serde::{Deserialize, Serialize};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables and messages
    #[default]
    Text,
    /// Full server response as pretty-printed JSON
    Json,
    /// Full server response as YAML
    Yaml,
}

impl OutputFormat {
    /// Whether the raw response is printed instead of a rendered view.
    pub fn is_structured(self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert!(!OutputFormat::Text.is_structured());
        assert!(OutputFormat::Yaml.is_structured());
    }
}
