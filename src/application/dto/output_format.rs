use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Rendering of a parsed report set.
///
/// Accepted from `--format` and from the `format` key of the config file;
/// both spellings take `md` as shorthand for Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed read model
    #[default]
    Json,
    /// Nested lists per project and configuration
    #[serde(alias = "md")]
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            other => Err(format!(
                "unknown report format '{}' (expected 'json' or 'markdown')",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
        })
    }
}
