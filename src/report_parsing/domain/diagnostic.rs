use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Severity of a parse diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Problems found while parsing a report.
///
/// `MalformedLine` and `MalformedCoordinate` abort the configuration they
/// occur in; the other kinds never abort anything.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    #[error("Malformed line {line_number}: {reason}\n  > {raw_line}")]
    MalformedLine {
        line_number: usize,
        raw_line: String,
        reason: String,
    },

    #[error("Malformed coordinate on line {line_number}: {reason}\n  > {raw_line}")]
    MalformedCoordinate {
        line_number: usize,
        raw_line: String,
        reason: String,
    },

    #[error("Unresolved back-reference on line {line_number}: {coordinate} was not listed earlier in this configuration")]
    UnresolvedBackReference {
        line_number: usize,
        coordinate: String,
    },

    #[error("Line {line_number} nests dependencies under back-reference {coordinate}")]
    BackReferenceChildren {
        line_number: usize,
        coordinate: String,
    },

    #[error("Configuration '{configuration}' on line {line_number} was already listed for this project; the repeated section is skipped")]
    DuplicateConfiguration {
        line_number: usize,
        configuration: String,
    },
}

impl ParseIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ParseIssue::MalformedLine { .. } | ParseIssue::MalformedCoordinate { .. } => {
                Severity::Error
            }
            ParseIssue::UnresolvedBackReference { .. }
            | ParseIssue::BackReferenceChildren { .. }
            | ParseIssue::DuplicateConfiguration { .. } => Severity::Warning,
        }
    }

    pub fn line_number(&self) -> usize {
        match self {
            ParseIssue::MalformedLine { line_number, .. }
            | ParseIssue::MalformedCoordinate { line_number, .. }
            | ParseIssue::UnresolvedBackReference { line_number, .. }
            | ParseIssue::BackReferenceChildren { line_number, .. }
            | ParseIssue::DuplicateConfiguration { line_number, .. } => *line_number,
        }
    }

    pub(crate) fn malformed_line(
        line_number: usize,
        raw_line: &str,
        reason: impl Into<String>,
    ) -> Self {
        ParseIssue::MalformedLine {
            line_number,
            raw_line: raw_line.to_string(),
            reason: reason.into(),
        }
    }
}

/// A parse issue together with the section it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub project: Option<String>,
    pub configuration: Option<String>,
    pub issue: ParseIssue,
}

impl Diagnostic {
    pub fn new(project: Option<String>, configuration: Option<String>, issue: ParseIssue) -> Self {
        Self {
            project,
            configuration,
            issue,
        }
    }

    pub fn severity(&self) -> Severity {
        self.issue.severity()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] project {} / configuration {}: {}",
            self.severity(),
            self.project.as_deref().unwrap_or("-"),
            self.configuration.as_deref().unwrap_or("-"),
            self.issue
        )
    }
}
