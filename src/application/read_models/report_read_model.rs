//! Report read model for output formatting
//!
//! Denormalized, serializable views of parsed documents. Back-references are
//! rendered as leaves flagged `already_expanded`; their subtree appears once,
//! under the canonical node.

use crate::report_parsing::domain::{Coordinate, Severity};
use serde::Serialize;

/// Main read model covering every report of one run
#[derive(Debug, Clone, Serialize)]
pub struct ReportReadModel {
    pub metadata: MetadataView,
    pub summary: SummaryView,
    pub sources: Vec<SourceView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
}

/// Totals over all sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub sources: usize,
    pub projects: usize,
    pub configurations: usize,
    pub dependencies: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceView {
    pub source: String,
    pub projects: Vec<ProjectView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DiagnosticView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub configurations: Vec<ConfigurationView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The section declared `No dependencies`
    pub empty: bool,
    /// Parsing stopped early; `dependencies` holds what was read before
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub aborted: bool,
    /// Distinct dependencies, back-references not counted
    pub dependency_count: usize,
    pub dependencies: Vec<DependencyView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyView {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_version: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub already_expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticView {
    pub severity: Severity,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
    pub message: String,
}
