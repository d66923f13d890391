use super::ReportMetadata;
use crate::ports::outbound::ReportSource;
use crate::report_parsing::domain::{ParsedReport, Severity};

/// One input report after parsing and filtering
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub source: ReportSource,
    pub parsed: ParsedReport,
}

/// ParseResponse - Response DTO from the report parsing use case
///
/// Reports keep the order of the request's sources.
#[derive(Debug, Clone)]
pub struct ParseResponse {
    pub reports: Vec<ParsedSource>,
    pub metadata: ReportMetadata,
}

impl ParseResponse {
    pub fn new(reports: Vec<ParsedSource>, metadata: ReportMetadata) -> Self {
        Self { reports, metadata }
    }

    /// True when any report produced an error diagnostic
    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(|r| r.parsed.has_errors())
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.reports
            .iter()
            .map(|r| r.parsed.count_by_severity(severity))
            .sum()
    }
}
