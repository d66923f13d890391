use crate::application::dto::{ParseRequest, ParseResponse, ParsedSource, ReportMetadata};
use crate::ports::outbound::{ProgressReporter, ReportReader, ReportSource};
use crate::report_parsing::domain::{Diagnostic, ParsedReport, Severity};
use crate::report_parsing::services::{parse_report, FilterCriteria, ReportFilter};
use crate::shared::Result;
use futures::future::join_all;

/// ParseReportsUseCase - Core use case turning report texts into filtered documents
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ParseReportsUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
}

impl<RR, PR> ParseReportsUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Reports are read in order, parsed concurrently on the blocking pool,
    /// then filtered. The response lists them in request order.
    ///
    /// # Errors
    /// Returns an error if a report cannot be read or a parse task fails.
    /// Problems inside a report are diagnostics, not errors.
    pub async fn execute(&self, request: ParseRequest) -> Result<ParseResponse> {
        // Step 1: Read every report up front
        let texts = self.read_reports(&request.sources)?;

        // Step 2: Parse concurrently
        let parsed = Self::parse_concurrently(texts).await?;

        // Step 3: Filter and surface diagnostics
        let reports: Vec<ParsedSource> = request
            .sources
            .into_iter()
            .zip(parsed)
            .map(|(source, parsed)| {
                let parsed = Self::apply_filter(parsed, &request.criteria);
                self.report_diagnostics(&source, &parsed);
                ParsedSource { source, parsed }
            })
            .collect();

        let errors: usize = reports
            .iter()
            .map(|r| r.parsed.count_by_severity(Severity::Error))
            .sum();
        self.progress_reporter.report_completion(&format!(
            "✅ Parsed {} report(s), {} error diagnostic(s)",
            reports.len(),
            errors
        ));

        Ok(ParseResponse::new(
            reports,
            ReportMetadata::generate_default(),
        ))
    }

    fn read_reports(&self, sources: &[ReportSource]) -> Result<Vec<String>> {
        let total = sources.len();
        self.progress_reporter
            .report(&format!("📖 Reading {} dependency report(s)...", total));

        sources
            .iter()
            .enumerate()
            .map(|(idx, source)| {
                self.progress_reporter
                    .report_progress(idx + 1, total, Some(&source.to_string()));
                let text = self.report_reader.read_report(source)?;
                tracing::debug!(source = %source, bytes = text.len(), "report read");
                Ok(text)
            })
            .collect()
    }

    /// Each report is parsed on its own blocking task; no state is shared
    async fn parse_concurrently(texts: Vec<String>) -> Result<Vec<ParsedReport>> {
        let handles = texts
            .into_iter()
            .map(|text| tokio::task::spawn_blocking(move || parse_report(&text)));

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.map_err(|e| anyhow::anyhow!("Report parsing task failed: {}", e))
            })
            .collect()
    }

    /// Filters the document and drops diagnostics of deselected sections
    fn apply_filter(parsed: ParsedReport, criteria: &FilterCriteria) -> ParsedReport {
        if *criteria == FilterCriteria::default() {
            return parsed;
        }

        let filter = ReportFilter::new(criteria, &parsed.document);
        let document = filter.apply(&parsed.document);
        let diagnostics = parsed
            .diagnostics
            .into_iter()
            .filter(|d| Self::in_scope(&filter, d))
            .collect();

        ParsedReport {
            document,
            diagnostics,
        }
    }

    fn in_scope(filter: &ReportFilter, diagnostic: &Diagnostic) -> bool {
        let project_kept = diagnostic
            .project
            .as_deref()
            .is_none_or(|p| filter.retains_project(p));
        let configuration_kept = diagnostic
            .configuration
            .as_deref()
            .is_none_or(|c| filter.retains_configuration(c));
        project_kept && configuration_kept
    }

    fn report_diagnostics(&self, source: &ReportSource, parsed: &ParsedReport) {
        for diagnostic in &parsed.diagnostics {
            match diagnostic.severity() {
                Severity::Error => tracing::error!(source = %source, "{}", diagnostic),
                Severity::Warning => tracing::warn!(source = %source, "{}", diagnostic),
            }
        }

        let errors = parsed.count_by_severity(Severity::Error);
        let warnings = parsed.count_by_severity(Severity::Warning);
        if errors + warnings > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {}: {} error(s), {} warning(s) while parsing",
                source, errors, warnings
            ));
        }
    }
}
