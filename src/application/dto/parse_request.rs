use crate::ports::outbound::ReportSource;
use crate::report_parsing::services::FilterCriteria;
use crate::shared::error::ReportError;
use crate::shared::Result;

/// ParseRequest - Internal request DTO for the report parsing use case
#[derive(Debug, Clone)]
pub struct ParseRequest {
    /// Reports to parse, in output order
    pub sources: Vec<ReportSource>,
    /// Selections applied to every parsed document
    pub criteria: FilterCriteria,
}

impl ParseRequest {
    pub fn new(sources: Vec<ReportSource>, criteria: FilterCriteria) -> Self {
        Self { sources, criteria }
    }

    pub fn builder() -> ParseRequestBuilder {
        ParseRequestBuilder::default()
    }
}

/// Builder for [`ParseRequest`]
#[derive(Debug, Default)]
pub struct ParseRequestBuilder {
    sources: Vec<ReportSource>,
    criteria: Option<FilterCriteria>,
}

impl ParseRequestBuilder {
    pub fn source(mut self, source: ReportSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(mut self, sources: impl IntoIterator<Item = ReportSource>) -> Self {
        self.sources.extend(sources);
        self
    }

    pub fn criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }

    /// # Errors
    /// Returns a validation error when no source was given or stdin is
    /// requested more than once
    pub fn build(self) -> Result<ParseRequest> {
        if self.sources.is_empty() {
            return Err(ReportError::Validation {
                message: "At least one report source is required".to_string(),
            }
            .into());
        }

        let stdin_count = self
            .sources
            .iter()
            .filter(|s| matches!(s, ReportSource::Stdin))
            .count();
        if stdin_count > 1 {
            return Err(ReportError::Validation {
                message: "Standard input can only be read once per run".to_string(),
            }
            .into());
        }

        Ok(ParseRequest::new(
            self.sources,
            self.criteria.unwrap_or_default(),
        ))
    }
}
