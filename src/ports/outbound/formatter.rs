use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering parsed reports
///
/// This port abstracts the output formats (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats the read model of all parsed reports
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
