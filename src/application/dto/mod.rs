/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the parsing domain isolated.
mod output_format;
mod parse_request;
mod parse_response;
mod report_metadata;

pub use output_format::OutputFormat;
pub use parse_request::{ParseRequest, ParseRequestBuilder};
pub use parse_response::{ParseResponse, ParsedSource};
pub use report_metadata::{ReportMetadata, TOOL_NAME};
