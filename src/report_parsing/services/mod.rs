mod back_reference_resolver;
mod coordinate_parser;
mod line_classifier;
mod report_filter;
mod report_sectionizer;
mod selection_set_resolver;
mod tree_assembler;

pub use back_reference_resolver::BackReferenceResolver;
pub use coordinate_parser::{CoordinateParser, ParsedCoordinate};
pub use line_classifier::{ClassifiedLine, LineClassifier};
pub use report_filter::{FilterCriteria, ReportFilter};
pub use report_sectionizer::{
    parse_configuration_header, parse_project_header, parse_report, ReportSectionizer,
    ROOT_PROJECT_PATH,
};
pub use selection_set_resolver::SelectionSetResolver;
pub use tree_assembler::{AssembledForest, TreeAssembler};
