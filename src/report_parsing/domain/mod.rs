pub mod coordinate;
pub mod dependency_node;
pub mod diagnostic;
pub mod report_document;
pub mod selection;

pub use coordinate::{Coordinate, NodeKind};
pub use dependency_node::{DependencyNode, NodeId};
pub use diagnostic::{Diagnostic, ParseIssue, Severity};
pub use report_document::{ConfigurationSection, ParsedReport, ProjectSection, ReportDocument};
pub use selection::{DependencyRule, Selection};
