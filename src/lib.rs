//! deptree-report - dependency report parser
//!
//! This library turns the indented dependency-tree text printed by Gradle-style
//! build tools into structured, per-configuration dependency forests, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report_parsing`): Report model and pure parsing services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use deptree_report::prelude::*;
//!
//! let report = "\
//! compile - Compile classpath.
//! +--- project :core
//! |    \\--- com.google.guava:guava:18.0 -> 19.0
//! \\--- project :core (*)
//! ";
//!
//! let parsed = parse_report(report);
//! assert!(parsed.diagnostics.is_empty());
//!
//! let compile = parsed.document.projects()[0].configuration("compile").unwrap();
//! let roots: Vec<_> = compile.roots().collect();
//! assert_eq!(roots.len(), 2);
//! assert!(roots[1].is_back_reference());
//! assert_eq!(compile.canonical(roots[1]).children().len(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report_parsing;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        OutputFormat, ParseRequest, ParseResponse, ParsedSource, ReportMetadata,
    };
    pub use crate::application::read_models::{ReportReadModel, ReportReadModelBuilder};
    pub use crate::application::use_cases::ParseReportsUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, ReportReader, ReportSource,
    };
    pub use crate::report_parsing::domain::{
        ConfigurationSection, Coordinate, DependencyNode, DependencyRule, Diagnostic, NodeId,
        NodeKind, ParseIssue, ParsedReport, ProjectSection, ReportDocument, Selection, Severity,
    };
    pub use crate::report_parsing::services::{parse_report, FilterCriteria, ReportFilter};
    pub use crate::shared::Result;
}
