//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of parsed reports for formatters.

mod report_read_model;
mod report_read_model_builder;

pub use report_read_model::{
    ConfigurationView, DependencyView, DiagnosticView, MetadataView, ProjectView,
    ReportReadModel, SourceView, SummaryView,
};
pub use report_read_model_builder::ReportReadModelBuilder;
