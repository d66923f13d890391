//! Report parsing domain layer.
//!
//! Pure logic with no I/O: turns raw dependency report text into an
//! immutable [`domain::ReportDocument`] plus diagnostics, and filters
//! documents by resolved selection sets.
pub mod domain;
pub mod services;
