use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    /// Maps the optional `--output` path to a presenter type;
    /// `None` writes to stdout
    pub fn from_output(output: Option<PathBuf>) -> PresenterType {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }

    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
