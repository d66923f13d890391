use serde::Serialize;
use std::fmt;

/// Kind of dependency a report line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Another project of the same build (`project :path`)
    Project,
    /// External module coordinate (`group:artifact:version`)
    Module,
}

/// Coordinate value object identifying a dependency
///
/// Equality is structural; it is the key used to resolve back-references
/// within one configuration. Module coordinates carry the resolved version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Coordinate {
    Project {
        path: String,
    },
    Module {
        group: String,
        artifact: String,
        version: String,
    },
}

impl Coordinate {
    pub fn project(path: impl Into<String>) -> Self {
        Coordinate::Project { path: path.into() }
    }

    pub fn module(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Coordinate::Module {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Coordinate::Project { .. } => NodeKind::Project,
            Coordinate::Module { .. } => NodeKind::Module,
        }
    }

    /// Returns the project path for project coordinates
    pub fn project_path(&self) -> Option<&str> {
        match self {
            Coordinate::Project { path } => Some(path),
            Coordinate::Module { .. } => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Project { path } => write!(f, "project {}", path),
            Coordinate::Module {
                group,
                artifact,
                version,
            } => write!(f, "{}:{}:{}", group, artifact, version),
        }
    }
}
