use super::NodeKind;
use std::fmt;
use std::str::FromStr;

const ALL_SENTINEL: &str = "ALL";
const NONE_SENTINEL: &str = "NONE";

/// A user-supplied selection value: a concrete value or a sentinel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    None,
    Value(T),
}

impl<T> Selection<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Selection::Value(v) => Some(v),
            Selection::All | Selection::None => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Selection::All => Selection::All,
            Selection::None => Selection::None,
            Selection::Value(v) => Selection::Value(f(v)),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    /// `ALL` and `NONE` (case-insensitive) are sentinels; anything else is parsed as `T`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(Selection::All)
        } else if trimmed.eq_ignore_ascii_case(NONE_SENTINEL) {
            Ok(Selection::None)
        } else {
            trimmed.parse().map(Selection::Value)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL_SENTINEL),
            Selection::None => write!(f, "{}", NONE_SENTINEL),
            Selection::Value(v) => write!(f, "{}", v),
        }
    }
}

/// Dependency rule categories: which node kinds are kept in filtered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyRule {
    Project,
    Module,
}

impl DependencyRule {
    /// Complete, statically known domain of dependency rules
    pub const ALL: &'static [DependencyRule] = &[DependencyRule::Project, DependencyRule::Module];

    pub fn matches(self, kind: NodeKind) -> bool {
        matches!(
            (self, kind),
            (DependencyRule::Project, NodeKind::Project) | (DependencyRule::Module, NodeKind::Module)
        )
    }
}

impl FromStr for DependencyRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" | "projects" => Ok(DependencyRule::Project),
            "module" | "modules" => Ok(DependencyRule::Module),
            _ => Err(format!(
                "Invalid dependency rule: {}. Please specify 'project', 'module', 'ALL' or 'NONE'",
                s
            )),
        }
    }
}

impl fmt::Display for DependencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyRule::Project => write!(f, "project"),
            DependencyRule::Module => write!(f, "module"),
        }
    }
}
