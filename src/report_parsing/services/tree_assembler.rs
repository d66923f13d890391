use super::{BackReferenceResolver, ClassifiedLine, CoordinateParser, LineClassifier};
use crate::report_parsing::domain::{DependencyNode, NodeId, ParseIssue};

/// Node arena and roots of one configuration, plus non-fatal findings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledForest {
    pub nodes: Vec<DependencyNode>,
    pub roots: Vec<NodeId>,
    pub warnings: Vec<ParseIssue>,
}

/// TreeAssembler service rebuilding parent/child structure from levels
///
/// Keeps a stack of open nodes; the implicit forest root sits at level -1.
/// A line at level `L` attaches to the nearest open node at level `L - 1`.
/// Lines must arrive in report order.
#[derive(Debug, Default)]
pub struct TreeAssembler {
    nodes: Vec<DependencyNode>,
    roots: Vec<NodeId>,
    stack: Vec<NodeId>,
    resolver: BackReferenceResolver,
    warnings: Vec<ParseIssue>,
}

impl TreeAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a complete forest from connector lines
    ///
    /// # Errors
    /// Returns the first `MalformedLine` or `MalformedCoordinate` issue; any
    /// line that is not a connector line is malformed here.
    pub fn assemble<'a, I>(lines: I) -> Result<AssembledForest, ParseIssue>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut assembler = Self::new();
        for (index, raw_line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            match LineClassifier::classify(raw_line) {
                ClassifiedLine::Connector { level, payload } => {
                    assembler.push(line_number, raw_line, level, payload)?;
                }
                _ => {
                    return Err(ParseIssue::malformed_line(
                        line_number,
                        raw_line,
                        "expected a dependency line",
                    ))
                }
            }
        }
        Ok(assembler.finish())
    }

    /// Adds one connector line to the forest
    ///
    /// # Errors
    /// - `MalformedCoordinate` when the payload is not a coordinate
    /// - `MalformedLine` when no open ancestor exists at `level - 1`
    pub fn push(
        &mut self,
        line_number: usize,
        raw_line: &str,
        level: usize,
        payload: &str,
    ) -> Result<NodeId, ParseIssue> {
        let parsed =
            CoordinateParser::parse(payload).map_err(|e| ParseIssue::MalformedCoordinate {
                line_number,
                raw_line: raw_line.to_string(),
                reason: e.to_string(),
            })?;

        while let Some(&top) = self.stack.last() {
            if self.nodes[top.index()].level() < level {
                break;
            }
            self.stack.pop();
        }

        let parent = self.stack.last().copied();
        let parent_level = parent.map(|id| self.nodes[id.index()].level());
        if parent_level != level.checked_sub(1) {
            let reason = match parent_level {
                Some(open) => format!(
                    "level {} skips past the open dependency at level {}",
                    level, open
                ),
                None => format!("level {} has no parent dependency at level {}", level, level - 1),
            };
            return Err(ParseIssue::malformed_line(line_number, raw_line, reason));
        }

        let id = NodeId::new(self.nodes.len());
        let mut node = DependencyNode::new(
            level,
            parsed.identity,
            parsed.requested_version,
            parsed.resolved_version,
        );

        if parsed.already_expanded {
            match self.resolver.resolve(node.identity()) {
                Some(canonical) => node.set_back_reference(Some(canonical)),
                None => {
                    // Downgraded: the first listing may lie outside this configuration
                    self.warnings.push(ParseIssue::UnresolvedBackReference {
                        line_number,
                        coordinate: node.identity().to_string(),
                    });
                    self.resolver.record(node.identity(), id);
                }
            }
        } else {
            self.resolver.record(node.identity(), id);
        }

        match parent {
            Some(parent_id) => {
                let parent_node = &mut self.nodes[parent_id.index()];
                if parent_node.is_back_reference() {
                    self.warnings.push(ParseIssue::BackReferenceChildren {
                        line_number,
                        coordinate: parent_node.identity().to_string(),
                    });
                }
                parent_node.push_child(id);
            }
            None => self.roots.push(id),
        }

        self.nodes.push(node);
        // Back-references stay on the stack so stray nested lines attach to them
        self.stack.push(id);
        Ok(id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self) -> AssembledForest {
        AssembledForest {
            nodes: self.nodes,
            roots: self.roots,
            warnings: self.warnings,
        }
    }
}
