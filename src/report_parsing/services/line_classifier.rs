/// Connector token introducing the last child of a parent
pub const LAST_CHILD_TOKEN: &str = "\\--- ";

/// Connector token introducing a child that has later siblings
pub const MIDDLE_CHILD_TOKEN: &str = "+--- ";

/// Width of one ancestry column in the line prefix
pub const COLUMN_WIDTH: usize = 5;

/// Sentinel printed for configurations without dependencies
pub const NO_DEPENDENCIES_SENTINEL: &str = "No dependencies";

/// Result of classifying one raw report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedLine<'a> {
    /// Dependency line: nesting level and the text after the connector
    Connector { level: usize, payload: &'a str },
    /// The "No dependencies" sentinel
    NoDependencies,
    /// A row of dashes framing a project header
    Banner,
    /// Footnote such as `(*) - dependencies omitted (listed previously)`
    Legend,
    Blank,
    /// Anything else; headers and free text are interpreted by the sectionizer
    Text(&'a str),
}

/// LineClassifier service determining the role of a report line
///
/// Classification never fails. The level of a connector line is the number
/// of complete five-character columns before the connector token, so
/// continuation (`|    `) and blank (`     `) columns count alike and
/// incidental extra padding is absorbed by the integer division.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(raw_line: &str) -> ClassifiedLine<'_> {
        let line = raw_line.trim_end();

        if let Some((prefix, payload)) = Self::split_connector(line) {
            return ClassifiedLine::Connector {
                level: Self::level_of(prefix),
                payload,
            };
        }

        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            ClassifiedLine::Blank
        } else if trimmed == NO_DEPENDENCIES_SENTINEL {
            ClassifiedLine::NoDependencies
        } else if trimmed.chars().all(|c| c == '-') {
            ClassifiedLine::Banner
        } else if Self::is_legend(trimmed) {
            ClassifiedLine::Legend
        } else {
            ClassifiedLine::Text(trimmed)
        }
    }

    /// Level encoded by a connector prefix
    pub fn level_of(prefix: &str) -> usize {
        prefix.chars().count() / COLUMN_WIDTH
    }

    /// Splits at the first occurrence of either connector token
    fn split_connector(line: &str) -> Option<(&str, &str)> {
        let last = line.find(LAST_CHILD_TOKEN);
        let middle = line.find(MIDDLE_CHILD_TOKEN);
        let position = match (last, middle) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => return None,
        };

        // Both tokens are ASCII, so slicing at the byte offset is safe
        Some((&line[..position], &line[position + COLUMN_WIDTH..]))
    }

    fn is_legend(trimmed: &str) -> bool {
        trimmed.starts_with('(')
            && trimmed
                .find(") - ")
                .is_some_and(|end| !trimmed[1..end].contains(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(line: &str) -> usize {
        match LineClassifier::classify(line) {
            ClassifiedLine::Connector { level, .. } => level,
            other => panic!("expected connector line, got {:?}", other),
        }
    }

    #[test]
    fn test_level_from_prefix_width() {
        assert_eq!(
            level("|    |         |    |    \\--- org.springframework:spring-core:4.3.5.RELEASE"),
            5
        );
        assert_eq!(level("|    |         \\--- com.squareup.okhttp3:okhttp:3.4.2 (*)"), 3);
        assert_eq!(level("     |    |         \\--- org.ow2.asm:asm:5.0.3"), 4);
        assert_eq!(level("     +--- org.hamcrest:hamcrest-core:1.3"), 1);
        assert_eq!(
            level("+--- org.springframework.boot:spring-boot-starter: -> 1.4.3.RELEASE"),
            0
        );
        assert_eq!(level("\\--- org.apache.commons:commons-compress:1.13"), 0);
    }

    #[test]
    fn test_extra_padding_is_absorbed() {
        assert_eq!(level("|       \\--- g:a:1"), 1);
    }

    #[test]
    fn test_payload_follows_connector() {
        let classified = LineClassifier::classify("|    +--- project :spring-beans (*)");
        assert_eq!(
            classified,
            ClassifiedLine::Connector {
                level: 1,
                payload: "project :spring-beans (*)"
            }
        );
    }

    #[test]
    fn test_first_connector_occurrence_wins() {
        let classified = LineClassifier::classify("\\--- odd:name+--- :1");
        assert_eq!(
            classified,
            ClassifiedLine::Connector {
                level: 0,
                payload: "odd:name+--- :1"
            }
        );
    }

    #[test]
    fn test_sentinel_banner_blank_legend() {
        assert_eq!(
            LineClassifier::classify("No dependencies"),
            ClassifiedLine::NoDependencies
        );
        assert_eq!(
            LineClassifier::classify("------------------------------------------------------------"),
            ClassifiedLine::Banner
        );
        assert_eq!(LineClassifier::classify("   \r"), ClassifiedLine::Blank);
        assert_eq!(
            LineClassifier::classify("(*) - dependencies omitted (listed previously)"),
            ClassifiedLine::Legend
        );
    }

    #[test]
    fn test_headers_pass_through_unclassified() {
        assert_eq!(
            LineClassifier::classify("dependency - Compile classpath for source set 'main'."),
            ClassifiedLine::Text("dependency - Compile classpath for source set 'main'.")
        );
        assert_eq!(
            LineClassifier::classify("Project :complex-test"),
            ClassifiedLine::Text("Project :complex-test")
        );
    }
}
