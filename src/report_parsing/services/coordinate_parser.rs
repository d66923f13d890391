use crate::report_parsing::domain::Coordinate;
use crate::shared::Result;

/// Keyword introducing a reference to another project of the build
pub const PROJECT_KEYWORD: &str = "project ";

/// Marker appended to dependencies whose subtree was listed earlier
pub const EXPANDED_MARKER: &str = "(*)";

/// Separator between requested and resolved version
pub const OVERRIDE_ARROW: &str = " -> ";

/// Dependency payload decoded from a connector line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCoordinate {
    pub identity: Coordinate,
    pub requested_version: Option<String>,
    pub resolved_version: Option<String>,
    pub already_expanded: bool,
}

/// CoordinateParser service decoding the payload of a connector line
pub struct CoordinateParser;

impl CoordinateParser {
    /// Parses a payload into a coordinate
    ///
    /// Accepted forms, each optionally suffixed with ` (*)`:
    /// - `project :path`
    /// - `group:artifact:version`
    /// - `group:artifact: -> resolved` (requested version elided)
    /// - `group:artifact:requested -> resolved`
    /// - `group:artifact -> resolved`
    ///
    /// # Errors
    /// Returns an error describing why the payload is not a coordinate
    pub fn parse(payload: &str) -> Result<ParsedCoordinate> {
        let payload = payload.trim();
        let (body, already_expanded) = match payload.strip_suffix(EXPANDED_MARKER) {
            Some(rest) => (rest.trim_end(), true),
            None => (payload, false),
        };

        if body.is_empty() {
            anyhow::bail!("Dependency line has no coordinate");
        }

        if let Some(path) = body.strip_prefix(PROJECT_KEYWORD) {
            let path = path.trim();
            if path.is_empty() || path.contains(char::is_whitespace) {
                anyhow::bail!("Invalid project reference '{}'", body);
            }
            return Ok(ParsedCoordinate {
                identity: Coordinate::project(path),
                requested_version: None,
                resolved_version: None,
                already_expanded,
            });
        }

        let mut parsed = Self::parse_module(body)?;
        parsed.already_expanded = already_expanded;
        Ok(parsed)
    }

    fn parse_module(body: &str) -> Result<ParsedCoordinate> {
        let (requested_part, resolved_override) = match body.split_once(OVERRIDE_ARROW) {
            Some((left, right)) => (left.trim_end(), Some(right.trim())),
            None => (body, None),
        };

        let parts: Vec<&str> = requested_part.split(':').collect();
        let (group, artifact, requested, resolved) = match (parts.as_slice(), resolved_override) {
            ([group, artifact, version], None) => {
                if version.is_empty() || version.contains(char::is_whitespace) {
                    anyhow::bail!("Invalid version in coordinate '{}'", body);
                }
                (*group, *artifact, Some(*version), *version)
            }
            ([group, artifact, version], Some(resolved)) => {
                let requested = Some(*version).filter(|v| !v.is_empty());
                (*group, *artifact, requested, resolved)
            }
            ([group, artifact], Some(resolved)) => (*group, *artifact, None, resolved),
            _ => anyhow::bail!(
                "Expected group:artifact:version, got '{}' ({} field(s))",
                body,
                parts.len()
            ),
        };

        for (field, value) in [("group", group), ("artifact", artifact), ("version", resolved)] {
            if value.is_empty() || value.contains(char::is_whitespace) {
                anyhow::bail!("Invalid {} '{}' in coordinate '{}'", field, value, body);
            }
        }

        Ok(ParsedCoordinate {
            identity: Coordinate::module(group, artifact, resolved),
            requested_version: requested.map(str::to_string),
            resolved_version: Some(resolved.to_string()),
            already_expanded: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_parsing::domain::NodeKind;

    #[test]
    fn test_parse_project_reference() {
        let parsed = CoordinateParser::parse("project :child-project").unwrap();
        assert_eq!(parsed.identity, Coordinate::project(":child-project"));
        assert_eq!(parsed.identity.kind(), NodeKind::Project);
        assert!(parsed.resolved_version.is_none());
        assert!(!parsed.already_expanded);
    }

    #[test]
    fn test_parse_simple_module() {
        let parsed = CoordinateParser::parse("solo:component:4.12").unwrap();
        assert_eq!(parsed.identity, Coordinate::module("solo", "component", "4.12"));
        assert_eq!(parsed.requested_version.as_deref(), Some("4.12"));
        assert_eq!(parsed.resolved_version.as_deref(), Some("4.12"));
    }

    #[test]
    fn test_parse_elided_version_override() {
        let parsed =
            CoordinateParser::parse("org.springframework.boot:spring-boot-starter: -> 1.4.3.RELEASE")
                .unwrap();
        assert_eq!(
            parsed.identity,
            Coordinate::module(
                "org.springframework.boot",
                "spring-boot-starter",
                "1.4.3.RELEASE"
            )
        );
        assert!(parsed.requested_version.is_none());
        assert_eq!(parsed.resolved_version.as_deref(), Some("1.4.3.RELEASE"));
    }

    #[test]
    fn test_parse_requested_version_override() {
        let parsed = CoordinateParser::parse("com.google.guava:guava:19.0 -> 28.2-jre").unwrap();
        assert_eq!(parsed.requested_version.as_deref(), Some("19.0"));
        assert_eq!(parsed.resolved_version.as_deref(), Some("28.2-jre"));
        assert_eq!(
            parsed.identity,
            Coordinate::module("com.google.guava", "guava", "28.2-jre")
        );
    }

    #[test]
    fn test_parse_versionless_override() {
        let parsed = CoordinateParser::parse("org.slf4j:slf4j-api -> 1.7.30").unwrap();
        assert!(parsed.requested_version.is_none());
        assert_eq!(parsed.resolved_version.as_deref(), Some("1.7.30"));
    }

    #[test]
    fn test_parse_already_expanded_marker() {
        let parsed = CoordinateParser::parse("project :spring-beans (*)").unwrap();
        assert_eq!(parsed.identity, Coordinate::project(":spring-beans"));
        assert!(parsed.already_expanded);

        let parsed = CoordinateParser::parse("com.squareup.okhttp3:okhttp:3.4.2 (*)").unwrap();
        assert_eq!(
            parsed.identity,
            Coordinate::module("com.squareup.okhttp3", "okhttp", "3.4.2")
        );
        assert!(parsed.already_expanded);
    }

    #[test]
    fn test_parse_override_with_marker() {
        let parsed = CoordinateParser::parse("should-suppress:project-child: -> 6 (*)").unwrap();
        assert!(parsed.already_expanded);
        assert_eq!(parsed.resolved_version.as_deref(), Some("6"));
    }

    #[test]
    fn test_parse_malformed_payloads() {
        assert!(CoordinateParser::parse("").is_err());
        assert!(CoordinateParser::parse("(*)").is_err());
        assert!(CoordinateParser::parse("just-a-name").is_err());
        assert!(CoordinateParser::parse("g:a").is_err());
        assert!(CoordinateParser::parse("g:a:").is_err());
        assert!(CoordinateParser::parse("a:b:c:d").is_err());
        assert!(CoordinateParser::parse("g:a:1.0 FAILED").is_err());
        assert!(CoordinateParser::parse("g:a: -> ").is_err());
        assert!(CoordinateParser::parse("project ").is_err());
    }

    #[test]
    fn test_error_mentions_payload() {
        let err = CoordinateParser::parse("not-a-coordinate").unwrap_err();
        assert!(err.to_string().contains("not-a-coordinate"));
    }
}
