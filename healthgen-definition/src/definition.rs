//! Validated health definition types.

use std::{fmt, str::FromStr};

use indexmap::IndexSet;
use serde::Serialize;
use thiserror::Error;

/// A parsed and validated `health.yml`.
///
/// Every dependency has already had its type resolved, so a `Definition`
/// never contains an unsupported kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    name: String,
    dependencies: Vec<Dependency>,
}

impl Definition {
    pub fn new(name: impl Into<String>, dependencies: Vec<Dependency>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    /// Name of the service the definition describes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dependencies in declaration order.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// Count dependencies of the given kind.
    pub fn count_of(&self, kind: DependencyKind) -> usize {
        self.dependencies.iter().filter(|d| d.kind == kind).count()
    }
}

/// One external system whose health is probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    name: String,
    connection_string: String,
    #[serde(rename = "type")]
    kind: DependencyKind,
    tags: IndexSet<String>,
}

impl Dependency {
    pub fn new(
        name: impl Into<String>,
        connection_string: impl Into<String>,
        kind: DependencyKind,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            connection_string: connection_string.into(),
            kind,
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Tags in declaration order, without repeats.
    pub fn tags(&self) -> &IndexSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// The closed set of supported dependency types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// HTTP reachability probe against a URI.
    Uri,
    /// SQL Server connectivity probe using a connection string.
    SqlServer,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 2] = [DependencyKind::Uri, DependencyKind::SqlServer];

    /// Canonical spelling used in `health.yml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uri => "uri",
            Self::SqlServer => "sqlserver",
        }
    }

    /// Comma separated list of accepted spellings, for messages.
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `type` value matches none of the supported kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported dependency type '{0}'")]
pub struct UnknownDependencyKind(pub String);

impl FromStr for DependencyKind {
    type Err = UnknownDependencyKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDependencyKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("uri".parse::<DependencyKind>(), Ok(DependencyKind::Uri));
        assert_eq!("URI".parse::<DependencyKind>(), Ok(DependencyKind::Uri));
        assert_eq!(
            "SqlServer".parse::<DependencyKind>(),
            Ok(DependencyKind::SqlServer)
        );
        assert_eq!(
            "SQLSERVER".parse::<DependencyKind>(),
            Ok(DependencyKind::SqlServer)
        );
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        let err = "redis".parse::<DependencyKind>().unwrap_err();
        assert_eq!(err, UnknownDependencyKind("redis".to_string()));
        assert_eq!(err.to_string(), "unsupported dependency type 'redis'");

        assert!("".parse::<DependencyKind>().is_err());
        assert!("sql server".parse::<DependencyKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DependencyKind::Uri.to_string(), "uri");
        assert_eq!(DependencyKind::SqlServer.to_string(), "sqlserver");
        assert_eq!(DependencyKind::supported(), "uri, sqlserver");
    }

    #[test]
    fn test_dependency_tags_keep_order_and_drop_repeats() {
        let dep = Dependency::new(
            "api",
            "https://api.local",
            DependencyKind::Uri,
            ["live", "ready", "live"],
        );

        let tags: Vec<&str> = dep.tags().iter().map(String::as_str).collect();
        assert_eq!(tags, ["live", "ready"]);
        assert!(dep.has_tag("ready"));
        assert!(!dep.has_tag("startup"));
    }

    #[test]
    fn test_definition_counts() {
        let definition = Definition::new(
            "svc",
            vec![
                Dependency::new("api", "https://a", DependencyKind::Uri, ["ready"]),
                Dependency::new("db", "Server=x", DependencyKind::SqlServer, ["ready"]),
                Dependency::new("cdn", "https://c", DependencyKind::Uri, ["live"]),
            ],
        );

        assert_eq!(definition.len(), 3);
        assert!(!definition.is_empty());
        assert_eq!(definition.count_of(DependencyKind::Uri), 2);
        assert_eq!(definition.count_of(DependencyKind::SqlServer), 1);
    }
}
