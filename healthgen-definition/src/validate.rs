//! Resolution of raw YAML entries into validated definition types.

use miette::SourceSpan;

use crate::{
    Definition, Dependency, DependencyKind, Result,
    error::SourceContext,
    parse::{RawDefinition, RawDependency},
};

/// Validation context that carries source information while raw entries
/// are turned into a [`Definition`].
#[derive(Debug, Clone)]
pub(crate) struct ParseContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    /// Resolve every dependency before building the definition, so a single
    /// bad entry rejects the whole file.
    pub fn resolve(&self, raw: RawDefinition) -> Result<Definition> {
        let anchors =
            self.dependency_anchors(raw.dependencies.iter().map(|dep| dep.name.as_str()));
        let dependencies = raw
            .dependencies
            .into_iter()
            .zip(anchors)
            .map(|(dep, anchor)| self.resolve_dependency(dep, anchor))
            .collect::<Result<Vec<_>>>()?;

        Ok(Definition::new(raw.name, dependencies))
    }

    fn resolve_dependency(
        &self,
        raw: RawDependency,
        name_span: Option<SourceSpan>,
    ) -> Result<Dependency> {
        let anchor = name_span.map(|span| span.offset()).unwrap_or(0);

        let connection_string = match (raw.connection_string, raw.url.as_ref()) {
            (Some(connection_string), None) => connection_string,
            (None, Some(url)) => url.clone(),
            (Some(_), Some(_)) => {
                return Err(self.source.validation_error_at(
                    format!(
                        "dependency '{}' sets both 'connectionString' and 'url'",
                        raw.name
                    ),
                    find_key_span(self.source.src(), "url", anchor),
                ));
            }
            (None, None) => {
                return Err(self.source.validation_error_at(
                    format!("dependency '{}' is missing 'connectionString'", raw.name),
                    name_span,
                ));
            }
        };

        let kind = match raw.kind.as_deref() {
            Some(ty) => ty.parse::<DependencyKind>().map_err(|_| {
                self.source.unsupported_type_error(
                    ty,
                    &raw.name,
                    find_value_span(self.source.src(), "type", ty, anchor),
                )
            })?,
            // The URI-only schema had no type field.
            None if raw.url.is_some() => DependencyKind::Uri,
            None => {
                return Err(self.source.validation_error_at(
                    format!(
                        "dependency '{}' has no 'type'; expected one of: {}",
                        raw.name,
                        DependencyKind::supported()
                    ),
                    name_span,
                ));
            }
        };

        tracing::trace!(dependency = %raw.name, %kind, "resolved dependency");

        Ok(Dependency::new(raw.name, connection_string, kind, raw.tags))
    }

    /// Span of each dependency's `name` value, in list order.
    ///
    /// The search starts at the `dependencies` key and each entry is looked
    /// up after the previous one, so neither the definition's own `name` nor
    /// an earlier dependency with the same name can capture the label.
    fn dependency_anchors<'n>(
        &self,
        names: impl Iterator<Item = &'n str>,
    ) -> Vec<Option<SourceSpan>> {
        let src = self.source.src();
        let mut cursor = find_key_span(src, "dependencies", 0)
            .map(|span| span.offset() + span.len())
            .unwrap_or(0);

        names
            .map(|name| {
                let span = find_value_span(src, "name", name, cursor);
                if let Some(span) = span {
                    cursor = span.offset() + span.len();
                }
                span
            })
            .collect()
    }
}

/// Find the span of `value` written as `key: value` at or after `from`.
///
/// Handles plain, single-quoted and double-quoted scalars. Returns the span
/// of the value itself, excluding quotes.
pub(crate) fn find_value_span(
    src: &str,
    key: &str,
    value: &str,
    from: usize,
) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;
    let candidates = [
        (format!("{}: {}", key, value), key.len() + 2),
        (format!("{}: \"{}\"", key, value), key.len() + 3),
        (format!("{}: '{}'", key, value), key.len() + 3),
        (format!("{}:{}", key, value), key.len() + 1),
    ];

    candidates
        .iter()
        .filter_map(|(pattern, skip)| {
            haystack
                .match_indices(pattern.as_str())
                .map(|(pos, _)| pos)
                .find(|pos| {
                    is_key_boundary(haystack, *pos)
                        && is_value_end(haystack, *pos + pattern.len())
                })
                .map(|pos| from + pos + skip)
        })
        .min()
        .map(|start| SourceSpan::from((start, value.len())))
}

/// Find the span of a `key:` at or after `from`.
pub(crate) fn find_key_span(src: &str, key: &str, from: usize) -> Option<SourceSpan> {
    let haystack = src.get(from..)?;
    let pattern = format!("{}:", key);

    haystack
        .match_indices(pattern.as_str())
        .map(|(pos, _)| pos)
        .find(|pos| is_key_boundary(haystack, *pos))
        .map(|pos| SourceSpan::from((from + pos, key.len())))
}

/// A key match must not be the tail of a longer key (`hostname:` vs `name:`).
fn is_key_boundary(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .next_back()
        .is_none_or(|c| c.is_whitespace() || matches!(c, '-' | '{' | ','))
}

/// A value match must end the scalar (`db` must not match `db2`).
fn is_value_end(src: &str, end: usize) -> bool {
    src[end..]
        .chars()
        .next()
        .is_none_or(|c| c.is_whitespace() || matches!(c, ',' | '}' | '#'))
}
