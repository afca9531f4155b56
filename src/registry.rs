//! The route registry: build-time validation, exact-match resolution.
//!
//! Routes are compiled once, at startup, into an immutable table: a
//! radix tree for path lookup, a name index for reverse lookup, and the
//! definitions themselves in registration order. A duplicate path or
//! name, or a malformed path, fails the build loudly before the first
//! resolution instead of surfacing later as a silent mismatch. After
//! the build the table is read-only, so any number of threads or tasks
//! may resolve against it without locks.

use std::collections::HashMap;
use std::fmt;
use std::slice;

use matchit::Router as PathTree;
use tracing::debug;

use crate::definition::RouteDefinition;
use crate::error::Error;

/// The route table.
///
/// One radix tree over all paths — O(path-length) lookup via [`matchit`],
/// no allocations on the lookup path. Built once with
/// [`Registry::register`]; resolution methods return `Option`, where
/// `None` is the ordinary "no such route" outcome the shell handles,
/// never an error.
///
/// Matching is **exact and literal**. No parameters, no wildcards, no
/// prefix fallback: `/reports` and `/reports/` are two different routes.
/// Because every path is unique and matching is exact, the order routes
/// were declared in can never change what a path resolves to.
pub struct Registry<V> {
    defs: Vec<RouteDefinition<V>>,
    paths: PathTree<usize>,
    names: HashMap<String, usize>,
}

impl<V> Registry<V> {
    /// Builds the registry from a fixed list of definitions, evaluated
    /// once.
    ///
    /// All validation happens here: every path must be a non-empty
    /// literal starting with `/`, and no two definitions may share a
    /// path or a name. The first offence aborts the build with the
    /// matching [`Error`] so a misconfigured table stops the application
    /// at startup instead of mis-navigating users later.
    ///
    /// ```rust
    /// use waypost::{Registry, RouteDefinition};
    ///
    /// let registry = Registry::register([
    ///     RouteDefinition::new("/", "Home", "home.html"),
    ///     RouteDefinition::new("/reports", "Reports", "reports.html")
    ///         .meta("market", "A股"),
    /// ])?;
    ///
    /// assert_eq!(registry.len(), 2);
    /// # Ok::<(), waypost::Error>(())
    /// ```
    pub fn register<I>(definitions: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = RouteDefinition<V>>,
    {
        let defs: Vec<RouteDefinition<V>> = definitions.into_iter().collect();
        let mut paths = PathTree::new();
        let mut names = HashMap::with_capacity(defs.len());

        for (index, def) in defs.iter().enumerate() {
            validate_path(def.path())?;

            if let Err(err) = paths.insert(escape_braces(def.path()), index) {
                return Err(match err {
                    matchit::InsertError::Conflict { .. } => Error::DuplicatePath {
                        path: def.path().to_owned(),
                    },
                    other => Error::InvalidPath {
                        path: def.path().to_owned(),
                        reason: other.to_string(),
                    },
                });
            }

            if names.insert(def.name().to_owned(), index).is_some() {
                return Err(Error::DuplicateName { name: def.name().to_owned() });
            }

            debug!(path = def.path(), name = def.name(), "route registered");
        }

        debug!(routes = defs.len(), "route table built");
        Ok(Self { defs, paths, names })
    }

    /// Resolves a path to its route, or `None` when nothing matches.
    ///
    /// Exact string match against the declared literals. Repeated calls
    /// with the same path return the same definition.
    pub fn resolve(&self, path: &str) -> Option<&RouteDefinition<V>> {
        let matched = self.paths.at(path).ok()?;
        Some(&self.defs[*matched.value])
    }

    /// Reverse lookup by the route's symbolic name. Same `None` contract
    /// as [`resolve`](Registry::resolve).
    pub fn resolve_by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.names.get(name).map(|&index| &self.defs[index])
    }

    /// The metadata value at `key` for the route matching `path`.
    ///
    /// `None` when the path matches nothing *or* the matched route lacks
    /// the tag; a tag set to `""` comes back as `Some("")`.
    pub fn metadata_for(&self, path: &str, key: &str) -> Option<&str> {
        self.resolve(path)?.meta_value(key)
    }

    /// All routes, in registration order.
    pub fn iter(&self) -> slice::Iter<'_, RouteDefinition<V>> {
        self.defs.iter()
    }

    /// Routes whose metadata carries `key == value`, in registration
    /// order. This is what a nav sidebar grouping by `market` wants.
    pub fn routes_tagged<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> impl Iterator<Item = &'a RouteDefinition<V>> {
        self.defs
            .iter()
            .filter(move |def| def.meta_value(key) == Some(value))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl<'a, V> IntoIterator for &'a Registry<V> {
    type Item = &'a RouteDefinition<V>;
    type IntoIter = slice::Iter<'a, RouteDefinition<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.defs.iter()
    }
}

/// Lists the table's paths; view payloads stay opaque.
impl<V> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.defs.iter().map(RouteDefinition::path))
            .finish()
    }
}

/// Paths are literal segments rooted at `/` — the same shape the shell
/// reads back out of the location bar.
fn validate_path(path: &str) -> Result<(), Error> {
    if path.is_empty() {
        return Err(Error::InvalidPath {
            path: path.to_owned(),
            reason: "path is empty".to_owned(),
        });
    }
    if !path.starts_with('/') {
        return Err(Error::InvalidPath {
            path: path.to_owned(),
            reason: "path must begin with `/`".to_owned(),
        });
    }
    Ok(())
}

/// matchit reads `{…}` as parameter syntax; waypost routes are literal.
/// Doubling the braces makes the tree match them byte-for-byte.
fn escape_braces(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Registry<&'static str> {
        Registry::register([
            RouteDefinition::new("/", "Home", "home.html"),
            RouteDefinition::new("/reports", "Reports", "reports.html")
                .meta("market", "A股"),
            RouteDefinition::new("/quantitative", "Quantitative", "quant.html"),
        ])
        .expect("table is duplicate-free")
    }

    #[test]
    fn resolves_every_registered_path() {
        let registry = table();

        for def in &registry {
            let hit = registry.resolve(def.path()).expect("registered path");
            assert_eq!(hit.name(), def.name());
        }
    }

    #[test]
    fn unknown_path_is_none_not_an_error() {
        let registry = table();

        assert!(registry.resolve("/not/a/real/path").is_none());
        // `/reports` is registered; its slashed sibling is a different route.
        assert!(registry.resolve("/reports/").is_none());
        assert!(registry.resolve_by_name("Ghost").is_none());
    }

    #[test]
    fn duplicate_path_fails_the_build() {
        let err = Registry::register([
            RouteDefinition::new("/reports", "Reports", ()),
            RouteDefinition::new("/reports", "ReportsCopy", ()),
        ])
        .unwrap_err();

        assert_eq!(err, Error::DuplicatePath { path: "/reports".to_owned() });
    }

    #[test]
    fn duplicate_name_fails_the_build() {
        let err = Registry::register([
            RouteDefinition::new("/a", "Reports", ()),
            RouteDefinition::new("/b", "Reports", ()),
        ])
        .unwrap_err();

        assert_eq!(err, Error::DuplicateName { name: "Reports".to_owned() });
    }

    #[test]
    fn malformed_paths_fail_the_build() {
        for bad in ["", "reports"] {
            let err = Registry::register([RouteDefinition::new(bad, "X", ())])
                .unwrap_err();
            assert!(
                matches!(err, Error::InvalidPath { .. }),
                "`{bad}` should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn empty_table_builds_and_resolves_nothing() {
        let registry: Registry<()> = Registry::register([]).expect("empty is fine");

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.resolve("/").is_none());
    }

    #[test]
    fn braces_are_literal_not_parameters() {
        let registry = Registry::register([
            RouteDefinition::new("/files/{raw}", "RawFile", ()),
        ])
        .expect("brace literals are valid");

        assert!(registry.resolve("/files/{raw}").is_some());
        // A parameter would capture this; a literal must not.
        assert!(registry.resolve("/files/readme").is_none());
    }

    #[test]
    fn unicode_paths_resolve_exactly() {
        let registry = Registry::register([
            RouteDefinition::new("/分析/港股", "HkStock", ()).meta("market", "港股"),
        ])
        .expect("non-ascii literals are valid paths");

        let hit = registry.resolve("/分析/港股").expect("exact match");
        assert_eq!(hit.name(), "HkStock");
        assert_eq!(registry.metadata_for("/分析/港股", "market"), Some("港股"));

        // Exact in any script: neither a prefix nor an extension matches.
        assert!(registry.resolve("/分析").is_none());
        assert!(registry.resolve("/分析/港股/x").is_none());
    }

    #[test]
    fn metadata_for_distinguishes_absent_from_missing_route() {
        let registry = table();

        assert_eq!(registry.metadata_for("/reports", "market"), Some("A股"));
        assert_eq!(registry.metadata_for("/reports", "type"), None);
        assert_eq!(registry.metadata_for("/missing", "market"), None);
    }

    #[test]
    fn tagged_iteration_filters_by_exact_value() {
        let registry = table();

        let tagged: Vec<&str> =
            registry.routes_tagged("market", "A股").map(|d| d.name()).collect();
        assert_eq!(tagged, ["Reports"]);
        assert_eq!(registry.routes_tagged("market", "港股").count(), 0);
    }
}
