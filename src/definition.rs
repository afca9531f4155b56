//! One entry of the route table.

use std::fmt;

use crate::metadata::Metadata;

/// A single route: a literal path, a unique symbolic name, an opaque
/// view reference, and optional string tags.
///
/// `V` is whatever the shell renders — an enum of screens, a component
/// constructor, or waypost's own [`ViewRef`](crate::ViewRef) when views
/// are heterogeneous or loaded on demand. The registry stores the value
/// and hands it back; it never looks inside.
///
/// [`meta`](RouteDefinition::meta) chains, so a table reads as the
/// declarative literal it is:
///
/// ```rust
/// use waypost::RouteDefinition;
///
/// let def = RouteDefinition::new("/analysis/a-stock/individual", "AStockIndividual", ())
///     .meta("market", "A股")
///     .meta("type", "个股分析");
///
/// assert_eq!(def.name(), "AStockIndividual");
/// assert_eq!(def.meta_value("market"), Some("A股"));
/// ```
#[derive(Clone)]
pub struct RouteDefinition<V> {
    path: String,
    name: String,
    view: V,
    metadata: Metadata,
}

impl<V> RouteDefinition<V> {
    /// A route with no tags. Add tags with [`meta`](RouteDefinition::meta).
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            metadata: Metadata::new(),
        }
    }

    /// Attaches one tag. Returns `self` so declarations chain naturally.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// The literal path this route is registered under.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique symbolic name, used for reverse lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The opaque view reference.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the definition, returning the view reference.
    pub fn into_view(self) -> V {
        self.view
    }

    /// All tags on this route.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Shortcut for `metadata().get(key)`. `None` means the tag is
    /// absent — distinct from a tag set to `""`.
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)
    }
}

/// The view payload is opaque, so it stays out of the debug output.
impl<V> fmt::Debug for RouteDefinition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDefinition")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_tags_accumulate() {
        let def = RouteDefinition::new("/reports", "Reports", ())
            .meta("market", "A股")
            .meta("type", "研报");

        assert_eq!(def.path(), "/reports");
        assert_eq!(def.meta_value("market"), Some("A股"));
        assert_eq!(def.meta_value("type"), Some("研报"));
        assert_eq!(def.metadata().len(), 2);
    }

    #[test]
    fn untagged_route_has_empty_metadata() {
        let def = RouteDefinition::new("/", "Home", "home.html");

        assert!(def.metadata().is_empty());
        assert_eq!(def.meta_value("market"), None);
        assert_eq!(*def.view(), "home.html");
        assert_eq!(def.into_view(), "home.html");
    }
}
