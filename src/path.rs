//! Hash-mode URL handling.
//!
//! Single-page apps served as static files often keep the route in the
//! URL fragment (`https://host/app/#/reports?tab=1`): the server never
//! sees navigation, the shell re-renders on fragment changes. The
//! registry itself matches exact paths only, so extracting the path out
//! of a location string is a separate, explicit step, and what to do
//! with the rest of the URL stays the shell's decision.

/// Extracts the routable path from a hash-mode URL.
///
/// Takes everything after the first `#` and truncates it at the first
/// `?`; an in-fragment query string belongs to the shell, not to the
/// route table. A URL with no fragment, or an empty one, routes the
/// root: `"/"`. No other normalisation happens; in particular a
/// trailing slash is kept, because `/reports` and `/reports/` are
/// different routes.
///
/// ```rust
/// use waypost::path::hash_path;
///
/// assert_eq!(hash_path("https://host/app/#/reports?tab=1"), "/reports");
/// assert_eq!(hash_path("#/quantitative"), "/quantitative");
/// assert_eq!(hash_path("https://host/app/"), "/");
/// assert_eq!(hash_path("https://host/app/#"), "/");
/// ```
pub fn hash_path(url: &str) -> &str {
    let Some((_, fragment)) = url.split_once('#') else {
        return "/";
    };
    let path = match fragment.split_once('?') {
        Some((path, _query)) => path,
        None => fragment,
    };
    if path.is_empty() { "/" } else { path }
}
