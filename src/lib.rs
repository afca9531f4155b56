//! # waypost
//!
//! A tiny, static route registry for single-page apps.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The shell owns navigation, rendering, data, and policy. waypost owns
//! one question — *which route is this path?* — answered from a table
//! built once at startup and immutable ever after. Every feature
//! waypost skips is one the shell already does, closer to the user, at
//! no cost to you.
//!
//! What the shell already owns — waypost intentionally ignores:
//!
//! - **Rendering** — a resolved route hands back your view reference untouched
//! - **View loading** — deferred views resolve when *you* force them, never during lookup
//! - **Fallbacks** — an unmatched path is `None`; the shell picks the "not found" screen
//! - **Guards, data, i18n** — tags ride along as opaque strings; waypost never reads them
//!
//! What's left for waypost — the only part that changes between apps:
//!
//! - Exact-match lookup over literal paths — radix tree via [`matchit`]
//! - Build-time validation — duplicate paths or names fail construction, not navigation
//! - Reverse lookup by route name, and per-route string metadata where
//!   an absent tag is never confused with an empty one
//!
//! ## Quick start
//!
//! ```rust
//! use waypost::{Registry, RouteDefinition, ViewRef};
//!
//! let registry = Registry::register([
//!     RouteDefinition::new("/", "Home", ViewRef::eager("home.html")),
//!     RouteDefinition::new("/reports", "Reports", ViewRef::eager("reports.html"))
//!         .meta("market", "A股"),
//! ])?;
//!
//! let route = registry.resolve("/reports").expect("declared above");
//! assert_eq!(route.name(), "Reports");
//! assert_eq!(route.meta_value("market"), Some("A股"));
//!
//! assert!(registry.resolve("/missing").is_none());
//! assert_eq!(registry.metadata_for("/reports", "type"), None);
//! # Ok::<(), waypost::Error>(())
//! ```
//!
//! ## Deferred views
//!
//! Routes that are declared but rarely visited defer constructing their
//! view until first demand — the table stores the thunk, the shell
//! forces it if the user ever gets there:
//!
//! ```rust
//! use waypost::{RouteDefinition, ViewRef};
//!
//! let placeholder = RouteDefinition::new(
//!     "/analysis/hk-stock",
//!     "HkStock",
//!     ViewRef::deferred(|| "coming-soon.html"),
//! )
//! .meta("market", "港股");
//!
//! assert!(!placeholder.view().is_loaded());
//! assert_eq!(placeholder.view().downcast_ref::<&str>(), Some(&"coming-soon.html"));
//! assert!(placeholder.view().is_loaded());
//! ```

mod definition;
mod error;
mod metadata;
mod registry;
mod view;

pub mod bootstrap;
pub mod path;

pub use definition::RouteDefinition;
pub use error::Error;
pub use metadata::Metadata;
pub use registry::Registry;
pub use view::{ViewHandle, ViewRef};
