//! View references and type erasure.
//!
//! # How mixed view types are stored
//!
//! A route table holds views of *different* concrete types — a home
//! screen, a report list, a placeholder that is only built if anyone
//! ever visits it. Rust collections hold one type, so heterogeneous
//! tables erase their views behind a shared handle and recover the
//! concrete type at render time.
//!
//! The chain from declaration to render is:
//!
//! ```text
//! ViewRef::eager(ReportList::new())        ← declared up front
//! ViewRef::deferred(|| ComingSoon::new())  ← declared as a thunk
//!        ↓  stored inside a RouteDefinition; the registry never opens it
//! route.view().load()                      ← the shell forces the handle
//!        ↓  thunk runs at most once, memoised
//! ViewHandle = Arc<dyn Any + Send + Sync>  ← one uniform resolved type
//!        ↓
//! route.view().downcast_ref::<ComingSoon>()  ← back to the concrete view
//! ```
//!
//! The registry is indifferent to all of this: resolution returns the
//! [`ViewRef`] untouched, and forcing it is strictly the caller's move.
//! Shells with a single concrete view type can skip erasure entirely and
//! instantiate `Registry<TheirView>` directly.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

// ── Handle type ───────────────────────────────────────────────────────────────

/// The uniform, resolved form of a view: a shared, type-erased handle.
///
/// Whatever concrete type was registered — eagerly or through a deferred
/// thunk — it comes back out as this one type. `Arc` gives cheap,
/// thread-safe sharing; `dyn Any` lets the shell downcast to the
/// concrete view it registered.
pub type ViewHandle = Arc<dyn Any + Send + Sync>;

// ── ViewRef ───────────────────────────────────────────────────────────────────

/// An opaque reference to a renderable view.
///
/// Either already constructed ([`eager`](ViewRef::eager)) or a thunk
/// that constructs on first demand ([`deferred`](ViewRef::deferred)).
/// Both expose the same resolved type, [`ViewHandle`], so callers never
/// branch on which kind they hold.
///
/// ```rust
/// use waypost::ViewRef;
///
/// struct ComingSoon;
///
/// let view = ViewRef::deferred(|| ComingSoon);
/// assert!(!view.is_loaded());
///
/// // Forcing is the shell's move — and idempotent.
/// assert!(view.downcast_ref::<ComingSoon>().is_some());
/// assert!(view.is_loaded());
/// ```
pub struct ViewRef {
    source: Source,
}

enum Source {
    /// Constructed up front; the handle always exists.
    Eager(ViewHandle),
    /// Constructed on first demand; the thunk runs at most once.
    Deferred {
        cell: OnceLock<ViewHandle>,
        load: Box<dyn Fn() -> ViewHandle + Send + Sync>,
    },
}

impl ViewRef {
    /// Wraps an already-constructed view.
    pub fn eager<T: Send + Sync + 'static>(view: T) -> Self {
        Self { source: Source::Eager(Arc::new(view)) }
    }

    /// Wraps a thunk that constructs the view on first demand.
    ///
    /// The thunk runs at most once, no matter how many callers race on
    /// [`load`](ViewRef::load); later calls get the memoised handle. If
    /// obtaining the view involves real I/O (fetching a code chunk,
    /// reading a template), do that in the surrounding loader and hand
    /// the finished value to the thunk — or resolve it yourself and use
    /// [`eager`](ViewRef::eager).
    pub fn deferred<T, F>(load: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            source: Source::Deferred {
                cell: OnceLock::new(),
                load: Box::new(move || Arc::new(load()) as ViewHandle),
            },
        }
    }

    /// Forces the handle and returns it.
    ///
    /// Eager refs return their handle directly; deferred refs run the
    /// thunk on the first call and the memoised handle ever after. Every
    /// call returns the same handle.
    pub fn load(&self) -> &ViewHandle {
        match &self.source {
            Source::Eager(handle) => handle,
            Source::Deferred { cell, load } => cell.get_or_init(|| load()),
        }
    }

    /// The handle, if it is resolved already. Never runs the thunk.
    pub fn get(&self) -> Option<&ViewHandle> {
        match &self.source {
            Source::Eager(handle) => Some(handle),
            Source::Deferred { cell, .. } => cell.get(),
        }
    }

    /// Whether the view is resolved. Eager refs are born resolved.
    pub fn is_loaded(&self) -> bool {
        self.get().is_some()
    }

    /// Forces the handle and downcasts it to the concrete view type.
    ///
    /// `None` means the registered view was some other type — a shell
    /// bug, and one worth surfacing next to the route name.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.load().downcast_ref::<T>()
    }
}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Eager(_) => f.write_str("ViewRef::Eager"),
            Source::Deferred { cell, .. } => match cell.get() {
                Some(_) => f.write_str("ViewRef::Deferred(loaded)"),
                None => f.write_str("ViewRef::Deferred(pending)"),
            },
        }
    }
}
