//! One-time global installation.
//!
//! A single-page app builds its route table once, during startup, and
//! the rest of the shell reads that same table for the life of the
//! process. This module is the wiring for it: [`install`] publishes a
//! built [`Registry`] process-wide, exactly once, and [`current`] hands
//! out `&'static` access to it.
//!
//! Both failure modes are caller ordering bugs in startup code and fail
//! loudly: [`Error::NotInitialized`] when reading before installing,
//! and [`Error::AlreadyInstalled`] when installing twice. Shells that
//! prefer passing the registry around by value or `Arc` can skip this
//! module entirely; nothing else in waypost touches it.

use std::sync::OnceLock;

use tracing::info;

use crate::error::Error;
use crate::registry::Registry;
use crate::view::ViewRef;

/// The installed table. Views are the erased [`ViewRef`] because a
/// process-wide static must commit to one concrete definition type.
static INSTALLED: OnceLock<Registry<ViewRef>> = OnceLock::new();

/// Publishes `registry` as the process-wide route table.
///
/// First call wins — including under a race — and later calls fail with
/// [`Error::AlreadyInstalled`] without touching the installed table.
pub fn install(registry: Registry<ViewRef>) -> Result<(), Error> {
    let routes = registry.len();
    match INSTALLED.set(registry) {
        Ok(()) => {
            info!(routes, "route registry installed");
            Ok(())
        }
        Err(_) => Err(Error::AlreadyInstalled),
    }
}

/// The installed route table.
///
/// Fails with [`Error::NotInitialized`] until [`install`] has run.
pub fn current() -> Result<&'static Registry<ViewRef>, Error> {
    INSTALLED.get().ok_or(Error::NotInitialized)
}
