//! Timer runtime used by [`delay`](super::delay).
//!
//! Deferred calls are spawned onto the tokio runtime the caller is already
//! running in. Callers outside any runtime share a lazily built multi-thread
//! runtime that lives for the rest of the process.
//!
//! # Handle Priority
//!
//! 1. Inside a tokio runtime: the current runtime's handle, so deferred
//!    callbacks inherit the caller's scheduler, clock (including a paused test
//!    clock) and tracing context.
//! 2. Otherwise: a thread-local cached handle to the shared runtime.

use std::cell::RefCell;
use std::sync::LazyLock;

use tokio::runtime::{Builder, Handle, Runtime};

/// Shared runtime for callers outside any tokio context.
///
/// Never dropped; built on first use with one worker per CPU core.
static SHARED_RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    let worker_threads = num_cpus::get();
    tracing::debug!(worker_threads, "building shared timer runtime");
    Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .thread_name("underbar-timer")
        .enable_time()
        .build()
        .expect("Failed to create shared timer runtime")
});

thread_local! {
    static CACHED_HANDLE: RefCell<Option<Handle>> = const { RefCell::new(None) };
}

/// Returns a reference to the shared runtime.
#[inline]
#[must_use]
pub fn shared() -> &'static Runtime {
    &SHARED_RUNTIME
}

/// Returns a handle to the current runtime, or to the shared one.
///
/// # Examples
///
/// ```rust
/// use underbar::function::runtime::handle;
///
/// // Outside any runtime this is the shared runtime.
/// let join = handle().spawn(async { 21 * 2 });
/// assert_eq!(handle().block_on(join).unwrap(), 42);
/// ```
#[must_use]
pub fn handle() -> Handle {
    if let Ok(current_handle) = Handle::try_current() {
        return current_handle;
    }

    CACHED_HANDLE.with(|cached| {
        cached
            .borrow_mut()
            .get_or_insert_with(|| shared().handle().clone())
            .clone()
    })
}
