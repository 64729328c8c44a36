//! Tokio runtime helpers for async-to-sync bridges.
//!
//! The CLI is synchronous, but initialization and the HTTP server are async.
//! These helpers run a future whether or not a Tokio runtime already exists.

/// Run an async future in the current context.
///
/// Handles two scenarios:
/// 1. If a multi-threaded Tokio runtime is already running, uses `block_in_place` to block on the future.
/// 2. If no runtime is available, creates a temporary one to run the future.
///
/// # Errors
/// Returns the I/O error if a runtime has to be created and cannot be.
///
/// # Example
/// ```ignore
/// use crate::util::run_async;
///
/// let engine = run_async(service.initialize())??;
/// ```
pub fn run_async<F, T>(future: F) -> std::io::Result<T>
where
    F: std::future::Future<Output = T>,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Ok(tokio::task::block_in_place(|| handle.block_on(future))),
        Err(_) => {
            let rt = tokio::runtime::Runtime::new()?;
            Ok(rt.block_on(future))
        }
    }
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
