//! Tracing and logging (shared setup).

/// Initialize process-wide observability for native targets.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize observability inside the browser, writing to the devtools console.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init_browser() {
    tracing::init_browser();
}

/// Tracing configuration (filters, layers, writers).
pub mod tracing;
