//! Tracing and logging shared by every service binary.

/// Initialize process-wide observability (tracing/logging) and log which
/// service this process is.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(service: &'static str) {
    tracing::init();
    ::tracing::info!(service, "observability initialized");
}

/// Tracing configuration (filters, layers).
pub mod tracing;
