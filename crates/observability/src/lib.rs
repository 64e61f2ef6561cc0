//! Tracing/logging setup shared by native harnesses.
//!
//! The WASM frontend has its own console hook; this crate covers everything
//! that runs natively (integration tests, future host binaries).

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
