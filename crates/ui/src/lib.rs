//! `shopdesk-ui`
//!
//! **Responsibility:** the two catalog views — the listing loader and the
//! creation form — plus the WASM shell around them.
//!
//! This crate provides:
//! - The catalog loader lifecycle ([`listing`])
//! - The item submitter state machine ([`form`])
//! - The navigation seam ([`nav`])
//!
//! The Leptos frontend lives in [`frontend`] and only compiles for
//! `wasm32`; everything above it is native-testable.

pub mod form;
pub mod listing;
pub mod nav;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use form::{
    ProductForm, SAVE_FAILED_MESSAGE, SAVE_SUCCEEDED_MESSAGE, SubmitNotice, SubmitOutcome,
    SubmitRejection, submit_product,
};
pub use listing::{ViewHandle, load_catalog, load_catalog_into};
pub use nav::Navigator;
