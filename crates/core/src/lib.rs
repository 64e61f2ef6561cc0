//! `shopdesk-core` — domain foundation for the catalog client.
//!
//! This crate contains **pure domain** types (no IO, no HTTP): the product
//! model, the typed form draft with its validation pipeline, and the
//! per-view lifecycle states shared by the listing and creation flows.

pub mod draft;
pub mod error;
pub mod product;
pub mod state;

pub use draft::ProductDraft;
pub use error::{ValidationError, ValidationResult};
pub use product::{CATEGORY_ID_RANGE, Category, NewProduct, PAGE_SIZE, Product};
pub use state::{FetchState, SubmissionState};
