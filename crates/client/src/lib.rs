//! `shopdesk-client`
//!
//! **Responsibility:** HTTP access to the Remote Catalog Service.
//!
//! This crate provides:
//! - The [`CatalogApi`] seam the views program against
//! - [`CatalogClient`], the `reqwest` implementation
//! - The client-side error taxonomy ([`ClientError`])
//!
//! The client is a **thin shell** around the remote API: one read (list a
//! page of products) and one write (create a product). The remote service
//! remains the authority; nothing is cached locally.

pub mod catalog;
pub mod error;

pub use catalog::{CatalogApi, CatalogClient, DEFAULT_API_URL};
pub use error::ClientError;
