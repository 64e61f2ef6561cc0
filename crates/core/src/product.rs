//! Catalog product model (read and write shapes).

use serde::{Deserialize, Serialize};

/// Fixed page size for the catalog listing; only the first page is fetched.
pub const PAGE_SIZE: u32 = 12;

/// Category ids the creation form offers. UI constraint only; the remote
/// service does not enforce it.
pub const CATEGORY_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Product category as embedded in read responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

/// A catalog product as read from the Remote Catalog Service.
///
/// Read-only on the client; products come into existence server-side via
/// [`NewProduct`]. Fields the service may omit default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Creation payload for the `POST /products` write.
///
/// The write shape carries a numeric `categoryId` where the read shape
/// returns a category object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category_id: i64,
    pub images: Vec<String>,
}
