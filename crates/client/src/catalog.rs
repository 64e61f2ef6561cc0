//! Remote Catalog Service bindings.

use shopdesk_core::{NewProduct, PAGE_SIZE, Product};

use crate::error::ClientError;

/// Base URL of the public catalog API the frontend ships against.
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1";

/// Read/write operations on the Remote Catalog Service.
///
/// The views program against this seam; tests substitute a recording fake.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    /// Fetch the first page of the catalog (fixed size, offset 0).
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;

    /// Create a product from an already-validated payload.
    async fn create_product(&self, payload: &NewProduct) -> Result<Product, ClientError>;
}

/// `reqwest`-backed client for the Remote Catalog Service.
///
/// Requests carry no timeout of their own and are never retried; both flows
/// treat every failure as terminal until the user acts again.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    api_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the public catalog API.
    pub fn public() -> Self {
        Self::new(DEFAULT_API_URL)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl CatalogApi for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let url = format!("{}/products?limit={}&offset=0", self.api_url, PAGE_SIZE);
        tracing::debug!(%url, "listing products");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn create_product(&self, payload: &NewProduct) -> Result<Product, ClientError> {
        let url = format!("{}/products", self.api_url);
        tracing::debug!(%url, title = %payload.title, "creating product");

        let resp = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
