//! Catalog listing lifecycle: load one fixed page and render it.

use std::cell::Cell;
use std::rc::Rc;

use shopdesk_client::CatalogApi;
use shopdesk_core::{FetchState, Product};

/// Image shown when a product has none of its own.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";

/// Label shown when the service sent no category.
pub const CATEGORY_PLACEHOLDER: &str = "—";

/// Per-activation liveness flag for a view.
///
/// A response arriving after the view was deactivated must not apply its
/// state transition; whoever applies state checks this handle first.
#[derive(Debug, Clone)]
pub struct ViewHandle(Rc<Cell<bool>>);

impl ViewHandle {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    /// Called on unmount; late responses are then abandoned.
    pub fn deactivate(&self) {
        self.0.set(false);
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the first catalog page and produce the terminal state.
///
/// The caller sets `Loading` when issuing the call; this resolves it to
/// `Loaded` or `Failed`. Failure messages keep the concrete reason (status
/// code included) for the listing's error region.
pub async fn load_catalog<S: CatalogApi>(service: &S) -> FetchState<Vec<Product>> {
    match service.list_products().await {
        Ok(products) => FetchState::Loaded(products),
        Err(err) => {
            tracing::warn!(error = %err, "catalog load failed");
            FetchState::Failed(err.to_string())
        }
    }
}

/// Load the catalog and hand the resulting state to `apply`, unless the
/// view was deactivated while the request was in flight.
pub async fn load_catalog_into<S, F>(service: &S, view: &ViewHandle, apply: F)
where
    S: CatalogApi,
    F: FnOnce(FetchState<Vec<Product>>),
{
    let state = load_catalog(service).await;
    if view.is_active() {
        apply(state);
    }
}

/// Category label for a summary card.
pub fn category_label(product: &Product) -> &str {
    product
        .category
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or(CATEGORY_PLACEHOLDER)
}

/// First image of the product, or the placeholder.
pub fn card_image(product: &Product) -> &str {
    product
        .images
        .first()
        .map(String::as_str)
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Truncate a description for the summary card, appending an ellipsis.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
