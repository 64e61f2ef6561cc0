//! Navigation seam between the views and the router.

/// Router operations the views may request.
///
/// The WASM frontend backs this with `leptos_router` and browser history;
/// tests substitute a recording fake.
pub trait Navigator {
    /// Go to the catalog listing route.
    fn to_catalog(&self);

    /// Go back to the previous history entry.
    fn back(&self);
}
