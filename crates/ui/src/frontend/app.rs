//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use shopdesk_client::CatalogClient;
use shopdesk_core::{CATEGORY_ID_RANGE, FetchState, Product, ProductDraft};

use crate::form::{self, ProductForm};
use crate::listing::{self, ViewHandle};
use crate::nav::Navigator;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=CatalogPage/>
                <Route path="/products" view=CatalogPage/>
                <Route path="/products/new" view=ProductNewPage/>
                <Route path="/products/:id" view=ProductDetailPage/>
            </Routes>
        </Router>
    }
}

/// Router-backed navigator handed to the form orchestration.
struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn to_catalog(&self) {
        use_navigate()("/products", Default::default());
    }

    fn back(&self) {
        if let Some(w) = web_sys::window() {
            if let Ok(history) = w.history() {
                let _ = history.back();
            }
        }
    }
}

/// Catalog listing page component.
#[component]
fn CatalogPage() -> impl IntoView {
    let state = create_rw_signal(FetchState::<Vec<Product>>::Loading);
    let view_handle = ViewHandle::new();

    {
        let view_handle = view_handle.clone();
        spawn_local(async move {
            let client = CatalogClient::public();
            listing::load_catalog_into(&client, &view_handle, move |loaded| state.set(loaded))
                .await;
        });
    }

    // A response landing after unmount must not touch the signal.
    on_cleanup(move || view_handle.deactivate());

    view! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>"Products"</h1>
                    <p class="subtitle">"Manage your product catalog"</p>
                </div>
                <A href="/products/new" class="button">"+ Add product"</A>
            </header>

            <main>
                {move || match state.get() {
                    FetchState::Loading => {
                        view! { <p class="muted">"Loading products..."</p> }.into_view()
                    }
                    FetchState::Failed(message) => {
                        view! { <p class="error">{message}</p> }.into_view()
                    }
                    FetchState::Loaded(products) => {
                        if products.is_empty() {
                            view! { <p class="muted">"No products found"</p> }.into_view()
                        } else {
                            view! {
                                <div class="catalog-grid">
                                    {products
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product/> })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }
                }}
            </main>
        </div>
    }
}

/// One summary card in the listing grid.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let image = listing::card_image(&product).to_string();
    let category = listing::category_label(&product).to_string();
    let description = listing::truncate_description(&product.description, 140);
    let href = format!("/products/{}", product.id);

    view! {
        <A href=href class="card">
            <img src=image alt=product.title.clone() loading="lazy"/>
            <div class="card-body">
                <div class="card-title">{product.title}</div>
                <div class="card-category">{category}</div>
                <div class="card-price">{format!("${}", product.price)}</div>
                <p class="card-description">{description}</p>
            </div>
        </A>
    }
}

/// Detail view is out of scope; the route exists so cards link somewhere.
#[component]
fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.get().get("id").cloned().unwrap_or_default();

    view! {
        <div class="page">
            <h1>{move || format!("Product #{}", id())}</h1>
            <A href="/products">"Back to products"</A>
        </div>
    }
}

/// Product creation page component.
#[component]
fn ProductNewPage() -> impl IntoView {
    let title = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let category_id = create_rw_signal(String::new());
    let image_url = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let is_submitting = create_rw_signal(false);

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }

        let draft = ProductDraft {
            title: title.get(),
            price: price.get(),
            category_id: category_id.get(),
            image_url: image_url.get(),
            description: description.get(),
        };

        spawn_local(async move {
            is_submitting.set(true);

            let client = CatalogClient::public();
            let mut form = ProductForm::new();
            let notice = form::submit_product(&mut form, &client, &RouterNavigator, &draft).await;

            is_submitting.set(false);

            if let Some(notice) = notice {
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message(notice.message());
                }
            }
        });
    };

    view! {
        <div class="page narrow">
            <header class="page-header">
                <div>
                    <h1>"Add new product"</h1>
                    <p class="subtitle">"Fill in the product information"</p>
                </div>
            </header>

            <form on:submit=move |ev| {
                ev.prevent_default();
                submit(ev);
            }>
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Product title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="price">"Price"</label>
                    <input
                        id="price"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="category">"Category ID"</label>
                    <input
                        id="category"
                        type="number"
                        min=*CATEGORY_ID_RANGE.start()
                        max=*CATEGORY_ID_RANGE.end()
                        prop:value=move || category_id.get()
                        on:input=move |ev| category_id.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="image">"Image URL"</label>
                    <input
                        id="image"
                        type="url"
                        placeholder="https://example.com/image.jpg"
                        prop:value=move || image_url.get()
                        on:input=move |ev| image_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        placeholder="Product description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button type="submit" disabled=move || is_submitting.get()>
                        {move || if is_submitting.get() { "Saving..." } else { "Save product" }}
                    </button>
                    <button type="button" on:click=move |_| RouterNavigator.back()>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
