//! Shared product listing used by the search and category pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads one product list through `ProductService`, refines it with the
//! filter bar, and swaps to the detail view when a product is opened.
//! Opening a product also becomes the assistant's context and may auto-open
//! the chat panel.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::product_detail::ProductDetail;
use crate::components::product_grid::ProductGrid;
use crate::config::ApiConfig;
use crate::products::Product;
use crate::products::filters::ProductFilters;
use crate::state::chat::ChatState;
use crate::state::detail::DetailState;
use crate::state::products::ProductsState;
use crate::util::time::now_ms;

/// Which slice of the catalog a listing shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingSource {
    Search(String),
    Category(String),
}

impl ListingSource {
    pub async fn load(&self, config: ApiConfig) -> Vec<Product> {
        let service = crate::products::ProductService::new(crate::net::api::HttpBackend::new(config));
        match self {
            Self::Search(query) => service.search_products(query).await,
            Self::Category(category) => service.products_by_category(category).await,
        }
    }
}

#[component]
pub fn ProductListing(
    source: ListingSource,
    title: String,
    #[prop(optional)] show_filters: bool,
) -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let chat = expect_context::<RwSignal<ChatState>>();
    let selected_product = expect_context::<RwSignal<Option<Product>>>();

    let source = StoredValue::new(source);
    let products = RwSignal::new(ProductsState::default());
    let detail = RwSignal::new(DetailState::default());
    let filters = RwSignal::new(ProductFilters::default());

    let load = move || {
        let mut seq = 0;
        products.update(|s| seq = s.begin_request());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = source.get_value().load(config.get_value()).await;
            products.update(|s| {
                if !s.finish_request(seq, items) {
                    log::debug!("dropped superseded product load {seq}");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (seq, config, source);
    };
    load();

    let on_select = Callback::new(move |product: Product| {
        selected_product.set(Some(product.clone()));
        chat.update(|c| {
            c.on_product_selected(&product, now_ms());
        });
        let mut seq = 0;
        detail.update(|d| seq = d.select(product.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let backend = crate::net::api::HttpBackend::new(config.get_value());
            let outcome = crate::products::prediction::predict_eco_label(&backend, &product).await;
            detail.update(|d| {
                d.apply_prediction(seq, outcome);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });
    let on_retry = Callback::new(move |()| load());

    let visible = Signal::derive(move || {
        let refinements = if show_filters { filters.get() } else { ProductFilters::default() };
        products.with(|s| refinements.apply(&s.items))
    });
    let loading = Signal::derive(move || products.get().loading);

    view! {
        <Show
            when=move || detail.get().selected.is_none()
            fallback=move || view! { <ProductDetail detail=detail on_select=on_select/> }
        >
            <section class="listing">
                <div class="listing__heading">
                    <h2>{title.clone()}</h2>
                    <Show when=move || !loading.get()>
                        <span class="listing__count">{move || format!("{} products", visible.get().len())}</span>
                    </Show>
                </div>
                {show_filters.then(|| view! { <FilterBar filters=filters/> })}
                <ProductGrid products=visible loading=loading on_select=on_select on_retry=on_retry/>
            </section>
        </Show>
    }
}
