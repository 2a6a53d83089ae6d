//! Result grid with loading and empty states.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::products::Product;

#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<Product>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <p class="product-grid__loading">"Loading products..."</p> }
        >
            <Show
                when=move || !products.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="product-grid__empty">
                            <p>"No products found."</p>
                            <button class="btn" on:click=move |_| on_retry.run(())>"Try again"</button>
                        </div>
                    }
                }
            >
                <div class="product-grid">
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product on_select=on_select/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </Show>
    }
}
