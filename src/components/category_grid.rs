//! Category tiles on the home page.

use leptos::prelude::*;

use crate::products::filters::CategorySummary;
use crate::state::navigation::NavigationState;

#[component]
pub fn CategoryGrid(#[prop(into)] categories: Signal<Vec<CategorySummary>>) -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();

    view! {
        <div class="category-grid">
            {move || {
                categories
                    .get()
                    .into_iter()
                    .map(|summary| {
                        let name = summary.name.clone();
                        view! {
                            <button
                                class="category-grid__tile"
                                on:click=move |_| navigation.update(|n| n.handle_category_select(&name))
                            >
                                <span class="category-grid__name">{summary.name}</span>
                                <span class="category-grid__count">{format!("{} products", summary.product_count)}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
