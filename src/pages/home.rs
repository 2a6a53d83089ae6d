//! Landing page: hero copy and the category directory.

use leptos::prelude::*;

use crate::components::category_grid::CategoryGrid;
use crate::config::ApiConfig;
use crate::products::filters::CategorySummary;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let categories = RwSignal::new(Vec::<CategorySummary>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let service = crate::products::ProductService::new(crate::net::api::HttpBackend::new(config));
        categories.set(service.categories().await);
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <section class="home">
            <div class="home__hero">
                <h1>"Shop sustainably"</h1>
                <p>"Search the catalog or browse a category to see how each product rates for the planet."</p>
            </div>
            <h2>"Browse categories"</h2>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="home__loading">"Loading categories..."</p> }
            >
                <Show
                    when=move || !categories.get().is_empty()
                    fallback=move || view! { <p class="home__empty">"No categories available."</p> }
                >
                    <CategoryGrid categories=categories/>
                </Show>
            </Show>
        </section>
    }
}
