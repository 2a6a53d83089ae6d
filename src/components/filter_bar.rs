//! Sort and refinement controls for the search page.

use leptos::prelude::*;

use crate::products::filters::{DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, ProductFilters, SortKey};

const STAR_THRESHOLDS: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

fn parse_price(raw: &str, fallback: f64) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0).unwrap_or(fallback)
}

#[component]
pub fn FilterBar(filters: RwSignal<ProductFilters>) -> impl IntoView {
    let on_sort = move |ev: leptos::ev::Event| {
        let sort = event_target_value(&ev).parse::<SortKey>().ok();
        filters.update(|f| f.sort = sort);
    };
    let on_best = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        filters.update(|f| f.only_best_sellers = checked);
    };
    let on_min_price = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| f.price_range.0 = parse_price(&value, DEFAULT_MIN_PRICE));
    };
    let on_max_price = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| f.price_range.1 = parse_price(&value, DEFAULT_MAX_PRICE));
    };
    let on_stars = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filters.update(|f| f.min_stars = parse_price(&value, 0.0));
    };

    view! {
        <div class="filter-bar">
            <select class="filter-bar__sort" on:change=on_sort>
                <option value="" selected=move || filters.get().sort.is_none()>"Sort by"</option>
                {SortKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <option value=key.as_str() selected=move || filters.get().sort == Some(key)>
                                {key.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <label class="filter-bar__best">
                <input type="checkbox" prop:checked=move || filters.get().only_best_sellers on:change=on_best/>
                "Best sellers only"
            </label>
            <input
                class="filter-bar__price"
                type="number"
                min="0"
                placeholder="Min $"
                prop:value=move || filters.get().price_range.0.to_string()
                on:change=on_min_price
            />
            <input
                class="filter-bar__price"
                type="number"
                min="0"
                placeholder="Max $"
                prop:value=move || filters.get().price_range.1.to_string()
                on:change=on_max_price
            />
            <select class="filter-bar__stars" on:change=on_stars>
                {STAR_THRESHOLDS
                    .into_iter()
                    .map(|threshold| {
                        let label = if threshold == 0.0 { "Any rating".to_owned() } else { format!("{threshold}+ stars") };
                        view! {
                            <option value=threshold.to_string() selected=move || filters.get().min_stars == threshold>
                                {label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
