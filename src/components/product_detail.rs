//! Detail view for the selected product: eco prediction and greener alternatives.

use leptos::prelude::*;

use crate::components::eco_badge::EcoBadge;
use crate::components::product_card::ProductCard;
use crate::products::Product;
use crate::state::detail::DetailState;
use crate::util::format::{format_price, format_reviews, format_stars, star_glyphs};

#[component]
pub fn ProductDetail(detail: RwSignal<DetailState>, on_select: Callback<Product>) -> impl IntoView {
    let body = move || {
        let state = detail.get();
        let product = state.selected?;
        let badge = if state.loading {
            view! { <span class="product-detail__predicting">"Analyzing sustainability..."</span> }.into_any()
        } else {
            let label = state.prediction.map_or(product.eco_label, |p| p.eco_label);
            view! { <EcoBadge label=label prediction=state.prediction/> }.into_any()
        };
        let alternatives = (!state.recommendations.is_empty()).then(|| {
            view! {
                <section class="product-detail__alternatives">
                    <h3>"Eco-friendly alternatives"</h3>
                    <div class="product-grid">
                        {state
                            .recommendations
                            .into_iter()
                            .map(|alt| view! { <ProductCard product=alt on_select=on_select/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            }
        });
        let link = (!product.product_url.is_empty()).then(|| {
            view! {
                <a class="btn product-detail__link" href=product.product_url.clone() target="_blank" rel="noopener">
                    "View on store"
                </a>
            }
        });

        Some(view! {
            <article class="product-detail">
                <button class="btn product-detail__back" on:click=move |_| detail.update(DetailState::clear)>
                    "Back to results"
                </button>
                <div class="product-detail__main">
                    {(!product.img_url.is_empty())
                        .then(|| view! { <img class="product-detail__image" src=product.img_url.clone() alt=product.title.clone()/> })}
                    <div class="product-detail__info">
                        <h2>{product.title.clone()}</h2>
                        <span class="product-detail__category">{product.category_name.clone()}</span>
                        <div class="product-detail__rating">
                            <span>{star_glyphs(product.stars)}</span>
                            <span>{format_stars(product.stars)}</span>
                            <span>{format!("({} reviews)", format_reviews(product.reviews))}</span>
                        </div>
                        <span class="product-detail__price">{format_price(product.price)}</span>
                        {product.description.clone().map(|text| view! { <p class="product-detail__description">{text}</p> })}
                        {badge}
                        {link}
                    </div>
                </div>
                {alternatives}
            </article>
        })
    };

    view! { {body} }
}
