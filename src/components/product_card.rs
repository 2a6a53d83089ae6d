//! Product tile used in result grids and recommendation lists.

use leptos::prelude::*;

use crate::components::eco_badge::EcoBadge;
use crate::products::Product;
use crate::util::format::{format_price, format_reviews, format_stars, star_glyphs};

#[component]
pub fn ProductCard(product: Product, on_select: Callback<Product>) -> impl IntoView {
    let on_click = {
        let product = product.clone();
        move |_| on_select.run(product.clone())
    };
    let image = (!product.img_url.is_empty()).then(|| {
        view! { <img class="product-card__image" src=product.img_url.clone() alt=product.title.clone()/> }
    });

    view! {
        <article class="product-card" on:click=on_click>
            {image}
            <div class="product-card__body">
                <h3 class="product-card__title">{product.title.clone()}</h3>
                <span class="product-card__category">{product.category_name.clone()}</span>
                <div class="product-card__rating">
                    <span class="product-card__stars">{star_glyphs(product.stars)}</span>
                    <span>{format_stars(product.stars)}</span>
                    <span class="product-card__reviews">{format!("({})", format_reviews(product.reviews))}</span>
                </div>
                <div class="product-card__footer">
                    <span class="product-card__price">{format_price(product.price)}</span>
                    {product.is_best_seller.then(|| view! { <span class="product-card__best">"Best Seller"</span> })}
                    <EcoBadge label=product.eco_label prediction=None/>
                </div>
            </div>
        </article>
    }
}
