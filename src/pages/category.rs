//! Products in a single category.

use leptos::prelude::*;

use crate::pages::listing::{ListingSource, ProductListing};

#[component]
pub fn CategoryPage(category: String) -> impl IntoView {
    let title = category.clone();
    view! { <ProductListing source=ListingSource::Category(category) title=title/> }
}
