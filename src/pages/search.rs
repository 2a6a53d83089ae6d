//! Search results page.

use leptos::prelude::*;

use crate::pages::listing::{ListingSource, ProductListing};

#[component]
pub fn SearchPage(query: String) -> impl IntoView {
    let title = format!("Results for \"{query}\"");
    view! { <ProductListing source=ListingSource::Search(query) title=title show_filters=true/> }
}
