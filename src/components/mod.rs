//! Presentational components shared by the storefront pages.

pub mod category_grid;
pub mod chat_assistant;
pub mod eco_badge;
pub mod filter_bar;
pub mod header;
pub mod product_card;
pub mod product_detail;
pub mod product_grid;
