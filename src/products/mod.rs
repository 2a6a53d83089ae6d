//! Product domain: canonical records and the ingestion pipeline.
//!
//! ARCHITECTURE
//! ============
//! `service` fetches raw records through `net::api::CatalogBackend`, falling
//! back to `csv_source` for the bundled dataset. `normalize` maps either shape
//! into `product::Product`; `filters` handles query filters, paging, sorting,
//! and category counts. `prediction` covers the detail view's eco label.

pub mod csv_source;
pub mod filters;
pub mod normalize;
pub mod prediction;
pub mod product;
pub mod service;

pub use product::{EcoLabel, EcoPrediction, Product};
pub use service::{ProductQueryParams, ProductService, ProductsPage};
