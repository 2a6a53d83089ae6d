//! Product ingestion pipeline: remote fetch, CSV fallback, normalize, filter, paginate.
//!
//! ERROR HANDLING
//! ==============
//! Every ingestion failure is absorbed here. A failed remote fetch falls back
//! to the bundled dataset, a failed dataset load yields an empty list, and
//! callers always receive a (possibly empty) `ProductsPage`.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use super::csv_source::parse_csv;
use super::filters::{CategorySummary, category_summaries, filter_by_category, filter_by_search, paginate};
use super::normalize::normalize_records;
use super::product::Product;
use crate::net::api::{CatalogBackend, HttpBackend};
use crate::net::types::IngestError;

pub const DEFAULT_PAGE_LIMIT: usize = 1000;
pub const SEARCH_LIMIT: usize = 50;
pub const CATEGORY_LIMIT: usize = 100;
/// Upper bound used when the whole catalog is needed in one page.
pub const FULL_CATALOG_LIMIT: usize = 100_000;

/// Optional filters and paging for `ProductService::get_products`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQueryParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductQueryParams {
    fn default() -> Self {
        Self { category: None, search: None, page: 1, limit: DEFAULT_PAGE_LIMIT }
    }
}

/// One page of filtered products. `total` counts the filtered set before paging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Product access for pages, generic over the data source.
#[derive(Clone, Debug, Default)]
pub struct ProductService<B = HttpBackend> {
    backend: B,
}

impl<B: CatalogBackend> ProductService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    async fn load_remote(&self) -> Result<Vec<Product>, IngestError> {
        let records = self.backend.fetch_products().await?;
        Ok(normalize_records(&records))
    }

    async fn load_bundled(&self) -> Result<Vec<Product>, IngestError> {
        let text = self.backend.fetch_products_csv().await?;
        let records = parse_csv(&text);
        Ok(normalize_records(&records))
    }

    /// Every canonical product, from the API or else the bundled dataset.
    pub async fn load_all(&self) -> Vec<Product> {
        match self.load_remote().await {
            Ok(products) => products,
            Err(err) => {
                log::warn!("product API unavailable ({err}), loading bundled dataset");
                self.load_bundled().await.unwrap_or_else(|err| {
                    log::warn!("bundled dataset unavailable: {err}");
                    Vec::new()
                })
            }
        }
    }

    /// Fetch, filter, and page products. Never fails.
    pub async fn get_products(&self, params: ProductQueryParams) -> ProductsPage {
        let mut products = self.load_all().await;

        if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
            filter_by_category(&mut products, category);
        }
        if let Some(search) = params.search.as_deref().filter(|s| !s.is_empty()) {
            filter_by_search(&mut products, search);
        }

        ProductsPage {
            total: products.len(),
            products: paginate(&products, params.page, params.limit),
            page: params.page,
            limit: params.limit,
        }
    }

    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        let params = ProductQueryParams {
            search: Some(query.to_owned()),
            limit: SEARCH_LIMIT,
            ..ProductQueryParams::default()
        };
        self.get_products(params).await.products
    }

    pub async fn products_by_category(&self, category: &str) -> Vec<Product> {
        let params = ProductQueryParams {
            category: Some(category.to_owned()),
            limit: CATEGORY_LIMIT,
            ..ProductQueryParams::default()
        };
        self.get_products(params).await.products
    }

    /// Linear scan over the full catalog; the API has no single-item endpoint.
    ///
    /// # Errors
    ///
    /// Returns `IngestError::NotFound` when no product has identifier `id`.
    pub async fn find_product(&self, id: &str) -> Result<Product, IngestError> {
        let params = ProductQueryParams { limit: FULL_CATALOG_LIMIT, ..ProductQueryParams::default() };
        self.get_products(params)
            .await
            .products
            .into_iter()
            .find(|p| p.asin == id)
            .ok_or_else(|| IngestError::NotFound(id.to_owned()))
    }

    pub async fn product_by_id(&self, id: &str) -> Option<Product> {
        match self.find_product(id).await {
            Ok(product) => Some(product),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    /// Categories across the full catalog, most populated first.
    pub async fn categories(&self) -> Vec<CategorySummary> {
        let params = ProductQueryParams { limit: FULL_CATALOG_LIMIT, ..ProductQueryParams::default() };
        category_summaries(&self.get_products(params).await.products)
    }
}
