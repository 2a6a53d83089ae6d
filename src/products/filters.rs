//! Query filtering, pagination, and the search page's client-side refinements.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::collections::HashMap;
use std::str::FromStr;

use super::product::Product;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 9999.0;

// =============================================================================
// QUERY FILTERS
// =============================================================================

/// Keep products whose category equals `category`, ignoring case.
pub fn filter_by_category(products: &mut Vec<Product>, category: &str) {
    let wanted = category.to_lowercase();
    products.retain(|p| p.category_name.to_lowercase() == wanted);
}

/// Keep products whose title or category contains `query`, ignoring case.
pub fn filter_by_search(products: &mut Vec<Product>, query: &str) {
    let needle = query.to_lowercase();
    products.retain(|p| p.title.to_lowercase().contains(&needle) || p.category_name.to_lowercase().contains(&needle));
}

/// One page of `products`; page numbers start at 1 and page 0 reads as page 1.
pub fn paginate(products: &[Product], page: usize, limit: usize) -> Vec<Product> {
    let start = page.max(1).saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(products.len());
    products.get(start..end).map(<[Product]>::to_vec).unwrap_or_default()
}

// =============================================================================
// SORTING
// =============================================================================

/// Sort orders offered on the search page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    StarsAsc,
    StarsDesc,
    ReviewsAsc,
    ReviewsDesc,
    BestSellersFirst,
}

impl SortKey {
    pub const ALL: [Self; 7] = [
        Self::PriceAsc,
        Self::PriceDesc,
        Self::StarsAsc,
        Self::StarsDesc,
        Self::ReviewsAsc,
        Self::ReviewsDesc,
        Self::BestSellersFirst,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::StarsAsc => "stars_asc",
            Self::StarsDesc => "stars_desc",
            Self::ReviewsAsc => "reviews_asc",
            Self::ReviewsDesc => "reviews_desc",
            Self::BestSellersFirst => "bestseller",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::StarsAsc => "Rating: Low to High",
            Self::StarsDesc => "Rating: High to Low",
            Self::ReviewsAsc => "Reviews: Low to High",
            Self::ReviewsDesc => "Reviews: High to Low",
            Self::BestSellersFirst => "Best Sellers First",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| format!("unknown sort key: {raw}"))
    }
}

/// Stable sort; ties keep their incoming order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::StarsAsc => products.sort_by(|a, b| a.stars.total_cmp(&b.stars)),
        SortKey::StarsDesc => products.sort_by(|a, b| b.stars.total_cmp(&a.stars)),
        SortKey::ReviewsAsc => products.sort_by_key(|p| p.reviews),
        SortKey::ReviewsDesc => products.sort_by_key(|p| std::cmp::Reverse(p.reviews)),
        SortKey::BestSellersFirst => products.sort_by_key(|p| !p.is_best_seller),
    }
}

// =============================================================================
// REFINEMENTS
// =============================================================================

/// Filter bar state applied on top of pipeline output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductFilters {
    pub only_best_sellers: bool,
    /// Inclusive `(min, max)` price bounds.
    pub price_range: (f64, f64),
    pub min_stars: f64,
    pub sort: Option<SortKey>,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            only_best_sellers: false,
            price_range: (DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE),
            min_stars: 0.0,
            sort: None,
        }
    }
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        let (min_price, max_price) = self.price_range;
        if self.only_best_sellers && !product.is_best_seller {
            return false;
        }
        if product.price < min_price || product.price > max_price {
            return false;
        }
        product.stars >= self.min_stars
    }

    /// Filter then sort, leaving the input untouched.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut refined: Vec<Product> = products.iter().filter(|p| self.matches(p)).cloned().collect();
        if let Some(key) = self.sort {
            sort_products(&mut refined, key);
        }
        refined
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// A category and how many products it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub product_count: usize,
}

/// Count products per category, most populated first; ties keep first-seen order.
pub fn category_summaries(products: &[Product]) -> Vec<CategorySummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for product in products {
        let name = product.category_name.trim();
        let name = if name.is_empty() { super::product::UNCATEGORIZED } else { name };
        if let Some(&slot) = index.get(name) {
            summaries[slot].product_count += 1;
        } else {
            index.insert(name, summaries.len());
            summaries.push(CategorySummary { name: name.to_owned(), product_count: 1 });
        }
    }
    summaries.sort_by_key(|s| std::cmp::Reverse(s.product_count));
    summaries
}
