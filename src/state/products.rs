//! Product-list state for search and category pages.
//!
//! DESIGN
//! ======
//! Each load takes a sequence number from `begin_request`. Only the latest
//! sequence may write results, so a slow response for a superseded query
//! cannot overwrite a newer one.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::products::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub request_seq: u64,
}

impl ProductsState {
    /// Start a load and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    /// Store results for `seq`; returns `false` when a newer request superseded it.
    pub fn finish_request(&mut self, seq: u64, items: Vec<Product>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }
}
