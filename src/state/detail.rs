//! Product-detail view state: the selected product and its eco prediction.
//!
//! A prediction belongs to exactly one selection; choosing another product
//! drops it and any late result for the old product is ignored.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::products::prediction::PredictionOutcome;
use crate::products::{EcoPrediction, Product};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub selected: Option<Product>,
    pub prediction: Option<EcoPrediction>,
    pub recommendations: Vec<Product>,
    pub loading: bool,
    pub selection_seq: u64,
}

impl DetailState {
    /// Show `product` and start a prediction; returns the selection sequence.
    pub fn select(&mut self, product: Product) -> u64 {
        self.selected = Some(product);
        self.prediction = None;
        self.recommendations.clear();
        self.loading = true;
        self.selection_seq += 1;
        self.selection_seq
    }

    /// Apply a prediction if `seq` is still the current selection.
    pub fn apply_prediction(&mut self, seq: u64, outcome: PredictionOutcome) -> bool {
        if seq != self.selection_seq || self.selected.is_none() {
            return false;
        }
        self.prediction = Some(outcome.prediction);
        self.recommendations = outcome.recommendations;
        self.loading = false;
        true
    }

    /// Return to the result list.
    pub fn clear(&mut self) {
        self.selected = None;
        self.prediction = None;
        self.recommendations.clear();
        self.loading = false;
        self.selection_seq += 1;
    }
}
