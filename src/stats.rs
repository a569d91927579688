//! Aggregate statistics over a catalog.

use crate::catalog::Catalog;
use crate::model::{PinStatus, has_pin_info};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

/// Maximum number of entries in [`StatsSummary::top_models`].
pub const TOP_MODEL_LIMIT: usize = 5;

/// Number of records grouped under one derived model key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCount {
    pub model: String,
    pub count: usize,
}

/// Catalog-wide aggregate counts.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    /// Total number of records.
    pub total: usize,
    /// Distinct full reference strings (not distinct model keys).
    pub unique_references: usize,
    /// Records whose SCL descriptor classifies as active.
    pub active_scl: usize,
    /// Records whose SDA descriptor classifies as active.
    pub active_sda: usize,
    /// Records with supply-pin information (see [`has_pin_info`]).
    pub with_pin_info: usize,
    /// The most common derived model keys, descending by count, at most
    /// [`TOP_MODEL_LIMIT`] entries. Ties keep first-encounter order.
    pub top_models: Vec<ModelCount>,
}

impl Catalog {
    /// Compute aggregate statistics in a single pass over the catalog.
    pub fn stats(&self) -> StatsSummary {
        let mut references: HashSet<&str> = HashSet::new();
        let mut model_counts: IndexMap<String, usize> = IndexMap::new();
        let mut active_scl = 0;
        let mut active_sda = 0;
        let mut with_pin_info = 0;

        for part in self.parts() {
            references.insert(part.reference.as_str());
            if PinStatus::classify(&part.scl).is_active() {
                active_scl += 1;
            }
            if PinStatus::classify(&part.sda).is_active() {
                active_sda += 1;
            }
            if has_pin_info(&part.vcc) {
                with_pin_info += 1;
            }
            *model_counts.entry(part.model_key()).or_insert(0) += 1;
        }

        // Stable sort: equal counts keep the IndexMap insertion order,
        // i.e. the order the keys were first seen in the catalog.
        let mut top_models: Vec<ModelCount> = model_counts
            .into_iter()
            .map(|(model, count)| ModelCount { model, count })
            .collect();
        top_models.sort_by(|a, b| b.count.cmp(&a.count));
        top_models.truncate(TOP_MODEL_LIMIT);

        StatsSummary {
            total: self.len(),
            unique_references: references.len(),
            active_scl,
            active_sda,
            with_pin_info,
            top_models,
        }
    }
}

/// Percentage of `count` over `total`, or `None` when `total` is zero so
/// that callers render "n/a" instead of dividing by zero.
pub fn percentage(count: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(count as f64 * 100.0 / total as f64)
    }
}
