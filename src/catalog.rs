//! Catalog loading and queries.
//!
//! A [`Catalog`] is an ordered, immutable sequence of [`PartRecord`]s,
//! built exactly once at startup from the dataset bundled into the binary
//! or from an external JSON file. Every query is a pure linear scan over
//! the sequence; nothing here mutates after construction.

use crate::model::PartRecord;
use anyhow::{Context, Result};
use camino::Utf8Path;
use std::collections::BTreeSet;

/// Catalog JSON embedded into the binary at compile time.
const BUNDLED_JSON: &str = include_str!("../data/pmic.json");

/// An immutable, ordered collection of PMIC part records.
///
/// Construct once, then hand out by reference to the presentation layer.
/// There is no mutating operation and no interior mutability.
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<PartRecord>,
}

impl Catalog {
    /// Wrap an already-built record sequence, preserving its order.
    pub fn new(parts: Vec<PartRecord>) -> Self {
        Self { parts }
    }

    /// Parse the dataset bundled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_JSON).context("Failed to parse bundled catalog")
    }

    /// Parse a catalog from a JSON array of part records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parts: Vec<PartRecord> =
            serde_json::from_str(json).context("Catalog is not a JSON array of part records")?;
        Ok(Self::new(parts))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path.as_str())
            .with_context(|| format!("Failed to read {}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Failed to parse {}", path))
    }

    /// All records, in catalog order.
    pub fn parts(&self) -> &[PartRecord] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Find every record whose reference contains `term` and starts with
    /// `model_prefix`, both compared case-insensitively. An empty `term` or
    /// `model_prefix` matches everything. The returned slice of matches
    /// keeps the catalog order (a stable sub-sequence, never re-sorted).
    pub fn search(&self, term: &str, model_prefix: &str) -> Vec<&PartRecord> {
        let term = term.to_lowercase();
        let prefix = model_prefix.to_lowercase();
        self.parts
            .iter()
            .filter(|part| {
                let reference = part.reference.to_lowercase();
                reference.contains(&term) && reference.starts_with(&prefix)
            })
            .collect()
    }

    /// The derived model key of every record, deduplicated, in ascending
    /// code-point order. Records with an empty reference contribute the
    /// empty key; no filtering is applied.
    pub fn model_keys(&self) -> Vec<String> {
        let keys: BTreeSet<String> = self.parts.iter().map(|part| part.model_key()).collect();
        keys.into_iter().collect()
    }
}
