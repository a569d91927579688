use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// PartRecord
// ────────────────────────────────────────────────────────────────────────────

/// A single PMIC catalog entry.
///
/// All descriptor fields are free text carried verbatim from the catalog
/// source. A field that is absent or `null` in the source deserializes to
/// the empty string; queries treat the empty string as "unknown", never as
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Primary identifier: the display name and the sole search key.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference: String,
    /// Supply-voltage descriptor (e.g. `"3.8V"`, `"VBAT"`, or the `"x"` /
    /// `"none"` sentinels).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub vcc: String,
    /// I2C clock-line descriptor.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scl: String,
    /// I2C data-line descriptor.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sda: String,
    /// Legacy explicit model name. Superseded by the derived [`model_key`]
    /// and not consulted by any query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PartRecord {
    /// Derived model key of this record (see [`model_key`]).
    pub fn model_key(&self) -> String {
        model_key(&self.reference)
    }
}

/// Derive the model key from a part reference: the first four characters,
/// trimmed of surrounding whitespace. A reference shorter than four
/// characters yields the whole trimmed string.
pub fn model_key(reference: &str) -> String {
    let prefix: String = reference.chars().take(4).collect();
    prefix.trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Pin status
// ────────────────────────────────────────────────────────────────────────────

/// Classification of a supply or signal-line descriptor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinStatus {
    /// Empty value, displayed as "n/a".
    Unknown,
    /// The `"x"` sentinel (case-insensitive exact match) or any value
    /// containing `"none"` (case-insensitive).
    Inactive,
    /// Any other non-empty value.
    Active,
}

impl PinStatus {
    /// Classify a raw descriptor value.
    pub fn classify(value: &str) -> Self {
        if value.is_empty() {
            return PinStatus::Unknown;
        }
        let lower = value.to_lowercase();
        if lower == "x" || lower.contains("none") {
            PinStatus::Inactive
        } else {
            PinStatus::Active
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, PinStatus::Active)
    }
}

/// Whether a record's `vcc` value counts as supply-pin information:
/// non-empty and not containing `"none"` (case-insensitive).
///
/// Unlike [`PinStatus::classify`], the `"x"` sentinel still counts here.
/// The two predicates are deliberately separate.
pub fn has_pin_info(vcc: &str) -> bool {
    !vcc.is_empty() && !vcc.to_lowercase().contains("none")
}
