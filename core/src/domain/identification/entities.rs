use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RetiredStatus {
    Active,
    Retired,
    Unknown,
}

impl RetiredStatus {
    /// Case-insensitive match on the three documented values. Anything else
    /// the model writes is reported as `Unknown`.
    pub fn from_model_text(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => RetiredStatus::Active,
            "retired" => RetiredStatus::Retired,
            _ => RetiredStatus::Unknown,
        }
    }
}

/// A collectible recognized in an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedItem {
    /// Clear, specific name for the item
    #[schema(example = "Tavern")]
    pub name: String,
    /// Brief description including color, size or notable features
    pub description: Option<String>,
    /// Brand or manufacturer if identifiable
    pub brand: Option<String>,
    /// Official Department 56 item number or SKU
    #[schema(example = "5544-0")]
    pub item_number: Option<String>,
    /// Model number if different from the item number
    pub model_number: Option<String>,
    pub retired_status: Option<RetiredStatus>,
    /// Approximate value in USD
    #[schema(example = 45.0)]
    pub estimated_value: Option<f64>,
    /// Confidence in the identification, 0.0 to 1.0
    #[schema(example = 0.92)]
    pub confidence: Option<f64>,
    /// Date the value was estimated, MM/DD/YY
    #[schema(example = "12/16/24")]
    pub estimation_date: Option<String>,
}

impl DetectedItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            brand: None,
            item_number: None,
            model_number: None,
            retired_status: None,
            estimated_value: None,
            confidence: None,
            estimation_date: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdentificationResult {
    pub items: Vec<DetectedItem>,
    /// First 500 characters of the model reply, for debugging
    pub raw_response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DataTagResult {
    pub manufacturer: Option<String>,
    pub brand: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub production_date: Option<String>,
    pub estimated_value: Option<f64>,
    /// Extra label fields such as voltage, wattage or country of origin
    #[schema(value_type = Option<Object>)]
    pub additional_info: Option<BTreeMap<String, serde_json::Value>>,
    pub raw_response: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BarcodeResult {
    pub found: bool,
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub model_number: Option<String>,
    pub estimated_value: Option<f64>,
    pub estimation_date: Option<String>,
    pub category: Option<String>,
    pub raw_response: Option<String>,
}
