//! Tolerant projection of model replies into the response entities.
//!
//! The model is asked for JSON but nothing guarantees it. A reply that is not
//! a JSON object never fails the request: it decodes to [`Decoded::Degraded`]
//! carrying the default projection, and the caller decides how to log it.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::identification::entities::{
    BarcodeResult, DataTagResult, DetectedItem, IdentificationResult, RetiredStatus,
    UNKNOWN_ITEM_NAME,
};

pub const RAW_RESPONSE_LIMIT: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Parsed(T),
    Degraded { fallback: T, error: String },
}

impl<T> Decoded<T> {
    pub fn into_value(self) -> T {
        match self {
            Decoded::Parsed(value) => value,
            Decoded::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Decoded::Degraded { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Decoded::Parsed(_) => None,
            Decoded::Degraded { error, .. } => Some(error),
        }
    }
}

/// First [`RAW_RESPONSE_LIMIT`] characters of the reply.
pub fn truncate_raw(raw: &str) -> String {
    match raw.char_indices().nth(RAW_RESPONSE_LIMIT) {
        Some((end, _)) => raw[..end].to_string(),
        None => raw.to_string(),
    }
}

pub fn decode_identification(raw: &str) -> Decoded<IdentificationResult> {
    let raw_response = Some(truncate_raw(raw));
    let fallback = |error: String| Decoded::Degraded {
        fallback: IdentificationResult {
            items: Vec::new(),
            raw_response: raw_response.clone(),
        },
        error,
    };

    let object = match parse_object(raw) {
        Ok(object) => object,
        Err(error) => return fallback(error),
    };

    let items = match object.get("items") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_object)
            .map(project_item)
            .collect(),
        Some(other) => return fallback(format!("'items' is not an array: {other}")),
    };

    Decoded::Parsed(IdentificationResult {
        items,
        raw_response,
    })
}

pub fn decode_data_tag(raw: &str) -> Decoded<DataTagResult> {
    let raw_response = Some(truncate_raw(raw));

    match parse_object(raw) {
        Ok(object) => Decoded::Parsed(DataTagResult {
            manufacturer: text(&object, "manufacturer"),
            brand: text(&object, "brand"),
            model_number: text(&object, "model_number"),
            serial_number: text(&object, "serial_number"),
            production_date: text(&object, "production_date"),
            estimated_value: amount(&object, "estimated_value"),
            additional_info: extras(&object, "additional_info"),
            raw_response,
        }),
        Err(error) => Decoded::Degraded {
            fallback: DataTagResult {
                raw_response,
                ..DataTagResult::default()
            },
            error,
        },
    }
}

pub fn decode_barcode(raw: &str) -> Decoded<BarcodeResult> {
    let raw_response = Some(truncate_raw(raw));

    match parse_object(raw) {
        Ok(object) => Decoded::Parsed(BarcodeResult {
            found: flag(&object, "found"),
            name: text(&object, "name"),
            description: text(&object, "description"),
            brand: text(&object, "brand"),
            model_number: text(&object, "model_number"),
            estimated_value: amount(&object, "estimated_value"),
            estimation_date: text(&object, "estimation_date"),
            category: text(&object, "category"),
            raw_response,
        }),
        Err(error) => Decoded::Degraded {
            fallback: BarcodeResult {
                raw_response,
                ..BarcodeResult::default()
            },
            error,
        },
    }
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(other) => Err(format!("expected a JSON object, got {}", kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn project_item(object: &Map<String, Value>) -> DetectedItem {
    DetectedItem {
        name: text(object, "name").unwrap_or_else(|| UNKNOWN_ITEM_NAME.to_string()),
        description: text(object, "description"),
        brand: text(object, "brand"),
        item_number: text(object, "item_number"),
        model_number: text(object, "model_number"),
        retired_status: text(object, "retired_status")
            .map(|status| RetiredStatus::from_model_text(&status)),
        estimated_value: amount(object, "estimated_value"),
        confidence: amount(object, "confidence").filter(|c| *c <= 1.0),
        estimation_date: text(object, "estimation_date"),
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("null")
}

/// String field; identifiers the model emits as bare numbers are kept as text.
fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !is_placeholder(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative number; accepts `"$1,250.00"` style strings.
fn amount(object: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = match object.get(key)? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let cleaned: String = strip_currency(s)
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            cleaned.parse::<f64>().ok()?
        }
        _ => return None,
    };

    (value.is_finite() && value >= 0.0).then_some(value)
}

const CURRENCY_CODE: &str = "USD";

/// Drops a `$` sign and a `USD` code (any case) from either end.
fn strip_currency(s: &str) -> &str {
    let mut s = s.trim().trim_start_matches('$').trim();

    let code_len = CURRENCY_CODE.len();
    let is_code =
        |part: Option<&str>| part.is_some_and(|p| p.eq_ignore_ascii_case(CURRENCY_CODE));

    if is_code(s.get(..code_len)) {
        s = s[code_len..].trim_start().trim_start_matches('$');
    }

    let split = s.len().saturating_sub(code_len);
    if s.len() >= code_len && is_code(s.get(split..)) {
        s = &s[..split];
    }

    s.trim()
}

fn flag(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn extras(object: &Map<String, Value>, key: &str) -> Option<BTreeMap<String, Value>> {
    let entries: BTreeMap<String, Value> = object
        .get(key)?
        .as_object()?
        .iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(s) => !is_placeholder(s),
            _ => true,
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    (!entries.is_empty()).then_some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identification_single_item_keeps_other_fields_absent() {
        let decoded = decode_identification(r#"{"items":[{"name":"Tavern","confidence":0.9}]}"#);
        assert!(!decoded.is_degraded());

        let result = decoded.into_value();
        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.name, "Tavern");
        assert_eq!(item.confidence, Some(0.9));
        assert_eq!(item, &DetectedItem {
            confidence: Some(0.9),
            ..DetectedItem::named("Tavern")
        });
    }

    #[test]
    fn test_identification_projects_every_field() {
        let raw = json!({
            "items": [{
                "name": "Dickens' Village Mill",
                "description": "Stone mill with water wheel",
                "brand": "Department 56",
                "item_number": "6519-6",
                "model_number": "65196",
                "retired_status": "Retired",
                "estimated_value": 120.5,
                "confidence": 0.75,
                "estimation_date": "12/16/24",
                "color": "grey"
            }]
        })
        .to_string();

        let item = decode_identification(&raw).into_value().items.remove(0);
        assert_eq!(item.name, "Dickens' Village Mill");
        assert_eq!(item.description.as_deref(), Some("Stone mill with water wheel"));
        assert_eq!(item.brand.as_deref(), Some("Department 56"));
        assert_eq!(item.item_number.as_deref(), Some("6519-6"));
        assert_eq!(item.model_number.as_deref(), Some("65196"));
        assert_eq!(item.retired_status, Some(RetiredStatus::Retired));
        assert_eq!(item.estimated_value, Some(120.5));
        assert_eq!(item.confidence, Some(0.75));
        assert_eq!(item.estimation_date.as_deref(), Some("12/16/24"));
    }

    #[test]
    fn test_identification_keeps_model_order() {
        let raw = r#"{"items":[{"name":"B"},{"name":"A"},{"name":"C"}]}"#;
        let names: Vec<String> = decode_identification(raw)
            .into_value()
            .items
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_identification_nulls_and_blanks_are_absent() {
        let raw = r#"{"items":[{"name":"Tavern","brand":null,"description":"","model_number":"null"}]}"#;
        let item = decode_identification(raw).into_value().items.remove(0);
        assert_eq!(item.brand, None);
        assert_eq!(item.description, None);
        assert_eq!(item.model_number, None);
    }

    #[test]
    fn test_identification_missing_name_defaults() {
        let item = decode_identification(r#"{"items":[{"brand":"Department 56"}]}"#)
            .into_value()
            .items
            .remove(0);
        assert_eq!(item.name, UNKNOWN_ITEM_NAME);
    }

    #[test]
    fn test_identification_empty_items() {
        let decoded = decode_identification(r#"{"items": []}"#);
        assert!(!decoded.is_degraded());
        assert!(decoded.into_value().items.is_empty());
    }

    #[test]
    fn test_identification_malformed_json_degrades_to_empty_list() {
        let decoded = decode_identification("Sure! Here are the items: [Tavern]");
        assert!(decoded.is_degraded());
        assert!(decoded.error().is_some());

        let result = decoded.into_value();
        assert!(result.items.is_empty());
        assert_eq!(
            result.raw_response.as_deref(),
            Some("Sure! Here are the items: [Tavern]")
        );
    }

    #[test]
    fn test_identification_non_array_items_degrades() {
        let decoded = decode_identification(r#"{"items": "Tavern"}"#);
        assert!(decoded.is_degraded());
        assert!(decoded.into_value().items.is_empty());
    }

    #[test]
    fn test_top_level_array_degrades() {
        assert!(decode_identification(r#"[{"name":"Tavern"}]"#).is_degraded());
        assert!(decode_barcode("[]").is_degraded());
    }

    #[test]
    fn test_raw_response_is_truncated_to_500_chars() {
        let raw = format!("{{\"items\": [{}", "é".repeat(800));
        let result = decode_identification(&raw).into_value();
        let kept = result.raw_response.unwrap();
        assert_eq!(kept.chars().count(), RAW_RESPONSE_LIMIT);
        assert!(raw.starts_with(&kept));
    }

    #[test]
    fn test_truncate_raw_short_input_untouched() {
        assert_eq!(truncate_raw("{}"), "{}");
        assert_eq!(truncate_raw(""), "");
    }

    #[test]
    fn test_amount_coercions() {
        let object = json!({
            "a": "$1,250.00",
            "b": "45 USD",
            "c": -3.0,
            "d": "priceless",
            "e": 12
        });
        let object = object.as_object().unwrap();
        assert_eq!(amount(object, "a"), Some(1250.0));
        assert_eq!(amount(object, "b"), Some(45.0));
        assert_eq!(amount(object, "c"), None);
        assert_eq!(amount(object, "d"), None);
        assert_eq!(amount(object, "e"), Some(12.0));
        assert_eq!(amount(object, "missing"), None);
    }

    #[test]
    fn test_amount_currency_code_any_case_either_end() {
        let object = json!({
            "upper_suffix": "45 USD",
            "lower_suffix": "45 usd",
            "mixed_suffix": "$45.50Usd",
            "upper_prefix": "USD 45",
            "lower_prefix": "usd $1,250",
            "code_only": "USD",
            "other_currency": "45 EUR"
        });
        let object = object.as_object().unwrap();
        assert_eq!(amount(object, "upper_suffix"), Some(45.0));
        assert_eq!(amount(object, "lower_suffix"), Some(45.0));
        assert_eq!(amount(object, "mixed_suffix"), Some(45.5));
        assert_eq!(amount(object, "upper_prefix"), Some(45.0));
        assert_eq!(amount(object, "lower_prefix"), Some(1250.0));
        assert_eq!(amount(object, "code_only"), None);
        assert_eq!(amount(object, "other_currency"), None);
    }

    #[test]
    fn test_confidence_out_of_range_is_absent() {
        let item = decode_identification(r#"{"items":[{"name":"Tavern","confidence":92}]}"#)
            .into_value()
            .items
            .remove(0);
        assert_eq!(item.confidence, None);
    }

    #[test]
    fn test_numeric_item_number_is_kept_as_text() {
        let item = decode_identification(r#"{"items":[{"name":"Tavern","item_number":55440}]}"#)
            .into_value()
            .items
            .remove(0);
        assert_eq!(item.item_number.as_deref(), Some("55440"));
    }

    #[test]
    fn test_unrecognized_retired_status_is_unknown() {
        let item =
            decode_identification(r#"{"items":[{"name":"Tavern","retired_status":"Discontinued"}]}"#)
                .into_value()
                .items
                .remove(0);
        assert_eq!(item.retired_status, Some(RetiredStatus::Unknown));
    }

    #[test]
    fn test_data_tag_projects_fields() {
        let raw = json!({
            "manufacturer": "Department 56, Inc.",
            "brand": "Heritage Village",
            "model_number": "5544-0",
            "serial_number": null,
            "production_date": "1995",
            "estimated_value": null,
            "additional_info": {
                "voltage": "120V",
                "wattage": null,
                "country": "Taiwan",
                "bulbs": 2
            }
        })
        .to_string();

        let result = decode_data_tag(&raw).into_value();
        assert_eq!(result.manufacturer.as_deref(), Some("Department 56, Inc."));
        assert_eq!(result.brand.as_deref(), Some("Heritage Village"));
        assert_eq!(result.model_number.as_deref(), Some("5544-0"));
        assert_eq!(result.serial_number, None);
        assert_eq!(result.production_date.as_deref(), Some("1995"));
        assert_eq!(result.estimated_value, None);

        let extras = result.additional_info.unwrap();
        assert_eq!(extras.len(), 3);
        assert_eq!(extras["voltage"], json!("120V"));
        assert_eq!(extras["bulbs"], json!(2));
        assert!(!extras.contains_key("wattage"));
        assert_eq!(result.raw_response.as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn test_data_tag_all_null_extras_are_absent() {
        let raw = r#"{"additional_info":{"voltage":null,"country":"null"}}"#;
        assert_eq!(decode_data_tag(raw).into_value().additional_info, None);
    }

    #[test]
    fn test_data_tag_malformed_json_degrades() {
        let decoded = decode_data_tag("```json\n{\"brand\": \"Lemax\"}\n```");
        assert!(decoded.is_degraded());
        let result = decoded.into_value();
        assert_eq!(result.brand, None);
        assert_eq!(result.manufacturer, None);
        assert!(result.raw_response.unwrap().starts_with("```json"));
    }

    #[test]
    fn test_barcode_not_found_leaves_fields_absent() {
        let decoded = decode_barcode(r#"{"found": false}"#);
        assert!(!decoded.is_degraded());
        assert_eq!(decoded.into_value(), BarcodeResult {
            raw_response: Some(r#"{"found": false}"#.to_string()),
            ..BarcodeResult::default()
        });
    }

    #[test]
    fn test_barcode_found_projects_fields() {
        let raw = json!({
            "found": true,
            "name": "Snow Village Church",
            "description": "Lit ceramic church",
            "brand": "Department 56",
            "model_number": "5028-0",
            "estimated_value": 65.0,
            "estimation_date": "01/02/25",
            "category": "Collectibles"
        })
        .to_string();

        let result = decode_barcode(&raw).into_value();
        assert!(result.found);
        assert_eq!(result.name.as_deref(), Some("Snow Village Church"));
        assert_eq!(result.description.as_deref(), Some("Lit ceramic church"));
        assert_eq!(result.brand.as_deref(), Some("Department 56"));
        assert_eq!(result.model_number.as_deref(), Some("5028-0"));
        assert_eq!(result.estimated_value, Some(65.0));
        assert_eq!(result.estimation_date.as_deref(), Some("01/02/25"));
        assert_eq!(result.category.as_deref(), Some("Collectibles"));
    }

    #[test]
    fn test_barcode_missing_found_is_false() {
        assert!(!decode_barcode(r#"{"name":"Mystery"}"#).into_value().found);
    }
}
