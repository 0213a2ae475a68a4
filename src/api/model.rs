//! Amana API model types
//!
//! Wire shapes for the `/api/flowers` endpoint and the validated records
//! the rest of the application works with.

use std::collections::HashSet;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flower record after boundary validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerRecord {
    /// Backend identifier (`_id`), unique within one payload
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Image URI; `None` means the placeholder is shown
    pub image: Option<String>,
    /// Server-provided availability
    pub available: bool,
}

#[cfg(test)]
impl FlowerRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image: Option<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image,
            available,
        }
    }
}

/// Record exactly as it appears on the wire
///
/// Every field is kept as a raw `Value` so validation can report which
/// field of which record was wrong.
#[derive(Debug, Deserialize)]
struct RawFlower {
    #[serde(rename = "_id", default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    image: Option<Value>,
    #[serde(default)]
    available: Option<Value>,
}

impl RawFlower {
    fn validate(self) -> Result<FlowerRecord> {
        let id = match self.id {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.to_string(),
            Some(Value::Number(n)) => return Err(anyhow!("field '_id' is not an integer: {}", n)),
            Some(other) => return Err(anyhow!("field '_id' has unsupported value {}", other)),
            None => return Err(anyhow!("field '_id' is missing")),
        };

        let name = match self.name {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
            Some(Value::String(_)) => return Err(anyhow!("field 'name' is empty")),
            Some(other) => return Err(anyhow!("field 'name' is not a string: {}", other)),
            None => return Err(anyhow!("field 'name' is missing")),
        };

        let image = match self.image {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Some(other) => return Err(anyhow!("field 'image' is not a string: {}", other)),
        };

        // The backend omits `available` on records created before the flag existed
        let available = match self.available {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => b,
            Some(other) => return Err(anyhow!("field 'available' is not a boolean: {}", other)),
        };

        Ok(FlowerRecord {
            id,
            name,
            image,
            available,
        })
    }
}

/// Parse the `/api/flowers` response body into validated records
///
/// Response order is preserved. Any malformed record or a repeated `_id`
/// rejects the whole payload.
pub fn parse_flowers(json: &str) -> Result<Vec<FlowerRecord>> {
    let value: Value = serde_json::from_str(json).context("response is not valid JSON")?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(anyhow!(
                "expected a JSON array of flowers, got {}",
                json_kind(&other)
            ));
        }
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut flowers = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let raw: RawFlower = serde_json::from_value(item)
            .with_context(|| format!("flower #{} is not an object", index))?;
        let flower = raw
            .validate()
            .with_context(|| format!("flower #{} is invalid", index))?;

        if !seen.insert(flower.id.clone()) {
            return Err(anyhow!(
                "flower #{} repeats id '{}'",
                index,
                flower.id
            ));
        }
        flowers.push(flower);
    }

    Ok(flowers)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload_in_order() {
        let json = r#"[
            {"_id": "65a1", "name": "Rose", "image": "https://cdn.example/rose.webp", "available": true, "__v": 0},
            {"_id": "65a2", "name": "Tulip", "image": null, "available": false},
            {"_id": "65a3", "name": "Lily", "available": true}
        ]"#;

        let flowers = parse_flowers(json).unwrap();
        assert_eq!(flowers.len(), 3);
        assert_eq!(
            flowers[0],
            FlowerRecord::new(
                "65a1",
                "Rose",
                Some("https://cdn.example/rose.webp".to_string()),
                true
            )
        );
        assert_eq!(flowers[1].image, None);
        assert!(!flowers[1].available);
        assert_eq!(flowers[2].image, None);
        assert_eq!(flowers[2].name, "Lily");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_flowers("[]").unwrap().is_empty());
    }

    #[test]
    fn blank_image_means_placeholder() {
        let flowers = parse_flowers(r#"[{"_id": "1", "name": "Iris", "image": "   "}]"#).unwrap();
        assert_eq!(flowers[0].image, None);
    }

    #[test]
    fn numeric_ids_are_normalised() {
        let flowers = parse_flowers(r#"[{"_id": 42, "name": "Daisy", "available": true}]"#).unwrap();
        assert_eq!(flowers[0].id, "42");
    }

    #[test]
    fn missing_available_defaults_to_false() {
        let flowers = parse_flowers(r#"[{"_id": "1", "name": "Orchid"}]"#).unwrap();
        assert!(!flowers[0].available);
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_flowers(r#"{"flowers": []}"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_flowers("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn rejects_record_without_name() {
        let err = parse_flowers(r#"[{"_id": "1", "name": "  "}]"#).unwrap_err();
        assert!(format!("{:#}", err).contains("flower #0"));
    }

    #[test]
    fn rejects_record_without_id() {
        assert!(parse_flowers(r#"[{"name": "Rose", "available": true}]"#).is_err());
    }

    #[test]
    fn rejects_non_boolean_availability() {
        assert!(parse_flowers(r#"[{"_id": "1", "name": "Rose", "available": "yes"}]"#).is_err());
    }

    #[test]
    fn rejects_fractional_numeric_id() {
        assert!(parse_flowers(r#"[{"_id": 1.5e3, "name": "Tulip"}]"#).is_err());
        assert!(parse_flowers(r#"[{"_id": 2.5, "name": "Tulip"}]"#).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"_id": "1", "name": "Rose", "available": true},
            {"_id": "1", "name": "Peony", "available": false}
        ]"#;
        let err = parse_flowers(json).unwrap_err();
        assert!(err.to_string().contains("repeats id '1'"));
    }
}
