//! Field deserializers for documents whose shape the server does not enforce.
//! Each one maps `null`, a missing value or the wrong type to a fallback
//! instead of rejecting the whole record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// Whole years from a number or a numeric string; anything else is 0.
pub fn whole_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let years = match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64)),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| *v >= 0.0)
            .map(|v| v as u64),
        _ => None,
    };
    Ok(years.and_then(|v| u32::try_from(v).ok()).unwrap_or(0))
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text.parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "text_or_empty")]
        text: String,
        #[serde(default, deserialize_with = "whole_years")]
        years: u32,
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    fn fields(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn nulls_and_missing_fields_fall_back() {
        let parsed = fields(json!({"text": null, "years": null, "at": null}));
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.years, 0);
        assert_eq!(parsed.at, None);

        let parsed = fields(json!({}));
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.years, 0);
        assert_eq!(parsed.at, None);
    }

    #[test]
    fn years_accept_numbers_and_numeric_strings() {
        assert_eq!(fields(json!({"years": 12})).years, 12);
        assert_eq!(fields(json!({"years": "5"})).years, 5);
        assert_eq!(fields(json!({"years": " 7 "})).years, 7);
        assert_eq!(fields(json!({"years": 3.9})).years, 3);
        assert_eq!(fields(json!({"years": "ten"})).years, 0);
        assert_eq!(fields(json!({"years": -2})).years, 0);
    }

    #[test]
    fn unparsable_timestamp_is_absent() {
        assert_eq!(fields(json!({"at": "yesterday"})).at, None);
        assert_eq!(fields(json!({"at": 1700000000})).at, None);
        assert!(fields(json!({"at": "2024-03-05T10:15:00.000Z"})).at.is_some());
    }
}
