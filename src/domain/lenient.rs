use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::models::FinishStatus;

/// Accept strings, numbers and booleans as text; null becomes "".
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Accept a number or a numeric string; everything else becomes 0.
pub fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// `Result` column: the in-progress sentinel or any terminal value, read as text.
pub fn finish_status<'de, D>(deserializer: D) -> Result<FinishStatus, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(FinishStatus::from)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::text", default)]
        label: String,
        #[serde(deserialize_with = "super::seconds", default)]
        secs: f64,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_accepts_scalars() {
        assert_eq!(probe(r#"{"label": "abc"}"#).label, "abc");
        assert_eq!(probe(r#"{"label": 42}"#).label, "42");
        assert_eq!(probe(r#"{"label": null}"#).label, "");
        assert_eq!(probe(r#"{}"#).label, "");
    }

    #[test]
    fn test_seconds_degrade_to_zero() {
        assert_eq!(probe(r#"{"secs": 201.4}"#).secs, 201.4);
        assert_eq!(probe(r#"{"secs": " 99.5 "}"#).secs, 99.5);
        assert_eq!(probe(r#"{"secs": "n/a"}"#).secs, 0.0);
        assert_eq!(probe(r#"{"secs": null}"#).secs, 0.0);
    }
}
