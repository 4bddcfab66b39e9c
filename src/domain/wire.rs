//! Serde helpers for loosely typed backend payloads

use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, a number or null and yields an optional string.
///
/// Identifiers come back from the backend either as integers or as strings
/// depending on the table they were read from.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Treats empty or whitespace-only strings as absent.
pub fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional_string_or_number")]
        id: Option<String>,
        #[serde(default, deserialize_with = "non_empty_string")]
        name: Option<String>,
    }

    #[test]
    fn test_id_from_number() -> serde_json::Result<()> {
        let probe: Probe = serde_json::from_str(r#"{"id": 42}"#)?;
        assert_eq!(probe.id.as_deref(), Some("42"));
        Ok(())
    }

    #[test]
    fn test_id_from_string() -> serde_json::Result<()> {
        let probe: Probe = serde_json::from_str(r#"{"id": " abc "}"#)?;
        assert_eq!(probe.id.as_deref(), Some("abc"));
        Ok(())
    }

    #[test]
    fn test_id_null_and_missing() -> serde_json::Result<()> {
        let probe: Probe = serde_json::from_str(r#"{"id": null}"#)?;
        assert_eq!(probe.id, None);
        let probe: Probe = serde_json::from_str("{}")?;
        assert_eq!(probe.id, None);
        Ok(())
    }

    #[test]
    fn test_id_rejects_objects() {
        let result = serde_json::from_str::<Probe>(r#"{"id": {"nested": true}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_name_is_none() -> serde_json::Result<()> {
        let probe: Probe = serde_json::from_str(r#"{"name": "   "}"#)?;
        assert_eq!(probe.name, None);
        Ok(())
    }
}
