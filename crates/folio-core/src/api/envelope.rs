//! Response envelope normalization.
//!
//! The backend wraps payloads as `{ "message": ..., "data": ... }`, but some
//! endpoints name the payload after the entity instead (`projects`, `blog`,
//! `stats`, ...). `data` is treated as canonical and the named key as the
//! alternate shape, so callers only ever see the payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Canonical payload key
const DATA_KEY: &str = "data";

/// Pull the payload out of `body`, preferring `data` over `entity_key`.
/// JSON `null` counts as absent.
fn take_payload(body: Value, entity_key: &str) -> Option<Value> {
    let Value::Object(mut map) = body else {
        return None;
    };
    [DATA_KEY, entity_key]
        .into_iter()
        .filter_map(|key| map.remove(key))
        .find(|value| !value.is_null())
}

fn decode<T: DeserializeOwned>(payload: Value, entity_key: &str) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", entity_key, e)))
}

/// Single entity. A missing payload is an error.
pub fn extract<T: DeserializeOwned>(body: Value, entity_key: &str) -> Result<T, ApiError> {
    match take_payload(body, entity_key) {
        Some(payload) => decode(payload, entity_key),
        None => Err(ApiError::InvalidResponse(format!(
            "Response is missing '{}'",
            entity_key
        ))),
    }
}

/// Single entity that the backend may leave out (e.g. on delete).
pub fn extract_optional<T: DeserializeOwned>(
    body: Value,
    entity_key: &str,
) -> Result<Option<T>, ApiError> {
    take_payload(body, entity_key)
        .map(|payload| decode(payload, entity_key))
        .transpose()
}

/// List payload. A missing payload reads as an empty list.
pub fn extract_list<T: DeserializeOwned>(
    body: Value,
    list_key: &str,
) -> Result<Vec<T>, ApiError> {
    Ok(extract_optional(body, list_key)?.unwrap_or_default())
}

/// The envelope's `message`, if any.
pub fn message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_data_and_named_shapes_agree() {
        let canonical = json!({"message": "ok", "data": [1, 2, 3]});
        let named = json!({"message": "ok", "projects": [1, 2, 3]});

        let a: Vec<u32> = extract_list(canonical, "projects").unwrap();
        let b: Vec<u32> = extract_list(named, "projects").unwrap();
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_data_wins_over_named_key() {
        let body = json!({"data": "canonical", "blog": "alternate"});
        let value: String = extract(body, "blog").unwrap();
        assert_eq!(value, "canonical");
    }

    #[test]
    fn test_null_data_falls_through() {
        let body = json!({"data": null, "stats": 7});
        let value: u32 = extract(body, "stats").unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_missing_payload() {
        let list: Vec<u32> = extract_list(json!({"message": "none"}), "blogs").unwrap();
        assert!(list.is_empty());

        let single: Result<u32, _> = extract(json!({"message": "none"}), "blog");
        assert!(matches!(single, Err(ApiError::InvalidResponse(_))));

        let optional: Option<u32> =
            extract_optional(json!({"message": "deleted"}), "project").unwrap();
        assert_eq!(optional, None);

        let not_object: Vec<u32> = extract_list(Value::Null, "blogs").unwrap();
        assert!(not_object.is_empty());
    }

    #[test]
    fn test_wrong_payload_type() {
        let err = extract::<u32>(json!({"data": "nope"}), "stats").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse stats"));
    }

    #[test]
    fn test_message() {
        assert_eq!(message(&json!({"message": "Created"})), Some("Created"));
        assert_eq!(message(&json!([])), None);
    }
}
