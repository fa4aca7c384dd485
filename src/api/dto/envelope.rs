//! Uniform success envelope wrapping every API response body.

use serde::Serialize;

/// The success envelope: `{"success": true, "data": ..., "count"?: n}`.
///
/// `count` is present only on list responses. Failures never use this type;
/// they are produced exclusively by [`crate::error::AppError`], so
/// `success: true` / `success: false` are mutually exclusive and exhaustive
/// across the whole API.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub data: T,
}

impl<T: Serialize> ApiEnvelope<T> {
    /// Envelope for a single entity (no count).
    pub fn one(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data,
        }
    }
}

impl<T: Serialize> ApiEnvelope<Vec<T>> {
    /// Envelope for a list response, with `count` set to the result size.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_envelope_has_no_count() {
        let envelope = ApiEnvelope::one(json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("count").is_none());
    }

    #[test]
    fn test_list_envelope_counts_items() {
        let envelope = ApiEnvelope::list(vec![json!({"id": 1}), json!({"id": 2})]);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["count"], 2);
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_list_envelope() {
        let envelope = ApiEnvelope::list(Vec::<serde_json::Value>::new());
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["count"], 0);
        assert!(value["data"].as_array().unwrap().is_empty());
    }
}
