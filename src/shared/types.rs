use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope: `{success, data, count}` on success,
/// `{success: false, error}` on failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>) -> Self {
        Self {
            success: true,
            data,
            count: None,
            message,
            error: None,
            errors: None,
        }
    }

    pub fn error(message: String, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            count: None,
            message: None,
            error: Some(message),
            errors,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a list, filling `count` with its length
    pub fn collection(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::success(Some(items), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_carries_count() {
        let body = serde_json::to_value(ApiResponse::collection(vec![1, 2, 3])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        assert!(body.get("error").is_none());
    }

    #[test]
    fn error_envelope_has_no_data() {
        let body = serde_json::to_value(ApiResponse::<()>::error("nope".into(), None)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "nope");
        assert!(body.get("data").is_none());
    }
}
