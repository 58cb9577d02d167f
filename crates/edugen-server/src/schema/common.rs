//! The fixed response envelope shared by every operation.

use serde::Serialize;

/// Standard API response envelope.
///
/// Every operation returns this shape regardless of outcome. Invariant:
/// `success == true` implies `data` holds successfully parsed structured
/// content; `success == false` implies `error` is non-empty and `data`, if
/// present at all, carries only `{"raw_response": <text>}` for caller-side
/// debugging.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    /// Whether the operation produced trustworthy structured data.
    pub success: bool,
    /// Payload on success; raw provider text on a content-parse failure;
    /// absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable summary of the outcome.
    pub message: String,
    /// Detailed error description; `null` exactly when `success` is true.
    pub error: Option<String>,
}

impl ApiResponse {
    /// A successful envelope. `error` is always `null` here.
    pub fn ok(data: serde_json::Value, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }

    /// A failure envelope with no payload.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(error.into()),
        }
    }

    /// A content-parse failure carrying the raw provider text verbatim.
    pub fn failure_with_raw(
        message: impl Into<String>,
        error: impl Into<String>,
        raw_response: String,
    ) -> Self {
        ApiResponse {
            success: false,
            data: Some(serde_json::json!({ "raw_response": raw_response })),
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_has_null_error() {
        let body = serde_json::to_value(ApiResponse::ok(
            serde_json::json!({"lesson_plan": []}),
            "Lesson plan generated successfully",
        ))
        .unwrap();
        assert_eq!(body["success"], true);
        assert!(body["error"].is_null());
        assert_eq!(body["data"]["lesson_plan"], serde_json::json!([]));
    }

    #[test]
    fn failure_envelope_omits_data() {
        let body =
            serde_json::to_value(ApiResponse::failure("Failed", "transport error")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "transport error");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn raw_failure_carries_verbatim_text() {
        let body = serde_json::to_value(ApiResponse::failure_with_raw(
            "Failed to parse AI response",
            "could not parse response as JSON",
            "not json at all".to_string(),
        ))
        .unwrap();
        assert_eq!(body["data"]["raw_response"], "not json at all");
        assert_eq!(body["success"], false);
    }
}
