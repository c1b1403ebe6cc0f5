//! Shared API response types.

use serde::Serialize;

/// Success body carrying a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_message_shape() {
        let body = serde_json::to_value(MessageResponse::ok("done")).unwrap();
        assert_eq!(body, serde_json::json!({ "success": true, "message": "done" }));
    }
}
