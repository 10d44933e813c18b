//! JSON payloads returned by the cookie handlers

use serde::{Deserialize, Serialize};

/// `{message, success}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
    pub success: bool,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

/// Returned after the session cookie is issued.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookieIssuedResponse {
    pub message: String,
    pub success: bool,
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
    pub employee: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenVerifiedResponse {
    pub message: String,
    pub success: bool,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_response_field_names() {
        let body = serde_json::to_value(CookieIssuedResponse {
            message: "HTTP-only cookie set successfully".into(),
            success: true,
            redirect_url: "http://localhost:8083/auth/callback".into(),
            employee: "EMP123456".into(),
        })
        .expect("serializes");

        assert_eq!(
            body,
            serde_json::json!({
                "message": "HTTP-only cookie set successfully",
                "success": true,
                "redirectURL": "http://localhost:8083/auth/callback",
                "employee": "EMP123456",
            })
        );
    }

    #[test]
    fn test_failure_payload() {
        let body = serde_json::to_value(StatusResponse::failure("No access_token cookie found"))
            .expect("serializes");
        assert_eq!(
            body,
            serde_json::json!({"message": "No access_token cookie found", "success": false})
        );
    }
}
