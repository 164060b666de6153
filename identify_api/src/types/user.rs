//! Request and response bodies for the `/users` endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /users/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nickname: String,
    pub email: String,
    pub password: String, // Plain text
}

/// Body of `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address or nickname.
    pub identifier: String,
    pub password: String, // Plain text
}

impl LoginRequest {
    /// How the server will look this identifier up.
    pub fn identifier_kind(&self) -> IdentifierKind {
        IdentifierKind::of(&self.identifier)
    }
}

/// Body returned by the register and login endpoints.
///
/// Every field is optional: the server omits the token and user fields on a
/// rejected login and only sets `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,

    /// Bearer token to pass to `verify`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Typed view of a register or login payload.
    ///
    /// Returns `None` when the payload is not a JSON object of this shape,
    /// e.g. an empty body or plain text.
    pub fn from_payload(payload: &serde_json::Value) -> Option<Self> {
        if !payload.is_object() {
            return None;
        }
        Self::deserialize(payload).ok()
    }
}

/// Whether a login identifier is an email address or a nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Email,
    Nickname,
}

impl IdentifierKind {
    /// Anything containing `@` is looked up by email, the rest by nickname.
    pub fn of(identifier: &str) -> Self {
        if identifier.contains('@') {
            IdentifierKind::Email
        } else {
            IdentifierKind::Nickname
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IdentifierKind::Email => "email",
                IdentifierKind::Nickname => "nickname",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_kind_by_at_sign() {
        assert_eq!(IdentifierKind::of("alice@example.com"), IdentifierKind::Email);
        assert_eq!(IdentifierKind::of("alice"), IdentifierKind::Nickname);
        assert_eq!(IdentifierKind::of(""), IdentifierKind::Nickname);
        assert_eq!(IdentifierKind::Email.to_string(), "email");
    }

    #[test]
    fn login_request_field_names() {
        let req = LoginRequest {
            identifier: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"identifier": "alice", "password": "secret"})
        );
        assert_eq!(req.identifier_kind(), IdentifierKind::Nickname);
    }

    #[test]
    fn auth_response_rejected_login() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Wrong password"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("Wrong password"));
        assert!(resp.token.is_none());
        assert!(resp.user_id.is_none());
    }

    #[test]
    fn auth_response_from_payload() {
        let payload = serde_json::json!({"success": true, "token": "t", "userId": 7});
        let resp = AuthResponse::from_payload(&payload).unwrap();
        assert_eq!(resp.user_id, Some(7));
        assert_eq!(resp.token.as_deref(), Some("t"));

        assert_eq!(AuthResponse::from_payload(&serde_json::Value::Null), None);
        assert_eq!(
            AuthResponse::from_payload(&serde_json::json!("Login OK")),
            None
        );
        assert_eq!(
            AuthResponse::from_payload(&serde_json::json!({"userId": "not a number"})),
            None
        );
    }
}
