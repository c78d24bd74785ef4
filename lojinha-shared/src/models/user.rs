use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Global role assignments for a portal account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Staff,
}

impl UserRole {
    /// Return the canonical string representation expected by the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            _ => Err("unknown user role"),
        }
    }
}

/// Represents a portal user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's full display name.
    pub name: String,

    /// The user's login name.
    pub username: String,

    /// The user's email address.
    pub email: String,

    /// The user's role within the portal.
    pub role: UserRole,
}

/// Request to authenticate with username/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's login name.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Response to a successful credential check. The session is not yet
/// authenticated at this point; the returned id feeds the MFA step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Identifier of the user awaiting MFA verification.
    pub id: uuid::Uuid,
}

/// Request carrying the six-digit MFA code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MfaRequest {
    /// The numeric verification code.
    pub code: String,
}

/// Response to a successful MFA verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MfaResponse {
    /// The now-authenticated user.
    pub user: User,
}

/// Response to a session-validation probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    /// The user the session cookie belongs to.
    pub user: User,
}

/// Request to register a new portal account. Privileged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// The new account's login name.
    pub username: String,

    /// The new account's password.
    pub password: String,

    /// The new account's full display name.
    pub name: String,

    /// The new account's email address.
    pub email: String,
}

/// Request to update an existing user's editable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// The user's full display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The user's login name.
    pub username: String,
}

/// Request to begin password recovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    /// The email the recovery code is sent to.
    pub email: String,
}

/// Response to a recovery request; the id feeds the code-verification step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordResponse {
    /// Identifier of the user recovering their password.
    pub id: uuid::Uuid,
}

/// Request carrying a one-time recovery code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecoveryCodeRequest {
    /// The numeric recovery code.
    pub code: String,
}

/// Outcome of a recovery-code check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecoveryCodeResponse {
    /// Whether the submitted code matched.
    pub valid: bool,
}

/// Request to set a new password after code verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    /// Identifier of the user whose password changes.
    pub user_id: uuid::Uuid,

    /// The new password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            role: UserRole::Staff,
        }
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = sample_user();
        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
    }

    #[test]
    fn test_role_serializes_snake_case() {
        let user = User {
            role: UserRole::Admin,
            ..sample_user()
        };
        let serialized = serde_json::to_string(&user).unwrap();
        assert!(serialized.contains("\"role\":\"admin\""));
    }

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [("admin", UserRole::Admin), ("staff", UserRole::Staff)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("guest").is_err());
    }

    #[test]
    fn test_login_response_carries_pending_id() {
        let json = r#"{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.id,
            Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap()
        );
    }

    #[test]
    fn test_recovery_code_response() {
        let valid: RecoveryCodeResponse = serde_json::from_str(r#"{"valid":true}"#).unwrap();
        assert!(valid.valid);
        let invalid: RecoveryCodeResponse = serde_json::from_str(r#"{"valid":false}"#).unwrap();
        assert!(!invalid.valid);
    }
}
