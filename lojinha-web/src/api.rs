use once_cell::unsync::OnceCell;
use reqwest::{Client, Response, StatusCode};
use shared::models::{
    ErrorResponse, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse,
    MfaRequest, MfaResponse, RecoveryCodeRequest, RecoveryCodeResponse, ResetPasswordRequest,
    SessionResponse, SignupRequest, UpdateUserRequest, User,
};
use uuid::Uuid;

use crate::config::FrontendConfig;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Response bodies carrying this marker are treated like an HTTP 401: the
/// local session is gone regardless of what the status line said. The API
/// emits it as `Token inválido` (sometimes with trailing punctuation), so
/// the match is case-insensitive substring.
const INVALID_TOKEN_SIGNAL: &str = "token inválido";

thread_local! {
    static SHARED_CLIENT: OnceCell<LojinhaClient> = const { OnceCell::new() };
}

/// Failure of an API call, already separated into the cases callers
/// handle differently.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The session cookie is missing, expired, or revoked.
    #[error("session invalidated")]
    Unauthorized,
    /// The server rejected the request with a structured message.
    #[error("{0}")]
    Server(ErrorResponse),
    /// Transport failure or a non-2xx response without a usable body.
    #[error("network error: {0}")]
    Network(String),
}

/// Whether a message signals a dead session even under a non-401 status.
pub fn is_invalid_token_signal(message: &str) -> bool {
    message.to_lowercase().contains(INVALID_TOKEN_SIGNAL)
}

/// Whether a raw response body carries the invalid-token marker. A
/// structured `{message}` body is checked on its message; anything else
/// falls back to a plain substring scan of the body text.
fn body_signals_invalid_token(body: &str) -> bool {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => is_invalid_token_signal(&parsed.message),
        Err(_) => is_invalid_token_signal(body),
    }
}

/// Lightweight API client for the storefront and portal endpoints.
///
/// All requests go to the same origin the app was served from, so the
/// HTTP-only session cookie rides along automatically; client code never
/// reads it.
#[derive(Clone, Debug)]
pub struct LojinhaClient {
    base_url: String,
    client: Client,
}

impl LojinhaClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(&default_base_url())).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Apply the shared response rules and hand back the raw body of a
    /// successful response. A 401 maps to `ApiError::Unauthorized`, and so
    /// does the invalid-token marker in the body of *any* response; a 2xx
    /// carrying it is still a dead session.
    async fn read_checked(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if body_signals_invalid_token(&body) {
            return Err(ApiError::Unauthorized);
        }
        if status.is_success() {
            return Ok(body);
        }
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => Err(ApiError::Server(parsed)),
            Err(_) => Err(ApiError::Network(format!("request failed with status {status}"))),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = Self::read_checked(response).await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Network(err.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.api_url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.api_url(path))
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.api_url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read_checked(response).await.map(|_| ())
    }

    /// Submit credentials; a success only opens the MFA step.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("auth/login", payload).await
    }

    /// Submit the six-digit code completing the login handshake.
    pub async fn verify_mfa(
        &self,
        user_id: Uuid,
        payload: &MfaRequest,
    ) -> Result<MfaResponse, ApiError> {
        self.post_json(&format!("auth/mfa/{user_id}"), payload).await
    }

    /// Ask for a fresh MFA code.
    pub async fn resend_mfa(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.post_empty(&format!("auth/mfa/{user_id}/resend")).await
    }

    /// Validate the session cookie, returning the logged-in user.
    pub async fn check_session(&self) -> Result<SessionResponse, ApiError> {
        self.get_json("admin/session").await
    }

    /// Invalidate the session cookie server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("admin/logout").await
    }

    /// Register a new portal account. Privileged.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.api_url("admin/signup"))
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read_checked(response).await.map(|_| ())
    }

    /// Start password recovery for the account behind an email address.
    pub async fn forgot_password(
        &self,
        payload: &ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, ApiError> {
        self.post_json("auth/forgot-password", payload).await
    }

    /// Check a one-time recovery code.
    pub async fn verify_recovery_code(
        &self,
        user_id: Uuid,
        payload: &RecoveryCodeRequest,
    ) -> Result<RecoveryCodeResponse, ApiError> {
        let response = self
            .client
            .put(self.api_url(&format!("recovery-codes/{user_id}")))
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    /// Ask for a fresh recovery code.
    pub async fn resend_recovery_code(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.post_empty(&format!("recovery-codes/{user_id}/resend")).await
    }

    /// Set a new password after the recovery code was accepted.
    pub async fn reset_password(&self, payload: &ResetPasswordRequest) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.api_url("auth/reset-password"))
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read_checked(response).await.map(|_| ())
    }

    /// List portal users.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("admin/users").await
    }

    /// Update a portal user's editable fields.
    pub async fn update_user(
        &self,
        user_id: Uuid,
        payload: &UpdateUserRequest,
    ) -> Result<User, ApiError> {
        let response = self
            .client
            .put(self.api_url(&format!("admin/users/{user_id}")))
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::decode(response).await
    }

    /// Delete a portal user.
    pub async fn delete_user(&self, user_id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.api_url(&format!("admin/users/{user_id}")))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::read_checked(response).await.map(|_| ())
    }

    /// Trigger a server-side password reset for another user.
    pub async fn admin_reset_password(&self, user_id: Uuid) -> Result<(), ApiError> {
        self.post_empty(&format!("admin/users/{user_id}/reset-password")).await
    }

    /// Fetch the authenticated user's own profile.
    pub async fn profile(&self) -> Result<SessionResponse, ApiError> {
        self.get_json("admin/profile").await
    }
}

/// Absolute API base for the shared client. The configured base is kept
/// relative in the manifest default, so prefix the window origin when one
/// is available (reqwest wants absolute URLs).
fn default_base_url() -> String {
    let config = FrontendConfig::new();
    if config.api_base.starts_with("http") {
        return config.api_base;
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map_or_else(|| config.api_base.clone(), |origin| format!("{origin}{}", config.api_base))
}
