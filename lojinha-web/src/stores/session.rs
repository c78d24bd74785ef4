//! Session store: whether this browser holds a valid portal session, and
//! the credentials → MFA → authenticated handshake driving it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use shared::models::{
    ErrorResponse, LoginRequest, MfaRequest, SignupRequest, User, UserRole,
};
use uuid::Uuid;
use yew_router::navigator::Navigator;
use yewdux::prelude::*;

use crate::api::{ApiError, LojinhaClient};
use crate::routes::{AdminRoute, MainRoute};

const GENERIC_FAILURE: &str = "Não foi possível conectar ao servidor. Tente novamente.";

/// Where the session stands in the login handshake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// The startup session-validation call is still in flight.
    #[default]
    Checking,
    Unauthenticated,
    /// Credentials accepted; waiting for the six-digit code.
    PendingMfa,
    Authenticated,
}

/// Authentication state shared by the route guard and user-aware views.
///
/// Invariants: `user` is `Some` iff `status == Authenticated`;
/// `pending_user_id` is `Some` only while `status == PendingMfa`. All
/// transitions go through the constructors below, which uphold both.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<User>,
    pub pending_user_id: Option<Uuid>,
}

impl SessionState {
    /// The resolved logged-out state.
    #[must_use]
    pub fn logged_out() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
            pending_user_id: None,
        }
    }

    /// Credentials were accepted; the MFA step still stands between this
    /// browser and an authenticated session.
    #[must_use]
    pub fn pending_mfa(user_id: Uuid) -> Self {
        Self {
            status: SessionStatus::PendingMfa,
            user: None,
            pending_user_id: Some(user_id),
        }
    }

    /// A fully established session.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
            pending_user_id: None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Role of the logged-in user, if any.
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Whether a submitted MFA/recovery code has the required shape. Checked
/// before any network call.
#[must_use]
pub fn code_is_valid(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_digit())
}

/// Whether a credential pair is worth sending at all.
#[must_use]
pub fn credentials_present(username: &str, password: &str) -> bool {
    !username.trim().is_empty() && !password.is_empty()
}

fn op_error(err: ApiError, auth_fallback: &str) -> ErrorResponse {
    match err {
        ApiError::Unauthorized => ErrorResponse::new(auth_fallback),
        ApiError::Server(body) => body,
        ApiError::Network(_) => ErrorResponse::new(GENERIC_FAILURE),
    }
}

/// Validate the session cookie. Runs once at application start; any
/// failure resolves to logged-out so guarded views stop waiting.
pub async fn check_session(dispatch: &Dispatch<SessionState>) {
    let client = LojinhaClient::shared();
    match client.check_session().await {
        Ok(response) => dispatch.set(SessionState::authenticated(response.user)),
        Err(_) => dispatch.set(SessionState::logged_out()),
    }
}

/// Submit credentials. Success moves the store to `PendingMfa` and hands
/// back the pending user id for the MFA route; failure changes nothing.
pub async fn login(
    dispatch: &Dispatch<SessionState>,
    username: &str,
    password: &str,
) -> Result<Uuid, ErrorResponse> {
    if !credentials_present(username, password) {
        return Err(ErrorResponse::new("Informe usuário e senha."));
    }
    let client = LojinhaClient::shared();
    let request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    match client.login(&request).await {
        Ok(body) => {
            dispatch.set(SessionState::pending_mfa(body.id));
            Ok(body.id)
        }
        Err(err) => Err(op_error(err, "Credenciais inválidas")),
    }
}

/// Submit the six-digit code. Success establishes the session and moves
/// to the dashboard; failure leaves the store in `PendingMfa`.
pub async fn verify_mfa(
    dispatch: &Dispatch<SessionState>,
    navigator: Option<&Navigator>,
    user_id: Uuid,
    code: &str,
) -> Result<(), ErrorResponse> {
    if !code_is_valid(code) {
        return Err(ErrorResponse::new("Insira o código de 6 dígitos."));
    }
    let client = LojinhaClient::shared();
    let request = MfaRequest {
        code: code.to_string(),
    };
    match client.verify_mfa(user_id, &request).await {
        Ok(body) => {
            dispatch.set(SessionState::authenticated(body.user));
            if let Some(navigator) = navigator {
                navigator.push(&AdminRoute::Home);
            }
            Ok(())
        }
        Err(err) => Err(op_error(err, "Código inválido")),
    }
}

/// Best-effort server-side invalidation, then an unconditional local
/// reset and a bounce to the login view. Never fails.
pub async fn logout(dispatch: &Dispatch<SessionState>, navigator: Option<&Navigator>) {
    let client = LojinhaClient::shared();
    let _ = client.logout().await;
    dispatch.set(SessionState::logged_out());
    if let Some(navigator) = navigator {
        navigator.push(&MainRoute::Login);
    }
}

/// Register a new portal account. Delegates entirely to the API; the
/// session itself does not change.
pub async fn signup(payload: SignupRequest) -> Result<(), ErrorResponse> {
    let client = LojinhaClient::shared();
    client
        .signup(&payload)
        .await
        .map_err(|err| op_error(err, "Sessão expirada"))
}

/// The global invalid-token rule: drop the local session and land on the
/// login view immediately.
pub fn invalidate(dispatch: &Dispatch<SessionState>, navigator: Option<&Navigator>) {
    dispatch.set(SessionState::logged_out());
    if let Some(navigator) = navigator {
        navigator.push(&MainRoute::Login);
    }
}

/// Shared failure handling for authenticated portal calls: an
/// invalidated session redirects to login and surfaces nothing; anything
/// else comes back as a message for inline rendering.
pub fn admin_error(
    dispatch: &Dispatch<SessionState>,
    navigator: Option<&Navigator>,
    err: &ApiError,
) -> Option<ErrorResponse> {
    match err {
        ApiError::Unauthorized => {
            invalidate(dispatch, navigator);
            None
        }
        ApiError::Server(body) => Some(body.clone()),
        ApiError::Network(_) => Some(ErrorResponse::new(GENERIC_FAILURE)),
    }
}
