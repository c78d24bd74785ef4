use super::*;

fn sample_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        name: "Ana Admin".to_string(),
        username: "ana".to_string(),
        email: "ana@example.com".to_string(),
        role,
    }
}

// =============================================================
// State machine
// =============================================================

#[test]
fn session_starts_checking() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Checking);
    assert!(state.user.is_none());
    assert!(state.pending_user_id.is_none());
}

#[test]
fn logged_out_clears_everything() {
    let state = SessionState::logged_out();
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.user.is_none());
    assert!(state.pending_user_id.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn pending_mfa_holds_only_the_pending_id() {
    let user_id = Uuid::new_v4();
    let state = SessionState::pending_mfa(user_id);
    assert_eq!(state.status, SessionStatus::PendingMfa);
    assert_eq!(state.pending_user_id, Some(user_id));
    // The session is not authenticated until the code is verified.
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_holds_user_and_clears_pending_id() {
    let state = SessionState::authenticated(sample_user(UserRole::Admin));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert!(state.user.is_some());
    assert!(state.pending_user_id.is_none());
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(UserRole::Admin));
}

#[test]
fn login_handshake_never_skips_pending_mfa() {
    // unauthenticated → pending-mfa → authenticated, step by step.
    let user = sample_user(UserRole::Staff);
    let start = SessionState::logged_out();
    assert!(!start.is_authenticated());

    let pending = SessionState::pending_mfa(user.id);
    assert_eq!(pending.status, SessionStatus::PendingMfa);
    assert!(!pending.is_authenticated());

    let done = SessionState::authenticated(user);
    assert_eq!(done.status, SessionStatus::Authenticated);
    assert!(done.pending_user_id.is_none());
}

#[test]
fn logout_from_any_state_is_logged_out() {
    for state in [
        SessionState::default(),
        SessionState::pending_mfa(Uuid::new_v4()),
        SessionState::authenticated(sample_user(UserRole::Admin)),
    ] {
        let _ = state;
        let after = SessionState::logged_out();
        assert_eq!(after.status, SessionStatus::Unauthenticated);
        assert!(after.user.is_none());
    }
}

#[test]
fn role_is_none_without_a_user() {
    assert_eq!(SessionState::logged_out().role(), None);
    assert_eq!(SessionState::pending_mfa(Uuid::new_v4()).role(), None);
}

// =============================================================
// Client-side validation
// =============================================================

#[test]
fn credentials_require_both_fields() {
    assert!(credentials_present("admin", "s3cret"));
    assert!(!credentials_present("", "s3cret"));
    assert!(!credentials_present("   ", "s3cret"));
    assert!(!credentials_present("admin", ""));
}

#[test]
fn code_validation_requires_six_digits() {
    assert!(code_is_valid("123456"));
    assert!(code_is_valid("000000"));
    assert!(!code_is_valid("12345"));
    assert!(!code_is_valid("1234567"));
    assert!(!code_is_valid("12345a"));
    assert!(!code_is_valid(""));
    assert!(!code_is_valid("12 456"));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn op_error_prefers_the_server_message() {
    let err = op_error(
        crate::api::ApiError::Server(ErrorResponse::new("Usuário bloqueado")),
        "Credenciais inválidas",
    );
    assert_eq!(err.message, "Usuário bloqueado");
}

#[test]
fn op_error_maps_unauthorized_to_the_fallback() {
    let err = op_error(crate::api::ApiError::Unauthorized, "Código inválido");
    assert_eq!(err.message, "Código inválido");
}

#[test]
fn op_error_maps_transport_failures_to_the_generic_message() {
    let err = op_error(
        crate::api::ApiError::Network("connection refused".to_string()),
        "Credenciais inválidas",
    );
    assert_eq!(err.message, GENERIC_FAILURE);
}
