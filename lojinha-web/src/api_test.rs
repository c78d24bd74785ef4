use super::*;

#[test]
fn api_url_joins_base_and_path() {
    let client = LojinhaClient::new("http://localhost:5353/api/");
    assert_eq!(
        client.api_url("auth/login"),
        "http://localhost:5353/api/auth/login"
    );
    assert_eq!(
        client.api_url("/admin/session"),
        "http://localhost:5353/api/admin/session"
    );
}

#[test]
fn api_url_with_path_params() {
    let client = LojinhaClient::new("http://localhost:5353/api");
    let user_id = Uuid::parse_str("f47ac10b-58cc-4372-a567-0e02b2c3d479").unwrap();
    assert_eq!(
        client.api_url(&format!("auth/mfa/{user_id}")),
        "http://localhost:5353/api/auth/mfa/f47ac10b-58cc-4372-a567-0e02b2c3d479"
    );
    assert_eq!(
        client.api_url(&format!("recovery-codes/{user_id}/resend")),
        "http://localhost:5353/api/recovery-codes/f47ac10b-58cc-4372-a567-0e02b2c3d479/resend"
    );
}

#[test]
fn invalid_token_signal_matches_the_api_wording() {
    // The API says it in Portuguese, with or without trailing punctuation.
    assert!(is_invalid_token_signal("Token inválido"));
    assert!(is_invalid_token_signal("Token inválido!!"));
    assert!(is_invalid_token_signal("token inválido"));
    assert!(!is_invalid_token_signal("Credenciais inválidas"));
    assert!(!is_invalid_token_signal(""));
}

#[test]
fn invalid_token_body_detected_in_structured_messages() {
    assert!(body_signals_invalid_token(r#"{"message":"Token inválido!!"}"#));
    assert!(body_signals_invalid_token(r#"{"message":"Token inválido","details":null}"#));
    assert!(!body_signals_invalid_token(r#"{"message":"Credenciais inválidas"}"#));
}

#[test]
fn invalid_token_body_detected_in_plain_text() {
    assert!(body_signals_invalid_token("Token inválido"));
    assert!(!body_signals_invalid_token("tudo certo"));
}

#[test]
fn ordinary_success_bodies_do_not_trip_the_token_rule() {
    // Shaped like the 2xx payloads the client actually decodes.
    assert!(!body_signals_invalid_token(
        r#"{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479"}"#
    ));
    assert!(!body_signals_invalid_token(
        r#"{"user":{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479","name":"Ana","username":"ana","email":"ana@example.com","role":"admin"}}"#
    ));
    assert!(!body_signals_invalid_token(r#"{"valid":true}"#));
}

#[test]
fn api_error_display() {
    let unauthorized = ApiError::Unauthorized;
    assert_eq!(unauthorized.to_string(), "session invalidated");

    let server = ApiError::Server(ErrorResponse::new("Credenciais inválidas"));
    assert_eq!(server.to_string(), "Credenciais inválidas");

    let network = ApiError::Network("connection refused".to_string());
    assert!(network.to_string().contains("connection refused"));
}
