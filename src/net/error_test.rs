use super::*;

// =============================================================
// Backend message extraction
// =============================================================

#[test]
fn error_message_prefers_message_then_error() {
    let body = r#"{"message":"m1","error":"m2"}"#;
    assert_eq!(error_message(body), Some("m1".to_owned()));

    let body = r#"{"error":"m2"}"#;
    assert_eq!(error_message(body), Some("m2".to_owned()));
}

#[test]
fn error_message_ignores_blank_and_non_string_fields() {
    assert_eq!(
        error_message(r#"{"message":"  ","error":"fallback"}"#),
        Some("fallback".to_owned())
    );
    assert_eq!(error_message(r#"{"message":42}"#), None);
}

#[test]
fn error_message_handles_non_json_bodies() {
    assert_eq!(error_message("<html>502</html>"), None);
    assert_eq!(error_message(""), None);
}

// =============================================================
// Form display
// =============================================================

#[test]
fn form_message_uses_backend_message_when_present() {
    let err = ApiError::Api {
        status: 422,
        message: Some("Name already taken".to_owned()),
    };
    assert_eq!(err.form_message(), "Name already taken");
}

#[test]
fn form_message_falls_back_to_generic_text() {
    let err = ApiError::Api {
        status: 500,
        message: None,
    };
    assert_eq!(err.form_message(), "Something went wrong. Please try again.");

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.form_message(), "Something went wrong. Please try again.");
}

#[test]
fn form_message_names_session_expiry() {
    assert!(ApiError::Unauthorized.form_message().contains("session"));
}
