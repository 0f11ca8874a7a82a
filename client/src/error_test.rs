use super::*;
use serde_json::json;

// =============================================================
// FieldErrors parsing
// =============================================================

#[test]
fn field_errors_accept_list_and_scalar_values() {
    let fields = FieldErrors::from_value(&json!({
        "password": ["Incorrect password", "Too short"],
        "detail": "Not found.",
        "code": 42
    }));
    assert_eq!(fields.get("password"), Some("Incorrect password"));
    assert_eq!(fields.get("detail"), Some("Not found."));
    assert_eq!(fields.get("code"), None);
}

#[test]
fn field_errors_from_non_json_body_is_empty() {
    assert_eq!(FieldErrors::from_body("<html>502 Bad Gateway</html>"), FieldErrors::default());
    assert_eq!(FieldErrors::from_body(""), FieldErrors::default());
}

#[test]
fn first_message_prefers_email_then_username_then_password() {
    let fields = FieldErrors::from_value(&json!({
        "password": ["weak"],
        "username": ["taken"],
        "email": ["invalid email"]
    }));
    assert_eq!(fields.first_message(), Some("invalid email"));

    let fields = FieldErrors::from_value(&json!({ "password": ["weak"], "username": ["taken"] }));
    assert_eq!(fields.first_message(), Some("taken"));
}

#[test]
fn first_message_falls_back_to_non_field_errors_and_unknown_fields() {
    let fields = FieldErrors::from_value(&json!({
        "non_field_errors": ["Invalid email and password combination."]
    }));
    assert_eq!(fields.first_message(), Some("Invalid email and password combination."));

    let fields = FieldErrors::from_value(&json!({ "bio": ["Too long"] }));
    assert_eq!(fields.first_message(), Some("Too long"));
}

// =============================================================
// ClientError messages
// =============================================================

#[test]
fn user_message_uses_first_field_message() {
    let err = ClientError::AuthenticationFailed(FieldErrors::from_value(&json!({
        "password": ["Incorrect password"]
    })));
    assert_eq!(err.user_message("Login failed."), "Incorrect password");
}

#[test]
fn user_message_falls_back_when_no_fields() {
    let err = ClientError::AuthenticationFailed(FieldErrors::default());
    assert_eq!(err.user_message("Login failed."), "Login failed.");
}

#[test]
fn user_message_network_failure_is_generic() {
    let err = ClientError::NetworkFailure("request timed out".to_owned());
    assert_eq!(err.user_message("Login failed."), NETWORK_FAILURE_MESSAGE);
}

#[test]
fn into_auth_failure_narrows_rejections_only() {
    let fields = FieldErrors::from_value(&json!({ "email": ["bad"] }));
    let rejected = ClientError::Rejected { status: 400, fields: fields.clone() };
    assert_eq!(rejected.into_auth_failure(), ClientError::AuthenticationFailed(fields));

    let network = ClientError::NetworkFailure("offline".to_owned());
    assert_eq!(network.clone().into_auth_failure(), network);
}
