use super::*;
use serde_json::json;

#[test]
fn user_profile_deserializes_backend_shape() {
    let profile: UserProfile = serde_json::from_value(json!({
        "user": { "id": "9f1c", "email": "alice@example.com", "username": "alice" },
        "bio": "Physics TA",
        "profile_picture": null,
        "Affiliation": "Cairo University",
        "created_at": "2025-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(profile.user.username, "alice");
    assert_eq!(profile.bio.as_deref(), Some("Physics TA"));
    assert_eq!(profile.profile_picture, None);
    assert_eq!(profile.affiliation.as_deref(), Some("Cairo University"));
}

#[test]
fn user_profile_tolerates_missing_optional_fields() {
    let profile: UserProfile = serde_json::from_value(json!({
        "user": { "id": "1", "email": "b@example.com", "username": "bob" }
    }))
    .unwrap();
    assert_eq!(profile.bio, None);
    assert_eq!(profile.affiliation, None);
}

#[test]
fn user_profile_initial_uppercases_first_username_char() {
    let mut profile = UserProfile::default();
    assert_eq!(profile.initial(), "");
    profile.user.username = "alice".to_owned();
    assert_eq!(profile.initial(), "A");
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { identifier: "alice@example.com".to_owned(), secret: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        json!({ "email": "alice@example.com", "password": "pw" })
    );
}

#[test]
fn credentials_debug_redacts_secret() {
    let creds = Credentials { identifier: "alice".to_owned(), secret: "hunter2".to_owned() };
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn profile_update_omits_unset_fields() {
    let update = ProfileUpdate { bio: Some("hi".to_owned()), ..ProfileUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "bio": "hi" }));
    assert!(!update.is_multipart());
}

#[test]
fn picture_update_is_multipart_with_single_field() {
    let update = ProfileUpdate::picture("https://img.example.test/a.png");
    assert!(update.is_multipart());
    assert_eq!(
        update.form_fields(),
        vec![("profile_picture", "https://img.example.test/a.png".to_owned())]
    );
}

#[test]
fn form_fields_use_backend_field_names() {
    let update = ProfileUpdate {
        bio: Some("b".to_owned()),
        affiliation: Some("a".to_owned()),
        profile_picture: None,
    };
    assert_eq!(update.form_fields(), vec![("bio", "b".to_owned()), ("Affiliation", "a".to_owned())]);
}

#[test]
fn check_passwords_rejects_mismatch() {
    let form = RegistrationForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "s3cret-one".to_owned(),
        confirm_password: "s3cret-two".to_owned(),
    };
    assert_eq!(form.check_passwords(), Err(ClientError::Validation("Passwords do not match")));

    let form = RegistrationForm { confirm_password: "s3cret-one".to_owned(), ..form };
    assert_eq!(form.check_passwords(), Ok(()));
}
