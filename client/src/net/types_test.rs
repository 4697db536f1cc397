use super::*;

fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        email: "budi@sekolah.sch.id".to_owned(),
        name: "Budi".to_owned(),
        role,
    }
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Guru).unwrap(), serde_json::json!("guru"));
    let parsed: Role = serde_json::from_str("\"siswa\"").unwrap();
    assert_eq!(parsed, Role::Siswa);
}

#[test]
fn unknown_role_is_rejected() {
    assert!(serde_json::from_str::<Role>("\"kepala_sekolah\"").is_err());
}

#[test]
fn dashboard_paths_are_per_role() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::Guru.dashboard_path(), "/guru/dashboard");
    assert_eq!(Role::Siswa.dashboard_path(), "/siswa/dashboard");
}

#[test]
fn login_response_parses_with_token() {
    let raw = r#"{"token":"jwt","user":{"id":"u-1","email":"budi@sekolah.sch.id","name":"Budi","role":"admin"}}"#;
    let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.token.as_deref(), Some("jwt"));
    assert_eq!(parsed.user, sample_user(Role::Admin));
}

#[test]
fn login_response_token_is_optional() {
    let raw = r#"{"user":{"id":"u-1","email":"budi@sekolah.sch.id","name":"Budi","role":"guru"}}"#;
    let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.token, None);
}

#[test]
fn login_request_serializes_credentials() {
    let body = LoginRequest { email: "a@b.id", password: "rahasia" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.id", "password": "rahasia" })
    );
}

#[test]
fn error_body_tolerates_missing_message() {
    let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.message, None);
}
