use serde_json::json;
use maya_portal::cli::SessionPersister;
use maya_portal::controller::credential_form::CredentialHandler;
use maya_portal::helpers::session_store::SessionStore;
use maya_portal::models::user::Role;

#[test]
fn successful_login_payload_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SessionStore::new(dir.path().join("session.json"));

    let mut persister = SessionPersister::new(&store);
    persister.on_login(json!({
        "token": "tok-9",
        "user": {"id": "u-1", "email": "admin@maya.mx", "role": "admin", "first_name": "Ada", "last_name": "Chan"}
    }));
    let session = persister.finish().expect("session stored");

    assert_eq!(session.user.role, Role::Admin);
    let reloaded = store.load().expect("load").expect("session present");
    assert_eq!(reloaded.auth_token, "tok-9");
    assert_eq!(reloaded.user.email, "admin@maya.mx");
}

#[test]
fn payload_without_token_is_not_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SessionStore::new(dir.path().join("session.json"));

    let mut persister = SessionPersister::new(&store);
    persister.on_register(json!({"message": "ok"}));

    assert!(persister.finish().is_err());
    assert!(store.load().expect("load").is_none());
}
