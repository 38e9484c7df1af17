use jupiter_core::{encrypt_password, Account};
use jupiter_db::*;

fn test_account() -> Account {
    Account {
        user_id: "u1".to_string(),
        password: encrypt_password("u1", "secret"),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

#[test]
fn register_new_account() {
    let conn = open_memory().unwrap();
    assert!(register(&conn, &test_account()).unwrap());

    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn register_existing_account_is_not_overwritten() {
    let conn = open_memory().unwrap();
    assert!(register(&conn, &test_account()).unwrap());

    let imposter = Account {
        password: encrypt_password("u1", "other"),
        first_name: "Grace".to_string(),
        ..test_account()
    };
    assert!(!register(&conn, &imposter).unwrap());

    let name = verify_credentials(&conn, "u1", &test_account().password).unwrap();
    assert_eq!(name.as_deref(), Some("Ada Lovelace"));
    let name = verify_credentials(&conn, "u1", &imposter.password).unwrap();
    assert_eq!(name, None);
}

#[test]
fn verify_returns_display_name() {
    let conn = open_memory().unwrap();
    register(&conn, &test_account()).unwrap();

    let credential = encrypt_password("u1", "secret");
    let name = verify_credentials(&conn, "u1", &credential).unwrap();
    assert_eq!(name, Some("Ada Lovelace".to_string()));
}

#[test]
fn wrong_password_and_unknown_user_look_the_same() {
    let conn = open_memory().unwrap();
    register(&conn, &test_account()).unwrap();

    let wrong_password = verify_credentials(&conn, "u1", "wrong").unwrap();
    let unknown_user = verify_credentials(&conn, "nonexistent", "x").unwrap();
    assert_eq!(wrong_password, None);
    assert_eq!(unknown_user, None);
}

#[test]
fn unreachable_store_is_unavailable() {
    let tmp = tempfile::TempDir::new().unwrap();
    // A directory cannot be opened as a database file.
    let db = Database::new(StoreConfig::new(tmp.path()));
    let err = db
        .with_connection(|conn| register(conn, &test_account()))
        .unwrap_err();
    assert!(
        matches!(err, StoreError::Unavailable { context: "open database", .. }),
        "got {:?}",
        err
    );
}
