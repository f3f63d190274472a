use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::{app, db, errors::ModelError, user};

async fn test_db() -> DatabaseConnection {
    let db = db::connect_url("sqlite::memory:").await.expect("connect sqlite");
    migration::Migrator::up(&db, None).await.expect("migrate up");
    db
}

#[tokio::test]
async fn create_and_fetch_user() {
    let db = test_db().await;

    let created = user::create(&db, "bob@example.com", "$argon2id$stub").await.expect("create user");
    assert!(created.id > 0);
    assert!(!created.is_admin);

    let by_email = user::by_email(&db, "bob@example.com").await.unwrap().expect("found by email");
    assert_eq!(by_email.id, created.id);
    assert_eq!(by_email.pass_hash, "$argon2id$stub");

    let by_id = user::by_id(&db, created.id).await.unwrap().expect("found by id");
    assert_eq!(by_id.email, "bob@example.com");
}

#[tokio::test]
async fn email_lookup_is_case_sensitive() {
    let db = test_db().await;

    user::create(&db, "Bob@example.com", "$argon2id$stub").await.expect("create user");
    assert!(user::by_email(&db, "bob@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let db = test_db().await;

    user::create(&db, "dup@example.com", "$argon2id$one").await.expect("first insert");
    let second = user::create(&db, "dup@example.com", "$argon2id$two").await;
    assert!(matches!(second, Err(ModelError::Conflict(_))));
}

#[tokio::test]
async fn missing_user_is_none() {
    let db = test_db().await;

    assert!(user::by_email(&db, "ghost@example.com").await.unwrap().is_none());
    assert!(user::by_id(&db, 12345).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_user_removes_row() {
    let db = test_db().await;

    let created = user::create(&db, "gone@example.com", "$argon2id$stub").await.unwrap();
    user::delete(&db, created.id).await.expect("delete");
    assert!(user::by_id(&db, created.id).await.unwrap().is_none());

    let again = user::delete(&db, created.id).await;
    assert!(matches!(again, Err(ModelError::Validation(_))));
}

#[tokio::test]
async fn app_round_trip_keeps_both_secrets() {
    let db = test_db().await;

    app::create(&db, 1, "web", "a-secret", "r-secret").await.expect("create app");

    let found = app::by_id(&db, 1).await.unwrap().expect("found app");
    assert_eq!(found.name, "web");
    assert_eq!(found.secret, "a-secret");
    assert_eq!(found.refresh_secret, "r-secret");

    assert!(app::by_id(&db, 99).await.unwrap().is_none());
}

#[tokio::test]
async fn app_secrets_must_differ() {
    let db = test_db().await;

    let res = app::create(&db, 2, "bad", "same", "same").await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
}
