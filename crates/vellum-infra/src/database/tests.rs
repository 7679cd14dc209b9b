use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use vellum_core::domain::{BlogPost, User};
use vellum_core::ports::{BaseRepository, UserRepository};

use super::entity::{post, user};
use super::sql_repo::{SqlPostRepository, SqlUserRepository};

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            author_id,
            title: "Test Post".to_owned(),
            subtitle: "A subtitle".to_owned(),
            date: "August 06, 2026".to_owned(),
            body: "Content".to_owned(),
            img_url: "http://x/i.png".to_owned(),
        }]])
        .into_connection();

    let repo = SqlPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.id, post_id);
    assert_eq!(found.author_id, author_id);
}

#[tokio::test]
async fn test_find_user_by_email() {
    let user_id = Uuid::new_v4();
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            email: "ann@example.com".to_owned(),
            password_hash: "$pbkdf2-sha256$...".to_owned(),
            name: "Ann".to_owned(),
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = SqlUserRepository::new(db);

    let result: Option<User> = repo.find_by_email("ann@example.com").await.unwrap();

    assert!(result.is_some());
    assert_eq!(result.unwrap().name, "Ann");
}

#[tokio::test]
async fn test_find_user_by_email_empty_result() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = SqlUserRepository::new(db);

    let result = repo.find_by_email("nobody@example.com").await.unwrap();
    assert!(result.is_none());
}
