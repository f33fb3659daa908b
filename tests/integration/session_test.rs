//! Integration tests for session-store maintenance operations.

use chrono::{Duration, Utc};

use tablehub_database::repositories::session::SessionRepository;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_delete_all_for_principal_removes_every_session() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("BULK1", Duration::hours(1)).await;
    app.signup("bulk@example.com", "Str0ngP@ssw0rd!", "BULK1")
        .await;
    let owner_id = app.owner_id_by_email("bulk@example.com").await.unwrap();

    // Two more logins, three sessions total.
    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({
                    "email": "bulk@example.com",
                    "password": "Str0ngP@ssw0rd!",
                })),
                None,
            )
            .await;
        assert!(response.session_token().is_some());
    }
    assert_eq!(app.session_count(owner_id).await, 3);

    let repo = SessionRepository::new(app.db_pool.clone());
    let removed = repo.delete_all_for_principal(owner_id).await.unwrap();

    assert_eq!(removed, 3);
    assert_eq!(app.session_count(owner_id).await, 0);
}

#[tokio::test]
async fn test_cleanup_expired_removes_only_stale_sessions() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    let owner_id = app.create_owner("sweep@example.com").await;
    app.insert_session(owner_id, Utc::now() - Duration::hours(1))
        .await;
    app.insert_session(owner_id, Utc::now() + Duration::hours(1))
        .await;

    let repo = SessionRepository::new(app.db_pool.clone());
    let removed = repo.cleanup_expired(Utc::now()).await.unwrap();

    assert_eq!(removed, 1);
    assert_eq!(app.session_count(owner_id).await, 1);
}
