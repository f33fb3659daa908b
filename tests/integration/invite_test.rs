//! Integration tests for atomic invite consumption.

use chrono::Duration;

use tablehub_database::repositories::invite::InviteRepository;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_concurrent_consume_has_exactly_one_winner() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("RACE1", Duration::hours(1)).await;
    let first = app.create_owner("racer-a@example.com").await;
    let second = app.create_owner("racer-b@example.com").await;
    let repo = InviteRepository::new(app.db_pool.clone());

    let (a, b) = tokio::join!(repo.consume("RACE1", first), repo.consume("RACE1", second));
    let a = a.unwrap();
    let b = b.unwrap();

    // The conditional update lets at most one racer through.
    assert!(a ^ b, "expected exactly one winner, got a={a} b={b}");

    let used_by = app.invite_used_by("RACE1").await.expect("Invite unconsumed");
    assert!(used_by == first || used_by == second);
}

#[tokio::test]
async fn test_consume_expired_invite_fails() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("EXPIRED1", Duration::hours(-1)).await;
    let owner = app.create_owner("expired@example.com").await;
    let repo = InviteRepository::new(app.db_pool.clone());

    assert!(!repo.consume("EXPIRED1", owner).await.unwrap());
    assert_eq!(app.invite_used_by("EXPIRED1").await, None);
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("ONCE1", Duration::hours(1)).await;
    let first = app.create_owner("once-a@example.com").await;
    let second = app.create_owner("once-b@example.com").await;
    let repo = InviteRepository::new(app.db_pool.clone());

    assert!(repo.consume("ONCE1", first).await.unwrap());
    assert!(!repo.consume("ONCE1", second).await.unwrap());
    assert_eq!(app.invite_used_by("ONCE1").await, Some(first));
}
