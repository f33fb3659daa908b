//! Integration tests for the signup, login, and logout flows.

use chrono::Duration;
use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_creates_account_consumes_invite_and_sets_cookie() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("SIGNUP1", Duration::hours(1)).await;

    let response = app
        .signup("owner@example.com", "Str0ngP@ssw0rd!", "SIGNUP1")
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body.get("email").and_then(|v| v.as_str()),
        Some("owner@example.com")
    );
    let token = response.session_token().expect("No session cookie set");

    let owner_id = app
        .owner_id_by_email("owner@example.com")
        .await
        .expect("Owner row missing");
    assert_eq!(app.invite_used_by("SIGNUP1").await, Some(owner_id));
    assert_eq!(app.session_count(owner_id).await, 1);

    // The cookie authenticates immediately.
    let me = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(
        me.body.get("email").and_then(|v| v.as_str()),
        Some("owner@example.com")
    );
}

#[tokio::test]
async fn test_signup_with_consumed_invite_creates_nothing() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("USED1", Duration::hours(1)).await;

    let first = app.signup("first@example.com", "Str0ngP@ssw0rd!", "USED1").await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .signup("second@example.com", "Str0ngP@ssw0rd!", "USED1")
        .await;

    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(
        second.body.get("error").and_then(|v| v.as_str()),
        Some("invite code has already been used")
    );
    assert!(app.owner_id_by_email("second@example.com").await.is_none());
}

#[tokio::test]
async fn test_signup_with_expired_invite_is_rejected() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("STALE1", Duration::hours(-1)).await;

    let response = app
        .signup("late@example.com", "Str0ngP@ssw0rd!", "STALE1")
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body.get("error").and_then(|v| v.as_str()),
        Some("invite code has expired")
    );
    assert!(app.owner_id_by_email("late@example.com").await.is_none());
}

#[tokio::test]
async fn test_login_wrong_password_issues_no_session() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("LOGIN1", Duration::hours(1)).await;
    app.signup("login@example.com", "Str0ngP@ssw0rd!", "LOGIN1")
        .await;
    let owner_id = app.owner_id_by_email("login@example.com").await.unwrap();
    let sessions_before = app.session_count(owner_id).await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "login@example.com",
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    // Indistinguishable from an unknown account.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.session_token().is_none());
    assert_eq!(app.session_count(owner_id).await, sessions_before);

    let ok = app
        .request(
            "POST",
            "/auth/login",
            Some(serde_json::json!({
                "email": "login@example.com",
                "password": "Str0ngP@ssw0rd!",
            })),
            None,
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.session_token().is_some());
}

#[tokio::test]
async fn test_login_missing_fields_is_bad_request() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app
        .request("POST", "/auth/login", Some(serde_json::json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_deletes_session_row() {
    let Some(app) = TestApp::new().await else {
        return;
    };
    app.seed_invite("LOGOUT1", Duration::hours(1)).await;
    let signup = app
        .signup("logout@example.com", "Str0ngP@ssw0rd!", "LOGOUT1")
        .await;
    let token = signup.session_token().unwrap();
    let owner_id = app.owner_id_by_email("logout@example.com").await.unwrap();

    let response = app.request("POST", "/auth/logout", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success").and_then(|v| v.as_bool()), Some(true));
    let clear = response.set_cookie.expect("No deletion cookie");
    assert!(clear.contains("Max-Age=0"));
    assert_eq!(app.session_count(owner_id).await, 0);

    // The old token no longer authenticates.
    let me = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::FOUND);
}

#[tokio::test]
async fn test_logout_without_cookie_is_bad_request() {
    let Some(app) = TestApp::new().await else {
        return;
    };

    let response = app.request("POST", "/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
