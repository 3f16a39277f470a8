use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn listing_judges_requires_a_token() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(&routes::event_judges("event1")).await;

    assert_eq!(res.status, 401);
}

#[tokio::test]
async fn coordinator_sees_judges_with_access_codes() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let res = app
        .get_with_token(&routes::event_judges("event1"), &token)
        .await;

    assert_eq!(res.status, 200);
    let codes: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["accessCode"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["JUDGE001", "JUDGE002"]);
}

#[tokio::test]
async fn judges_cannot_manage_judges() {
    let app = TestApp::spawn().await;
    let token = app.login_judge("JUDGE001").await;

    let res = app
        .get_with_token(&routes::event_judges("event1"), &token)
        .await;

    assert_eq!(res.status, 403);
}

#[tokio::test]
async fn invited_judge_gets_a_code_and_logs_in_once_activated() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let created = app
        .post_with_token(
            &routes::event_judges("event1"),
            &json!({"name": "Nina Patel", "email": "nina@example.com"}),
            &token,
        )
        .await;
    assert_eq!(created.status, 201, "{}", created.text);
    assert_eq!(created.body["status"], "invited");
    let code = created.body["accessCode"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 8);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    let refused = app
        .post_without_token(routes::JUDGE_LOGIN, &json!({"accessCode": code}))
        .await;
    assert_eq!(refused.status, 401);

    let updated = app
        .put_with_token(
            &routes::judge(&created.id()),
            &json!({"name": "Nina Patel", "email": "nina@example.com", "status": "active"}),
            &token,
        )
        .await;
    assert_eq!(updated.status, 200);
    assert_eq!(updated.body["accessCode"], code.as_str());

    let judge_token = app.login_judge(&code).await;
    let me = app.get_with_token(routes::ME, &judge_token).await;
    assert_eq!(me.body["user"]["id"], created.body["id"]);
}

#[tokio::test]
async fn invalid_judge_email_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let res = app
        .post_with_token(
            &routes::event_judges("event1"),
            &json!({"name": "Nina Patel", "email": "not-an-email"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn removing_a_judge_removes_their_scores() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let res = app.delete_with_token(&routes::judge("judge1"), &token).await;
    assert_eq!(res.status, 204);

    let scores = app
        .get_with_token(&routes::candidate_scores("cand1"), &token)
        .await;
    let ids: Vec<&str> = scores
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["score3"]);

    let missing = app.delete_with_token(&routes::judge("judge1"), &token).await;
    assert_eq!(missing.status, 404);
}
