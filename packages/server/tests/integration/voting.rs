use serde_json::json;

use crate::common::{TestApp, routes};

async fn open_event1() -> TestApp {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;
    app.set_event_status("event1", "active", &token).await;
    app
}

#[tokio::test]
async fn tally_orders_ties_by_candidate() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(&routes::award_tally("award3")).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["totalVotes"], 3);
    let order: Vec<&str> = res.body["tally"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["candidateId"].as_str().unwrap())
        .collect();
    assert_eq!(order, ["cand1", "cand2", "cand3"]);
}

#[tokio::test]
async fn anonymous_visitor_votes_once_per_award() {
    let app = open_event1().await;
    let vote = json!({"awardId": "award3", "candidateId": "cand2"});

    let first = app
        .post_from(&routes::event_votes("event1"), &vote, "10.0.0.7")
        .await;
    assert_eq!(first.status, 201, "{}", first.text);
    assert_eq!(first.body["totalVotes"], 4);
    assert_eq!(first.body["tally"][0]["candidateId"], "cand2");
    assert_eq!(first.body["tally"][0]["votes"], 2);

    let again = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award3", "candidateId": "cand3"}),
            "10.0.0.7",
        )
        .await;
    assert_eq!(again.status, 409);
    assert_eq!(again.body["code"], "CONFLICT");

    let tally = app.get_without_token(&routes::award_tally("award3")).await;
    assert_eq!(tally.body["totalVotes"], 4);
}

#[tokio::test]
async fn first_forwarded_address_identifies_the_voter() {
    let app = open_event1().await;
    let vote = json!({"awardId": "award3", "candidateId": "cand1"});

    let first = app
        .post_from(&routes::event_votes("event1"), &vote, "10.0.0.8, 172.16.0.1")
        .await;
    assert_eq!(first.status, 201);

    let second = app
        .post_from(&routes::event_votes("event1"), &vote, "10.0.0.9, 172.16.0.1")
        .await;
    assert_eq!(second.status, 201);

    let repeat = app
        .post_from(&routes::event_votes("event1"), &vote, "10.0.0.8")
        .await;
    assert_eq!(repeat.status, 409);
}

#[tokio::test]
async fn seeded_voter_address_has_already_voted() {
    let app = open_event1().await;

    let res = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award3", "candidateId": "cand3"}),
            "192.168.1.1",
        )
        .await;

    assert_eq!(res.status, 409);
}

#[tokio::test]
async fn logged_in_judge_may_vote() {
    let app = open_event1().await;
    let token = app.login_judge("JUDGE002").await;

    let res = app
        .post_with_token(
            &routes::event_votes("event1"),
            &json!({"awardId": "award3", "candidateId": "cand3"}),
            &token,
        )
        .await;

    assert_eq!(res.status, 201, "{}", res.text);
}

#[tokio::test]
async fn inactive_event_refuses_votes() {
    let app = TestApp::spawn().await;

    let res = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award3", "candidateId": "cand1"}),
            "10.0.0.7",
        )
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn judged_award_refuses_votes() {
    let app = open_event1().await;

    let res = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award1", "candidateId": "cand1"}),
            "10.0.0.7",
        )
        .await;

    assert_eq!(res.status, 400);
}

#[tokio::test]
async fn award_and_candidate_must_belong_to_the_event() {
    let app = open_event1().await;

    let foreign_award = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award6", "candidateId": "cand1"}),
            "10.0.0.7",
        )
        .await;
    assert_eq!(foreign_award.status, 400);

    let foreign_candidate = app
        .post_from(
            &routes::event_votes("event1"),
            &json!({"awardId": "award3", "candidateId": "cand4"}),
            "10.0.0.7",
        )
        .await;
    assert_eq!(foreign_candidate.status, 400);
}

#[tokio::test]
async fn deleting_a_candidate_removes_their_votes() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let res = app.delete_with_token(&routes::candidate("cand1"), &token).await;
    assert_eq!(res.status, 204);

    let tally = app.get_without_token(&routes::award_tally("award3")).await;
    assert_eq!(tally.body["totalVotes"], 2);
}

#[tokio::test]
async fn deleting_a_public_award_removes_its_votes() {
    let app = TestApp::spawn().await;
    let token = app.login_coordinator("john@example.com").await;

    let res = app.delete_with_token(&routes::award("award3"), &token).await;
    assert_eq!(res.status, 204);

    let tally = app.get_without_token(&routes::award_tally("award3")).await;
    assert_eq!(tally.status, 404);
}
