use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn score_body(candidate: &str, criteria: &str, score: f64) -> Value {
    json!({
        "eventId": "event1",
        "candidateId": candidate,
        "judgeId": "judge1",
        "criteriaId": criteria,
        "score": score,
    })
}

/// Spawn the app with event1 open for scoring; returns the coordinator and judge1 tokens.
async fn active_event1() -> (TestApp, String, String) {
    let app = TestApp::spawn().await;
    let coordinator = app.login_coordinator("john@example.com").await;
    app.set_event_status("event1", "active", &coordinator).await;
    let judge = app.login_judge("JUDGE001").await;
    (app, coordinator, judge)
}

mod submit {
    use super::*;

    #[tokio::test]
    async fn first_score_is_created() {
        let (app, _, judge) = active_event1().await;

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand2", "criteria2", 7.5), &judge)
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["score"], 7.5);
        assert_eq!(res.body["judgeId"], "judge1");
    }

    #[tokio::test]
    async fn resubmission_replaces_in_place() {
        let (app, coordinator, judge) = active_event1().await;

        let mut body = score_body("cand1", "criteria1", 6.0);
        body["comment"] = json!("Changed my mind");
        let res = app.post_with_token(routes::SCORES, &body, &judge).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], "score1");
        assert_eq!(res.body["score"], 6.0);
        assert_eq!(res.body["comment"], "Changed my mind");

        let scores = app
            .get_with_token(&routes::candidate_scores("cand1"), &coordinator)
            .await;
        assert_eq!(scores.body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn score_above_max_is_rejected() {
        let (app, _, judge) = active_event1().await;

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand2", "criteria2", 10.5), &judge)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn negative_score_is_rejected() {
        let (app, _, judge) = active_event1().await;

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand2", "criteria2", -1.0), &judge)
            .await;

        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn judge_moved_back_to_invited_stops_scoring() {
        let (app, coordinator, judge) = active_event1().await;

        let res = app
            .put_with_token(
                &routes::judge("judge1"),
                &json!({"name": "Michael Brown", "email": "michael@example.com", "status": "invited"}),
                &coordinator,
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand2", "criteria2", 5.0), &judge)
            .await;
        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn event_must_be_active() {
        let app = TestApp::spawn().await;
        let judge = app.login_judge("JUDGE001").await;

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand2", "criteria2", 5.0), &judge)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn judge_cannot_score_as_another_judge() {
        let (app, _, judge) = active_event1().await;

        let mut body = score_body("cand2", "criteria2", 5.0);
        body["judgeId"] = json!("judge2");
        let res = app.post_with_token(routes::SCORES, &body, &judge).await;

        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn judge_cannot_score_another_event() {
        let (app, coordinator, judge) = active_event1().await;
        app.set_event_status("event2", "active", &coordinator).await;

        let res = app
            .post_with_token(
                routes::SCORES,
                &json!({
                    "eventId": "event2",
                    "candidateId": "cand4",
                    "judgeId": "judge1",
                    "criteriaId": "criteria5",
                    "score": 5.0,
                }),
                &judge,
            )
            .await;

        assert_eq!(res.status, 403);
    }

    #[tokio::test]
    async fn candidate_from_another_event_is_rejected() {
        let (app, _, judge) = active_event1().await;

        let res = app
            .post_with_token(routes::SCORES, &score_body("cand4", "criteria1", 5.0), &judge)
            .await;

        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn coordinators_do_not_submit_scores() {
        let (app, coordinator, _) = active_event1().await;

        let res = app
            .post_with_token(
                routes::SCORES,
                &score_body("cand2", "criteria2", 5.0),
                &coordinator,
            )
            .await;

        assert_eq!(res.status, 403);
    }
}

mod manage {
    use super::*;

    #[tokio::test]
    async fn coordinator_corrects_a_score() {
        let app = TestApp::spawn().await;
        let token = app.login_coordinator("john@example.com").await;

        let res = app
            .put_with_token(
                &routes::score("score4"),
                &json!({"score": 9.0, "comment": "Recounted"}),
                &token,
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], "score4");
        assert_eq!(res.body["score"], 9.0);
        assert_eq!(res.body["candidateId"], "cand2");
    }

    #[tokio::test]
    async fn correction_must_stay_in_range() {
        let app = TestApp::spawn().await;
        let token = app.login_coordinator("john@example.com").await;

        let res = app
            .put_with_token(&routes::score("score4"), &json!({"score": 11.0}), &token)
            .await;

        assert_eq!(res.status, 400);
    }

    #[tokio::test]
    async fn judges_cannot_correct_scores() {
        let app = TestApp::spawn().await;
        let token = app.login_judge("JUDGE001").await;

        let res = app
            .put_with_token(&routes::score("score1"), &json!({"score": 1.0}), &token)
            .await;

        assert_eq!(res.status, 403);
    }

    #[tokio::test]
    async fn delete_score_then_not_found() {
        let app = TestApp::spawn().await;
        let token = app.login_coordinator("john@example.com").await;

        assert_eq!(
            app.delete_with_token(&routes::score("score2"), &token)
                .await
                .status,
            204
        );
        let res = app.delete_with_token(&routes::score("score2"), &token).await;
        assert_eq!(res.status, 404);
    }
}

mod viewing {
    use super::*;

    #[tokio::test]
    async fn coordinator_can_filter_by_judge() {
        let app = TestApp::spawn().await;
        let token = app.login_coordinator("john@example.com").await;

        let res = app
            .get_with_token(
                &format!("{}?judgeId=judge2", routes::candidate_scores("cand1")),
                &token,
            )
            .await;

        assert_eq!(res.status, 200);
        let scores = res.body.as_array().unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0]["id"], "score3");
    }

    #[tokio::test]
    async fn judge_only_sees_own_scores() {
        let app = TestApp::spawn().await;
        let token = app.login_judge("JUDGE002").await;

        let res = app
            .get_with_token(
                &format!("{}?judgeId=judge1", routes::candidate_scores("cand1")),
                &token,
            )
            .await;

        assert_eq!(res.status, 200);
        let ids: Vec<&str> = res
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["score3"]);
    }

    #[tokio::test]
    async fn anonymous_cannot_view_scores() {
        let app = TestApp::spawn().await;

        let res = app
            .get_without_token(&routes::candidate_scores("cand1"))
            .await;

        assert_eq!(res.status, 401);
    }
}

mod judge_dashboard {
    use super::*;

    #[tokio::test]
    async fn shows_progress_and_candidate_states() {
        let app = TestApp::spawn().await;
        let token = app.login_judge("JUDGE001").await;

        let res = app.get_with_token(routes::JUDGE_DASHBOARD, &token).await;

        assert_eq!(res.status, 200, "{}", res.text);
        let assignments = res.body["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 1);

        let assignment = &assignments[0];
        assert_eq!(assignment["event"]["id"], "event1");
        assert_eq!(
            assignment["progress"],
            json!({"completed": 3, "total": 12, "percentage": 25})
        );

        let candidates = assignment["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(
            candidates[0]["status"],
            json!({"state": "in_progress", "scored": 2, "total": 4})
        );
        assert_eq!(candidates[2]["status"], json!({"state": "not_started"}));
    }

    #[tokio::test]
    async fn scoring_every_criteria_completes_a_candidate() {
        let (app, _, judge) = active_event1().await;

        for criteria in ["criteria3", "criteria4"] {
            let res = app
                .post_with_token(routes::SCORES, &score_body("cand1", criteria, 8.0), &judge)
                .await;
            assert_eq!(res.status, 201, "{}", res.text);
        }

        let res = app.get_with_token(routes::JUDGE_DASHBOARD, &judge).await;
        let assignment = &res.body["assignments"][0];
        assert_eq!(assignment["progress"]["completed"], 5);
        assert_eq!(
            assignment["candidates"][0]["status"],
            json!({"state": "complete"})
        );
    }

    #[tokio::test]
    async fn coordinators_have_no_judge_dashboard() {
        let app = TestApp::spawn().await;
        let token = app.login_coordinator("john@example.com").await;

        let res = app.get_with_token(routes::JUDGE_DASHBOARD, &token).await;

        assert_eq!(res.status, 403);
    }
}
