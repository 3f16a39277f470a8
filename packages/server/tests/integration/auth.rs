use serde_json::json;

use crate::common::{TestApp, routes};

mod coordinator_login {
    use super::*;

    #[tokio::test]
    async fn seeded_coordinator_can_log_in() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "john@example.com", "password": "anything"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert!(res.body["token"].is_string());
        assert_eq!(res.body["user"]["id"], "coord1");
        assert_eq!(res.body["user"]["role"], "coordinator");
        let permissions = res.body["permissions"].as_array().unwrap();
        assert!(permissions.contains(&json!("event:manage")));
        assert!(!permissions.contains(&json!("score:submit")));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "nobody@example.com", "password": "anything"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn empty_password_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "john@example.com", "password": ""}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::LOGIN, &json!({"email": 42}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod judge_login {
    use super::*;

    #[tokio::test]
    async fn active_judge_logs_in_with_access_code() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::JUDGE_LOGIN, &json!({"accessCode": "JUDGE001"}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["user"]["id"], "judge1");
        assert_eq!(res.body["user"]["role"], "judge");
        assert_eq!(res.body["user"]["accessCode"], "JUDGE001");
    }

    #[tokio::test]
    async fn invited_judge_cannot_log_in() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::JUDGE_LOGIN, &json!({"accessCode": "JUDGE003"}))
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn access_codes_are_case_sensitive() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(routes::JUDGE_LOGIN, &json!({"accessCode": "judge001"}))
            .await;

        assert_eq!(res.status, 401);
    }
}

mod signup {
    use super::*;

    #[tokio::test]
    async fn new_coordinator_can_sign_up_and_log_in() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Lee Chen", "email": "lee@example.com", "password": "secret1"}),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["user"]["role"], "coordinator");
        assert!(res.body["user"]["id"].as_str().unwrap().starts_with("new-"));

        let token = app.login_coordinator("lee@example.com").await;
        let me = app.get_with_token(routes::ME, &token).await;
        assert_eq!(me.status, 200);
        assert_eq!(me.body["user"]["name"], "Lee Chen");
    }

    #[tokio::test]
    async fn taken_email_is_a_conflict() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "John Again", "email": "john@example.com", "password": "secret1"}),
            )
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "EMAIL_TAKEN");
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Lee Chen", "email": "lee@example.com", "password": "12345"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod me {
    use super::*;

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::ME).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_with_token(routes::ME, "not-a-jwt").await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn judge_token_carries_judge_permissions() {
        let app = TestApp::spawn().await;
        let token = app.login_judge("JUDGE002").await;

        let res = app.get_with_token(routes::ME, &token).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["user"]["id"], "judge2");
        let permissions = res.body["permissions"].as_array().unwrap();
        assert!(permissions.contains(&json!("score:submit")));
        assert!(!permissions.contains(&json!("event:manage")));
    }
}
