use common::User;
use common::permission::permissions_for;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::shared::{validate_email, validate_name};

/// Request body for coordinator login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Email of a registered coordinator.
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Account password. Accepted as given.
    #[schema(example = "password")]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

/// Request body for judge login.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JudgeLoginRequest {
    /// Access code issued when the judge was added.
    #[schema(example = "JUDGE001")]
    pub access_code: String,
}

pub fn validate_judge_login_request(payload: &JudgeLoginRequest) -> Result<(), AppError> {
    if payload.access_code.trim().is_empty() {
        return Err(AppError::Validation("Access code must not be empty".into()));
    }
    Ok(())
}

/// Request body for coordinator sign-up.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SignupRequest {
    #[schema(example = "Lee Chen")]
    pub name: String,
    #[schema(example = "lee@example.com")]
    pub email: String,
    /// Password (6-128 characters).
    #[schema(example = "s3cret!")]
    pub password: String,
}

pub fn validate_signup_request(payload: &SignupRequest) -> Result<(), AppError> {
    validate_name("Name", &payload.name)?;
    validate_email(&payload.email)?;
    if payload.password.len() < 6 || payload.password.len() > 128 {
        return Err(AppError::Validation(
            "Password must be 6-128 characters".into(),
        ));
    }
    Ok(())
}

/// Successful login or sign-up response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SessionResponse {
    /// JWT bearer token.
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: User,
    /// Actions the principal may perform.
    #[schema(example = json!(["event:view", "score:submit"]))]
    pub permissions: Vec<String>,
}

impl SessionResponse {
    pub fn new(token: String, user: User) -> Self {
        let permissions = permission_names(&user);
        Self {
            token,
            user,
            permissions,
        }
    }
}

/// Current authenticated principal.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    pub user: User,
    #[schema(example = json!(["event:view", "event:manage"]))]
    pub permissions: Vec<String>,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        let permissions = permission_names(&user);
        Self { user, permissions }
    }
}

fn permission_names(user: &User) -> Vec<String> {
    permissions_for(user.role)
        .iter()
        .map(|a| a.as_str().to_string())
        .collect()
}
