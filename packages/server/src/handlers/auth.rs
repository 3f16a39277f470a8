use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::auth::{
    JudgeLoginRequest, LoginRequest, MeResponse, SessionResponse, SignupRequest,
    validate_judge_login_request, validate_login_request, validate_signup_request,
};
use crate::state::AppState;
use crate::utils::jwt;

/// Log in a coordinator by email.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Coordinator login",
    description = "Looks up a coordinator by exact email and issues a bearer token. The password is required but not verified.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = SessionResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unknown email (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    validate_login_request(&payload)?;

    let user = state
        .directory
        .read()
        .await
        .find_coordinator(payload.email.trim())
        .cloned()
        .ok_or(AppError::InvalidCredentials)?;

    let token = jwt::sign(&user, &state.config.auth)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    Ok(Json(SessionResponse::new(token, user)))
}

/// Log in a judge by access code.
#[utoipa::path(
    post,
    path = "/judge-login",
    tag = "Auth",
    operation_id = "judgeLogin",
    summary = "Judge login",
    description = "Looks up a judge by access code. Only judges with `active` status may log in; invited judges are refused.",
    request_body = JudgeLoginRequest,
    responses(
        (status = 200, description = "Logged in", body = SessionResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unknown code or inactive judge (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn judge_login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<JudgeLoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    validate_judge_login_request(&payload)?;

    let user = state
        .store
        .read()
        .await
        .authenticate_judge(payload.access_code.trim())
        .ok_or(AppError::InvalidCredentials)?;

    let token = jwt::sign(&user, &state.config.auth)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    Ok(Json(SessionResponse::new(token, user)))
}

/// Register a new coordinator and log them in.
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    operation_id = "signup",
    summary = "Coordinator sign-up",
    description = "Creates a coordinator account. Fails when a coordinator with the exact same email exists. The new account can log in afterwards.",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SessionResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Email already registered (EMAIL_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(email = %payload.email))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_signup_request(&payload)?;

    let user = state
        .directory
        .write()
        .await
        .register_coordinator(payload.name.trim(), payload.email.trim())
        .ok_or(AppError::EmailTaken)?;

    tracing::info!(user_id = %user.id, "Registered coordinator");

    let token = jwt::sign(&user, &state.config.auth)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    Ok((StatusCode::CREATED, Json(SessionResponse::new(token, user))))
}

/// Return the current authenticated principal.
#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "me",
    summary = "Current principal",
    responses(
        (status = 200, description = "Token principal and its permissions", body = MeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.id()))]
pub async fn me(auth_user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse::from(auth_user.0))
}
