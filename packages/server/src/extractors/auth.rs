use axum::{extract::FromRequestParts, http::request::Parts};
use common::{Action, User, UserRole};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Authenticated principal extracted from the `Authorization: Bearer <token>` header.
///
/// Add this as a handler parameter to require authentication.
/// Permission checks happen via `require()` in the handler body.
pub struct AuthUser(pub User);

impl AuthUser {
    /// Returns `Ok(())` if the principal may perform `action`, `Err(PermissionDenied)` otherwise.
    pub fn require(&self, action: Action) -> Result<(), AppError> {
        if common::can(Some(&self.0), action) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    pub fn is_judge(&self) -> bool {
        self.0.role == UserRole::Judge
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?.ok_or(AppError::TokenMissing)?;
        decode(token, state)
    }
}

/// Like [`AuthUser`], but lets anonymous visitors through as `None`.
///
/// A header that is present but invalid is still rejected.
pub struct MaybeAuthUser(pub Option<User>);

impl MaybeAuthUser {
    pub fn require(&self, action: Action) -> Result<(), AppError> {
        if common::can(self.0.as_ref(), action) {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts)? {
            Some(token) => Ok(MaybeAuthUser(Some(decode(token, state)?.0))),
            None => Ok(MaybeAuthUser(None)),
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(auth_header) = parts.headers.get("Authorization") else {
        return Ok(None);
    };
    let auth_header = auth_header.to_str().map_err(|_| AppError::TokenInvalid)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(Some)
        .ok_or(AppError::TokenInvalid)
}

fn decode(token: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let claims =
        jwt::verify(token, &state.config.auth.jwt_secret).map_err(|_| AppError::TokenInvalid)?;
    Ok(AuthUser(claims.into()))
}
