//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::User;
use crate::errors::AppError;

/// Authenticated user extracted from a verified JWT token.
///
/// Carries the freshly resolved account, not just the claims.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// re-resolves the account named in the claims, and injects the
/// CurrentUser into the request extensions. Re-resolving means a token
/// stops working the moment its account is removed or disabled.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let user = state
        .users
        .find_by_username(&claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !user.is_active() {
        return Err(AppError::InactiveUser);
    }

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}
