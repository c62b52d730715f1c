//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Form, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::TokenResponse;

/// Login form, submitted as application/x-www-form-urlencoded
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    /// Account username
    #[schema(example = "jdoe")]
    pub username: String,
    /// Account password
    #[schema(example = "hunter2!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}

/// Exchange username and password for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    tag = "Authentication",
    request_body(
        content = LoginForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(token))
}
