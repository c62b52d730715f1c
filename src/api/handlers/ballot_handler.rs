//! Ballot handlers - Vote casting and daily results.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::RestaurantTally;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Vote request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    /// Voting employee
    pub employee_id: Uuid,
    /// Menu being voted for
    pub menu_id: Uuid,
}

/// Create ballot routes
pub fn ballot_routes() -> Router<AppState> {
    Router::new()
        .route("/vote", post(cast_vote))
        .route("/results", get(today_results))
}

/// Cast a vote for a menu
#[utoipa::path(
    post,
    path = "/vote",
    tag = "Ballot",
    request_body = CastVoteRequest,
    responses(
        (status = 201, description = "Vote recorded", body = MessageResponse),
        (status = 400, description = "Employee already voted today"),
        (status = 404, description = "Menu or employee not found")
    )
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(payload): Json<CastVoteRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .ballot_service
        .cast_vote(payload.employee_id, payload.menu_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("vote recorded")),
    ))
}

/// Today's vote counts per restaurant
#[utoipa::path(
    get,
    path = "/results",
    tag = "Ballot",
    responses(
        (status = 200, description = "Vote counts grouped by restaurant", body = [RestaurantTally])
    )
)]
pub async fn today_results(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantTally>>> {
    let results = state.ballot_service.today_results().await?;

    Ok(Json(results))
}
