//! Catalog handlers - Restaurants and daily menus.

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
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{MenuResponse, RestaurantResponse};
use crate::errors::AppResult;

/// Restaurant creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRestaurantRequest {
    /// Unique restaurant name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Pasta Place")]
    pub name: String,
}

/// Menu creation request. The menu is dated to the current day.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMenuRequest {
    /// Restaurant the menu belongs to
    pub restaurant_id: Uuid,
    /// Free-text menu items
    #[validate(length(min = 1, message = "Items are required"))]
    #[schema(example = "Carbonara, Tiramisu")]
    pub items: String,
}

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", post(create_restaurant))
        .route("/menus", post(create_menu))
        .route("/menus/today", get(list_today_menus))
}

/// Add a restaurant
#[utoipa::path(
    post,
    path = "/restaurants",
    tag = "Catalog",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created successfully", body = RestaurantResponse),
        (status = 400, description = "Validation error or name already taken")
    )
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRestaurantRequest>,
) -> AppResult<(StatusCode, Json<RestaurantResponse>)> {
    let restaurant = state.catalog_service.create_restaurant(payload.name).await?;

    Ok((StatusCode::CREATED, Json(RestaurantResponse::from(restaurant))))
}

/// Publish a menu for today
#[utoipa::path(
    post,
    path = "/menus",
    tag = "Catalog",
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created successfully", body = MenuResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn create_menu(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMenuRequest>,
) -> AppResult<(StatusCode, Json<MenuResponse>)> {
    let menu = state
        .catalog_service
        .create_menu(payload.restaurant_id, payload.items)
        .await?;

    Ok((StatusCode::CREATED, Json(MenuResponse::from(menu))))
}

/// List today's menus
#[utoipa::path(
    get,
    path = "/menus/today",
    tag = "Catalog",
    responses(
        (status = 200, description = "Menus offered today", body = [MenuResponse])
    )
)]
pub async fn list_today_menus(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MenuResponse>>> {
    let menus = state.catalog_service.today_menus().await?;

    Ok(Json(menus.into_iter().map(MenuResponse::from).collect()))
}
