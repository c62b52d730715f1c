//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, ballot_handler, catalog_handler, user_handler};
use crate::domain::{MenuResponse, RestaurantResponse, RestaurantTally, UserResponse};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the lunch voting service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lunch Voting",
        version = "0.1.0",
        description = "Internal lunch voting backend with Axum, SeaORM, and clean architecture"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::issue_token,
        // User endpoints
        user_handler::create_user,
        user_handler::get_current_user,
        // Catalog endpoints
        catalog_handler::create_restaurant,
        catalog_handler::create_menu,
        catalog_handler::list_today_menus,
        // Ballot endpoints
        ballot_handler::cast_vote,
        ballot_handler::today_results,
    ),
    components(
        schemas(
            // Domain types
            UserResponse,
            RestaurantResponse,
            MenuResponse,
            RestaurantTally,
            // Auth types
            auth_handler::LoginForm,
            TokenResponse,
            // Request types
            user_handler::CreateUserRequest,
            catalog_handler::CreateRestaurantRequest,
            catalog_handler::CreateMenuRequest,
            ballot_handler::CastVoteRequest,
            // Shared responses
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Registration and profile"),
        (name = "Catalog", description = "Restaurants and daily menus"),
        (name = "Ballot", description = "Vote casting and results")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /token"))
                        .build(),
                ),
            );
        }
    }
}
