//! Restaurant domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Restaurant domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Restaurant response (returned to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestaurantResponse {
    /// Unique restaurant identifier
    #[schema(example = "9f2c7c4e-61a5-4dd6-9c5b-0f8f8b8f2d21")]
    pub id: Uuid,
    /// Restaurant name
    #[schema(example = "Pasta Place")]
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            created_at: restaurant.created_at,
        }
    }
}
