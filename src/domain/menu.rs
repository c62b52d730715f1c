//! Menu domain entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Menu domain entity.
///
/// A dated offering of items from one restaurant, the unit employees vote
/// for. A restaurant may publish more than one menu on the same day
/// (multiple specials).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub menu_date: NaiveDate,
    pub items: String,
    pub created_at: DateTime<Utc>,
}

/// Menu response (returned to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MenuResponse {
    /// Unique menu identifier
    pub id: Uuid,
    /// Owning restaurant
    pub restaurant_id: Uuid,
    /// Day this menu is offered
    #[schema(example = "2024-06-03")]
    pub menu_date: NaiveDate,
    /// Free-text menu items
    #[schema(example = "Carbonara, Tiramisu")]
    pub items: String,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id,
            restaurant_id: menu.restaurant_id,
            menu_date: menu.menu_date,
            items: menu.items,
        }
    }
}
