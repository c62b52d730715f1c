//! Vote domain entity and result aggregation types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Vote domain entity.
///
/// Immutable once cast; never updated or deleted. At most one vote exists
/// per (employee, day), enforced by a composite unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub menu_id: Uuid,
    pub vote_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Aggregated vote count for one restaurant on a given day.
///
/// Restaurants without votes are omitted, not zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantTally {
    /// Restaurant whose menus received the votes
    pub restaurant_id: Uuid,
    /// Number of votes cast today for this restaurant's menus
    #[schema(example = 4)]
    pub votes: i64,
}
