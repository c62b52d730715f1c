//! Restaurant repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::restaurant::{self, ActiveModel, Entity as RestaurantEntity};
use super::translate_insert_err;
use crate::errors::{AppError, AppResult};
use crate::domain::Restaurant;

/// Restaurant repository trait for dependency injection.
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find restaurant by ID
    async fn find_by_id(&self, id: uuid::Uuid) -> AppResult<Option<Restaurant>>;

    /// Exact-match lookup by name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Restaurant>>;

    /// Create a new restaurant
    async fn create(&self, name: String) -> AppResult<Restaurant>;
}

/// Concrete implementation of RestaurantRepository backed by SeaORM
pub struct RestaurantStore {
    db: DatabaseConnection,
}

impl RestaurantStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for RestaurantStore {
    async fn find_by_id(&self, id: uuid::Uuid) -> AppResult<Option<Restaurant>> {
        let result = RestaurantEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Restaurant::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Restaurant>> {
        let result = RestaurantEntity::find()
            .filter(restaurant::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Restaurant::from))
    }

    async fn create(&self, name: String) -> AppResult<Restaurant> {
        let active_model = ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(name),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| translate_insert_err(e, AppError::duplicate_name("Restaurant")))?;

        Ok(Restaurant::from(model))
    }
}
