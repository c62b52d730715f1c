//! Menu repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::menu::{self, ActiveModel, Entity as MenuEntity};
use super::translate_insert_err;
use crate::errors::{AppError, AppResult};
use crate::domain::Menu;

/// Menu repository trait for dependency injection.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Create a menu for a restaurant on the given day.
    ///
    /// The restaurant's existence is guarded by the foreign key constraint
    /// only; duplicate same-day menus for one restaurant are allowed.
    async fn create(&self, restaurant_id: Uuid, items: String, menu_date: NaiveDate)
        -> AppResult<Menu>;

    /// List all menus offered on the given day, in storage order
    async fn list_by_date(&self, menu_date: NaiveDate) -> AppResult<Vec<Menu>>;
}

/// Concrete implementation of MenuRepository backed by SeaORM
pub struct MenuStore {
    db: DatabaseConnection,
}

impl MenuStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuRepository for MenuStore {
    async fn create(
        &self,
        restaurant_id: Uuid,
        items: String,
        menu_date: NaiveDate,
    ) -> AppResult<Menu> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            restaurant_id: Set(restaurant_id),
            menu_date: Set(menu_date),
            items: Set(items),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| translate_insert_err(e, AppError::conflict("Menu")))?;

        Ok(Menu::from(model))
    }

    async fn list_by_date(&self, menu_date: NaiveDate) -> AppResult<Vec<Menu>> {
        let models = MenuEntity::find()
            .filter(menu::Column::MenuDate.eq(menu_date))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Menu::from).collect())
    }
}
