//! Catalog service - Restaurants and their daily menus.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{self, Menu, Restaurant};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{MenuRepository, RestaurantRepository};

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Add a restaurant with a unique name
    async fn create_restaurant(&self, name: String) -> AppResult<Restaurant>;

    /// Publish a menu for a restaurant, dated today
    async fn create_menu(&self, restaurant_id: Uuid, items: String) -> AppResult<Menu>;

    /// List all menus published today
    async fn today_menus(&self) -> AppResult<Vec<Menu>>;
}

/// Concrete implementation of CatalogService.
pub struct CatalogManager {
    restaurants: Arc<dyn RestaurantRepository>,
    menus: Arc<dyn MenuRepository>,
}

impl CatalogManager {
    /// Create new catalog service instance
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        menus: Arc<dyn MenuRepository>,
    ) -> Self {
        Self { restaurants, menus }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn create_restaurant(&self, name: String) -> AppResult<Restaurant> {
        // Pre-check for a friendly error; the unique constraint on the
        // name column remains the guard under concurrency
        if self.restaurants.find_by_name(&name).await?.is_some() {
            return Err(AppError::duplicate_name("Restaurant"));
        }

        self.restaurants.create(name).await
    }

    async fn create_menu(&self, restaurant_id: Uuid, items: String) -> AppResult<Menu> {
        // The foreign key rejects menus for unknown restaurants, but
        // resolving the restaurant first yields a clean 404
        self.restaurants
            .find_by_id(restaurant_id)
            .await?
            .ok_or_not_found()?;

        self.menus
            .create(restaurant_id, items, domain::today())
            .await
    }

    async fn today_menus(&self) -> AppResult<Vec<Menu>> {
        self.menus.list_by_date(domain::today()).await
    }
}
