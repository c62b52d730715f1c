//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{
    Database, MenuStore, RestaurantStore, UserRepository, UserStore, VoteStore,
};
use crate::services::{
    AuthService, Authenticator, BallotBox, BallotService, CatalogManager, CatalogService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Restaurant and menu catalog
    pub catalog_service: Arc<dyn CatalogService>,
    /// Vote recording and tallying
    pub ballot_service: Arc<dyn BallotService>,
    /// Credential store, used by the auth middleware to re-resolve
    /// the token holder on every protected request
    pub users: Arc<dyn UserRepository>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire all services against the given database connection.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let conn = database.get_connection();

        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(conn.clone()));
        let restaurants = Arc::new(RestaurantStore::new(conn.clone()));
        let menus = Arc::new(MenuStore::new(conn.clone()));
        let votes = Arc::new(VoteStore::new(conn));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), config)),
            catalog_service: Arc::new(CatalogManager::new(restaurants, menus)),
            ballot_service: Arc::new(BallotBox::new(votes)),
            users,
            database,
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Intended for tests that substitute mock implementations.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        ballot_service: Arc<dyn BallotService>,
        users: Arc<dyn UserRepository>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            ballot_service,
            users,
            database,
        }
    }
}
