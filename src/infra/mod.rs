//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repository implementations

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    MenuRepository, MenuStore, RestaurantRepository, RestaurantStore, UserRepository, UserStore,
    VoteRepository, VoteStore,
};
