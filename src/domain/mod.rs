//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod menu;
pub mod password;
pub mod restaurant;
pub mod user;
pub mod vote;

use chrono::NaiveDate;

pub use menu::{Menu, MenuResponse};
pub use password::Password;
pub use restaurant::{Restaurant, RestaurantResponse};
pub use user::{User, UserResponse};
pub use vote::{RestaurantTally, Vote};

/// The current voting day (UTC calendar date).
///
/// Menus and votes are stamped with this date on creation, and the daily
/// listing and result endpoints filter on it.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
