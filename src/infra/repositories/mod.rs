//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod menu_repository;
mod restaurant_repository;
mod user_repository;
mod vote_repository;

pub use menu_repository::{MenuRepository, MenuStore};
pub use restaurant_repository::{RestaurantRepository, RestaurantStore};
pub use user_repository::{UserRepository, UserStore};
pub use vote_repository::{VoteRepository, VoteStore};

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

/// Translate an insert failure into the domain error taxonomy.
///
/// The application performs friendly pre-checks before inserting, but the
/// storage-level constraints remain the authoritative guard: a unique
/// violation that slips past the pre-check becomes `conflict`, and a
/// foreign-key violation means a referenced entity does not exist.
pub(crate) fn translate_insert_err(e: DbErr, conflict: AppError) -> AppError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::NotFound,
        _ => AppError::Database(e),
    }
}
