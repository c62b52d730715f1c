//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod menu;
pub mod restaurant;
pub mod user;
pub mod vote;
