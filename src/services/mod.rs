//! Services layer - Business logic
//!
//! Services own the application rules and orchestrate the repositories.
//! Each service is a trait so handlers and tests can swap implementations.

pub mod auth_service;
pub mod ballot_service;
pub mod catalog_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use ballot_service::{BallotBox, BallotService};
pub use catalog_service::{CatalogManager, CatalogService};
