//! Ballot service - One vote per employee per day, plus daily results.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{self, RestaurantTally, Vote};
use crate::errors::{AppError, AppResult};
use crate::infra::VoteRepository;

/// Ballot service trait for dependency injection.
#[async_trait]
pub trait BallotService: Send + Sync {
    /// Record a vote for a menu, dated today
    async fn cast_vote(&self, employee_id: Uuid, menu_id: Uuid) -> AppResult<Vote>;

    /// Today's vote counts grouped by restaurant
    async fn today_results(&self) -> AppResult<Vec<RestaurantTally>>;
}

/// Concrete implementation of BallotService.
pub struct BallotBox {
    votes: Arc<dyn VoteRepository>,
}

impl BallotBox {
    /// Create new ballot service instance
    pub fn new(votes: Arc<dyn VoteRepository>) -> Self {
        Self { votes }
    }
}

#[async_trait]
impl BallotService for BallotBox {
    async fn cast_vote(&self, employee_id: Uuid, menu_id: Uuid) -> AppResult<Vote> {
        let today = domain::today();

        // Pre-check for a friendly error; two requests racing past it are
        // caught by the composite unique constraint on (employee, day)
        if self
            .votes
            .find_by_employee_and_date(employee_id, today)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyVoted);
        }

        self.votes.create(employee_id, menu_id, today).await
    }

    async fn today_results(&self) -> AppResult<Vec<RestaurantTally>> {
        self.votes.tally_by_restaurant(domain::today()).await
    }
}
