//! Vote repository implementation (the ballot box).

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use super::entities::{
    menu,
    vote::{self, ActiveModel, Entity as VoteEntity},
};
use crate::errors::{AppError, AppResult};
use crate::domain::{RestaurantTally, Vote};

/// Vote repository trait for dependency injection.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find the vote an employee cast on the given day, if any
    async fn find_by_employee_and_date(
        &self,
        employee_id: Uuid,
        vote_date: NaiveDate,
    ) -> AppResult<Option<Vote>>;

    /// Record a vote for a menu on the given day.
    ///
    /// The composite unique constraint on (employee_id, vote_date) is the
    /// authoritative one-vote-per-day guard; a violation surfaces as
    /// `AlreadyVoted` even when two requests race past the pre-check.
    async fn create(&self, employee_id: Uuid, menu_id: Uuid, vote_date: NaiveDate)
        -> AppResult<Vote>;

    /// Count the day's votes per restaurant (zero-vote restaurants omitted)
    async fn tally_by_restaurant(&self, vote_date: NaiveDate) -> AppResult<Vec<RestaurantTally>>;
}

/// Row shape produced by the aggregation query
#[derive(Debug, FromQueryResult)]
struct TallyRow {
    restaurant_id: Uuid,
    votes: i64,
}

/// Concrete implementation of VoteRepository backed by SeaORM
pub struct VoteStore {
    db: DatabaseConnection,
}

impl VoteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VoteRepository for VoteStore {
    async fn find_by_employee_and_date(
        &self,
        employee_id: Uuid,
        vote_date: NaiveDate,
    ) -> AppResult<Option<Vote>> {
        let result = VoteEntity::find()
            .filter(vote::Column::EmployeeId.eq(employee_id))
            .filter(vote::Column::VoteDate.eq(vote_date))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Vote::from))
    }

    async fn create(
        &self,
        employee_id: Uuid,
        menu_id: Uuid,
        vote_date: NaiveDate,
    ) -> AppResult<Vote> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            employee_id: Set(employee_id),
            menu_id: Set(menu_id),
            vote_date: Set(vote_date),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| super::translate_insert_err(e, AppError::AlreadyVoted))?;

        Ok(Vote::from(model))
    }

    async fn tally_by_restaurant(&self, vote_date: NaiveDate) -> AppResult<Vec<RestaurantTally>> {
        let rows = VoteEntity::find()
            .select_only()
            .column_as(menu::Column::RestaurantId, "restaurant_id")
            .column_as(vote::Column::Id.count(), "votes")
            .join(JoinType::InnerJoin, vote::Relation::Menu.def())
            .filter(vote::Column::VoteDate.eq(vote_date))
            .group_by(menu::Column::RestaurantId)
            .into_model::<TallyRow>()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|row| RestaurantTally {
                restaurant_id: row.restaurant_id,
                votes: row.votes,
            })
            .collect())
    }
}
