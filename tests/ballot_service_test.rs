//! Ballot service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use lunch_voting::domain::{self, RestaurantTally, Vote};
use lunch_voting::errors::{AppError, AppResult};
use lunch_voting::infra::VoteRepository;
use lunch_voting::services::{BallotBox, BallotService};

mock! {
    VoteRepo {}

    #[async_trait]
    impl VoteRepository for VoteRepo {
        async fn find_by_employee_and_date(
            &self,
            employee_id: Uuid,
            vote_date: NaiveDate,
        ) -> AppResult<Option<Vote>>;
        async fn create(
            &self,
            employee_id: Uuid,
            menu_id: Uuid,
            vote_date: NaiveDate,
        ) -> AppResult<Vote>;
        async fn tally_by_restaurant(
            &self,
            vote_date: NaiveDate,
        ) -> AppResult<Vec<RestaurantTally>>;
    }
}

fn test_vote(employee_id: Uuid, menu_id: Uuid, vote_date: NaiveDate) -> Vote {
    Vote {
        id: Uuid::new_v4(),
        employee_id,
        menu_id,
        vote_date,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_cast_vote_success() {
    let employee_id = Uuid::new_v4();
    let menu_id = Uuid::new_v4();

    let mut votes = MockVoteRepo::new();
    votes
        .expect_find_by_employee_and_date()
        .with(eq(employee_id), eq(domain::today()))
        .returning(|_, _| Ok(None));
    votes
        .expect_create()
        .with(eq(employee_id), eq(menu_id), eq(domain::today()))
        .returning(|employee_id, menu_id, vote_date| {
            Ok(test_vote(employee_id, menu_id, vote_date))
        });

    let service = BallotBox::new(Arc::new(votes));
    let result = service.cast_vote(employee_id, menu_id).await;

    assert!(result.is_ok());
    let vote = result.unwrap();
    assert_eq!(vote.employee_id, employee_id);
    assert_eq!(vote.vote_date, domain::today());
}

#[tokio::test]
async fn test_second_vote_same_day_fails() {
    let employee_id = Uuid::new_v4();

    let mut votes = MockVoteRepo::new();
    votes
        .expect_find_by_employee_and_date()
        .returning(|employee_id, vote_date| {
            Ok(Some(test_vote(employee_id, Uuid::new_v4(), vote_date)))
        });
    // Pre-check short-circuits; no insert is attempted
    votes.expect_create().times(0);

    let service = BallotBox::new(Arc::new(votes));
    let result = service.cast_vote(employee_id, Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::AlreadyVoted));
}

#[tokio::test]
async fn test_constraint_violation_surfaces_as_already_voted() {
    // Two requests racing past the pre-check: the second insert hits the
    // composite unique constraint and still reports AlreadyVoted
    let mut votes = MockVoteRepo::new();
    votes
        .expect_find_by_employee_and_date()
        .returning(|_, _| Ok(None));
    votes
        .expect_create()
        .returning(|_, _, _| Err(AppError::AlreadyVoted));

    let service = BallotBox::new(Arc::new(votes));
    let result = service.cast_vote(Uuid::new_v4(), Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::AlreadyVoted));
}

#[tokio::test]
async fn test_vote_for_unknown_menu_fails() {
    let mut votes = MockVoteRepo::new();
    votes
        .expect_find_by_employee_and_date()
        .returning(|_, _| Ok(None));
    // The foreign key rejects the insert
    votes.expect_create().returning(|_, _, _| Err(AppError::NotFound));

    let service = BallotBox::new(Arc::new(votes));
    let result = service.cast_vote(Uuid::new_v4(), Uuid::new_v4()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_today_results_passes_through_tallies() {
    let restaurant_a = Uuid::new_v4();
    let restaurant_b = Uuid::new_v4();

    let mut votes = MockVoteRepo::new();
    let (a, b) = (restaurant_a, restaurant_b);
    votes
        .expect_tally_by_restaurant()
        .with(eq(domain::today()))
        .returning(move |_| {
            Ok(vec![
                RestaurantTally {
                    restaurant_id: a,
                    votes: 3,
                },
                RestaurantTally {
                    restaurant_id: b,
                    votes: 1,
                },
            ])
        });

    let service = BallotBox::new(Arc::new(votes));
    let results = service.today_results().await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0],
        RestaurantTally {
            restaurant_id: restaurant_a,
            votes: 3
        }
    );
}

#[tokio::test]
async fn test_today_results_empty_when_no_votes() {
    let mut votes = MockVoteRepo::new();
    votes
        .expect_tally_by_restaurant()
        .returning(|_| Ok(vec![]));

    let service = BallotBox::new(Arc::new(votes));
    let results = service.today_results().await.unwrap();

    assert!(results.is_empty());
}
