//! Auth service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;
use uuid::Uuid;

use lunch_voting::config::Config;
use lunch_voting::domain::{Password, User};
use lunch_voting::errors::{AppError, AppResult};
use lunch_voting::infra::UserRepository;
use lunch_voting::services::{AuthService, Authenticator};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn create(
            &self,
            username: String,
            email: Option<String>,
            full_name: Option<String>,
            password_hash: String,
        ) -> AppResult<User>;
    }
}

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn test_config() -> Config {
    Config::with_secret(TEST_SECRET, 30)
}

fn test_user(username: &str, password: &str, disabled: bool) -> User {
    let hash = Password::new(password).unwrap().into_string();
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: Some(format!("{}@example.com", username)),
        full_name: Some("Test User".to_string()),
        password_hash: hash,
        disabled,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn test_register_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .with(eq("jdoe"))
        .returning(|_| Ok(None));
    repo.expect_find_by_email()
        .with(eq("jdoe@example.com"))
        .returning(|_| Ok(None));
    repo.expect_create()
        .returning(|username, email, full_name, password_hash| {
            let now = Utc::now();
            Ok(User {
                id: Uuid::new_v4(),
                username,
                email,
                full_name,
                password_hash,
                disabled: false,
                created_at: now,
                updated_at: now,
            })
        });

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .register(
            "jdoe".to_string(),
            "secret123".to_string(),
            Some("jdoe@example.com".to_string()),
            Some("Jane Doe".to_string()),
        )
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "jdoe");
    // Stored hash is never the raw password
    assert_ne!(user.password_hash, "secret123");
    assert!(Password::from_hash(user.password_hash).verify("secret123"));
}

#[tokio::test]
async fn test_register_username_conflict() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .register("jdoe".to_string(), "secret123".to_string(), None, None)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_email_conflict() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_find_by_email()
        .returning(|_| Ok(Some(test_user("someone", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .register(
            "jdoe".to_string(),
            "secret123".to_string(),
            Some("taken@example.com".to_string()),
            None,
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .register("jdoe".to_string(), "nope".to_string(), None, None)
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_login_success_returns_bearer_token() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .with(eq("jdoe"))
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await;

    assert!(result.is_ok());
    let token = result.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 30 * 60);
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .login("jdoe".to_string(), "wrong-password".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .login("ghost".to_string(), "secret123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_login_disabled_user_fails_with_correct_password() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", true))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let result = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_issued_token_verifies_and_names_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let token = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await
        .unwrap();

    let claims = service.verify_token(&token.access_token).unwrap();
    assert_eq!(claims.sub, "jdoe");
    assert!(claims.exp > claims.iat);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    // Negative lifetime puts the expiry beyond the verifier's leeway
    let config = Config::with_secret(TEST_SECRET, -2);
    let service = Authenticator::new(Arc::new(repo), config);
    let token = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await
        .unwrap();

    let result = service.verify_token(&token.access_token);
    assert!(matches!(result.unwrap_err(), AppError::Jwt(_)));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(test_user("jdoe", "secret123", false))));

    let service = Authenticator::new(Arc::new(repo), test_config());
    let token = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await
        .unwrap();

    let other = Authenticator::new(
        Arc::new(MockUserRepo::new()),
        Config::with_secret("another-secret-key-of-sufficient-len", 30),
    );
    let result = other.verify_token(&token.access_token);
    assert!(matches!(result.unwrap_err(), AppError::Jwt(_)));
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let service = Authenticator::new(Arc::new(MockUserRepo::new()), test_config());
    let result = service.verify_token("not-a-jwt");
    assert!(result.is_err());
}
