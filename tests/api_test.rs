//! Integration tests for API-level behavior.
//!
//! These tests use mock services to exercise API concerns without a
//! database connection, plus direct checks of the error-to-status mapping.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use uuid::Uuid;

use lunch_voting::domain::{User, UserResponse};
use lunch_voting::errors::{AppError, AppResult};
use lunch_voting::services::{AuthService, Claims, TokenResponse};
use lunch_voting::types::MessageResponse;

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock auth service that returns predefined responses
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(
        &self,
        username: String,
        _password: String,
        email: Option<String>,
        full_name: Option<String>,
    ) -> AppResult<User> {
        let now = Utc::now();
        Ok(User {
            id: Uuid::new_v4(),
            username,
            email,
            full_name,
            password_hash: "hashed".to_string(),
            disabled: false,
            created_at: now,
            updated_at: now,
        })
    }

    async fn login(&self, username: String, _password: String) -> AppResult<TokenResponse> {
        if username == "jdoe" {
            Ok(TokenResponse {
                access_token: "mock-token".to_string(),
                token_type: "bearer".to_string(),
                expires_in: 1800,
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == "valid-test-token" {
            Ok(Claims {
                sub: "jdoe".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

#[tokio::test]
async fn test_auth_errors_map_to_401() {
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::InvalidCredentials.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
}

#[tokio::test]
async fn test_user_conflict_maps_to_409() {
    assert_eq!(
        AppError::conflict("User").into_response().status(),
        StatusCode::CONFLICT
    );
}

#[tokio::test]
async fn test_duplicate_restaurant_name_maps_to_400() {
    assert_eq!(
        AppError::duplicate_name("Restaurant")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_already_voted_maps_to_400() {
    assert_eq!(
        AppError::AlreadyVoted.into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_inactive_user_maps_to_400() {
    assert_eq!(
        AppError::InactiveUser.into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    assert_eq!(
        AppError::NotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_validation_maps_to_400() {
    assert_eq!(
        AppError::validation("Name is required")
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_internal_maps_to_500() {
    assert_eq!(
        AppError::internal("boom").into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// Response Shape Tests
// =============================================================================

#[tokio::test]
async fn test_user_response_omits_password_hash() {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: "jdoe".to_string(),
        email: Some("jdoe@example.com".to_string()),
        full_name: Some("Jane Doe".to_string()),
        password_hash: "super-secret-hash".to_string(),
        disabled: false,
        created_at: now,
        updated_at: now,
    };

    let response = UserResponse::from(user);
    let json = serde_json::to_string(&response).unwrap();

    assert!(json.contains("jdoe"));
    assert!(!json.contains("super-secret-hash"));
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn test_user_response_skips_absent_optionals() {
    let now = Utc::now();
    let user = User {
        id: Uuid::new_v4(),
        username: "minimal".to_string(),
        email: None,
        full_name: None,
        password_hash: "hashed".to_string(),
        disabled: false,
        created_at: now,
        updated_at: now,
    };

    let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
    assert!(!json.contains("email"));
    assert!(!json.contains("full_name"));
}

#[tokio::test]
async fn test_message_response_shape() {
    let response = MessageResponse::new("vote recorded");
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"message":"vote recorded"}"#);
}

#[tokio::test]
async fn test_token_response_shape() {
    let token = TokenResponse {
        access_token: "abc".to_string(),
        token_type: "bearer".to_string(),
        expires_in: 1800,
    };

    let json = serde_json::to_string(&token).unwrap();
    assert!(json.contains(r#""token_type":"bearer""#));
    assert!(json.contains(r#""expires_in":1800"#));
}

// =============================================================================
// Mock Service Tests
// =============================================================================

#[tokio::test]
async fn test_mock_auth_service_register() {
    let service = MockAuthService;
    let result = service
        .register(
            "newbie".to_string(),
            "secret123".to_string(),
            Some("newbie@example.com".to_string()),
            None,
        )
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "newbie");
    assert!(user.is_active());
}

#[tokio::test]
async fn test_mock_auth_service_login() {
    let service = MockAuthService;
    let result = service
        .login("jdoe".to_string(), "secret123".to_string())
        .await;

    assert!(result.is_ok());
    let token = result.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert!(!token.access_token.is_empty());
}

#[tokio::test]
async fn test_mock_auth_service_rejects_unknown_user() {
    let service = MockAuthService;
    let result = service
        .login("ghost".to_string(), "secret123".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_mock_auth_service_verify_token() {
    let service = MockAuthService;

    let claims = service.verify_token("valid-test-token").unwrap();
    assert_eq!(claims.sub, "jdoe");
    assert!(claims.exp > claims.iat);

    let result = service.verify_token("bogus");
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}
