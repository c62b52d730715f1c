//! Authentication service - Handles signup, login and token validation.
//!
//! Uses the domain Password value object for hashing and the user
//! repository (credential store) for persistence.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_MINUTE, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "bearer")
    #[schema(example = "bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 1800)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(
        &self,
        username: String,
        password: String,
        email: Option<String>,
        full_name: Option<String>,
    ) -> AppResult<User>;

    /// Login and return a signed, time-limited bearer token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify token signature and expiry, extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a JWT for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(config.jwt_expiration_minutes);

    let claims = Claims {
        sub: user.username.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_minutes * SECONDS_PER_MINUTE,
    })
}

/// Concrete implementation of AuthService backed by the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(
        &self,
        username: String,
        password: String,
        email: Option<String>,
        full_name: Option<String>,
    ) -> AppResult<User> {
        // Friendly pre-checks; the unique constraints in the schema remain
        // the authoritative guard against concurrent signups
        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict("Username"));
        }
        if let Some(ref email) = email {
            if self.users.find_by_email(email).await?.is_some() {
                return Err(AppError::conflict("Email"));
            }
        }

        let password_hash = Password::new(&password)?.into_string();
        self.users
            .create(username, email, full_name, password_hash)
            .await
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.users.find_by_username(&username).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid usernames.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = match &user_result {
            Some(user) => user.password_hash.as_str(),
            None => dummy_hash,
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Absent user, wrong password and disabled account all fail the
        // same way; a disabled account never receives a token
        match user_result {
            Some(user) if password_valid && user.is_active() => {
                generate_token(&user, &self.config)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
