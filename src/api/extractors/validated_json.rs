//! JSON extractor that runs validator rules after deserialization.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body extractor with validation.
///
/// Deserializes the request body and then applies the payload's
/// `Validate` rules; both failure modes surface as a 400 validation
/// error, so handlers only ever see well-formed input.
///
/// ```rust,ignore
/// async fn create_restaurant(
///     ValidatedJson(payload): ValidatedJson<CreateRestaurantRequest>,
/// ) {
///     // payload passed its validation rules
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        if let Err(errors) = value.validate() {
            return Err(AppError::validation(collect_messages(&errors)));
        }

        Ok(ValidatedJson(value))
    }
}

/// Flatten field errors into one readable line
fn collect_messages(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("{} is invalid", field)),
            }
        }
    }
    messages.join(", ")
}
