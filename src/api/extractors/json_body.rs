//! JSON body extractor with the application's error format.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections use the standard error body.
///
/// Only deserialization is checked; payloads are otherwise passed
/// through untouched.
///
/// # Example
///
/// ```rust,ignore
/// use customer_api::api::extractors::JsonBody;
/// use customer_api::domain::Customer;
///
/// async fn create(JsonBody(customer): JsonBody<Customer>) {
///     // customer has the expected shape
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
