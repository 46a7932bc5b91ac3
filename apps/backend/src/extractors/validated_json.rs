use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Explicit request-payload validation hook. Every inbound DTO implements
/// this; a payload that deserializes but fails its rules never reaches a
/// handler.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// JSON extractor that parses and then validates the payload, converting
/// both failure modes into the standardized problem+json error response.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    /// Extract the inner value from the ValidatedJson wrapper
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json_fut = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let json = json_fut.await.map_err(|e| {
                AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON payload: {e}"))
            })?;

            let value = json.into_inner();
            value.validate()?;
            Ok(ValidatedJson(value))
        })
    }
}
