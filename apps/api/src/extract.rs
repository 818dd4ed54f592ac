//! Body extractor shared by the API handlers.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::errors::AppError;

/// Deserializes a request body sent either as JSON or as
/// `application/x-www-form-urlencoded`.
///
/// Handlers take `Result<ApiBody<T>, BodyRejection>` so each endpoint can
/// answer a bad body with its own 400 message.
#[derive(Debug)]
pub struct ApiBody<T>(pub T);

/// Why a body could not be turned into `T`. The reason is logged, never returned.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BodyRejection(String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Unparseable request body: {}", self.0);
        AppError::validation("Invalid request body").into_response()
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| BodyRejection(e.body_text()))?;
            return Ok(ApiBody(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| BodyRejection(e.body_text()))?;
        Ok(ApiBody(value))
    }
}
