use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scanreview_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing shopId or language";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate reviews";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Carries the status relayed to the caller; the upstream detail is
    /// only logged.
    #[error("Failed to generate reviews")]
    UpstreamFailure(StatusCode),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamFailure(status) => *status,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput => ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()),
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::UnsupportedLanguage => ApiError::BadRequest(error.to_string()),
            CoreError::ConfigurationError(message) => {
                tracing::error!("Configuration error: {}", message);
                ApiError::InternalServerError(message)
            }
            CoreError::UpstreamFailure { status, message } => {
                tracing::error!(upstream_status = ?status, "Review generation failed: {}", message);
                ApiError::UpstreamFailure(upstream_status(status))
            }
            CoreError::InvalidRegistry(message) => {
                tracing::error!("Shop registry error: {}", message);
                ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}

/// Relays 4xx/5xx upstream statuses, anything else becomes 502.
fn upstream_status(status: Option<u16>) -> StatusCode {
    status
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|code| code.is_client_error() || code.is_server_error())
        .unwrap_or(StatusCode::BAD_GATEWAY)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
/// Any rejection is reported as a 400 with the first validation message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
        })?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .values()
                .flat_map(|field_errors| field_errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| MISSING_FIELDS_MESSAGE.to_string());
            ApiError::BadRequest(message)
        })?;

        Ok(ValidateJson(value))
    }
}
