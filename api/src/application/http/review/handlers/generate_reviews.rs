use std::time::Duration;

use axum::{extract::State, http::StatusCode};
use scanreview_core::domain::review::{ports::ReviewService, value_objects::GenerateReviewsInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    review::validators::GenerateReviewsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, MISSING_FIELDS_MESSAGE, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateReviewsResponse {
    /// Always three entries.
    #[schema(min_items = 3, max_items = 3)]
    pub reviews: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "review",
    summary = "Generate reviews",
    description = "Generates three review suggestions for a shop in the requested language.",
    request_body = GenerateReviewsRequest,
    responses(
        (status = 200, body = GenerateReviewsResponse),
        (status = 400, description = "Missing fields or unsupported language", body = ApiErrorResponse),
        (status = 404, description = "Unknown shop", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
        (status = 502, description = "Generation service unavailable", body = ApiErrorResponse),
        (status = 504, description = "Generation timed out", body = ApiErrorResponse)
    )
)]
pub async fn generate_reviews(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateReviewsRequest>,
) -> Result<Response<GenerateReviewsResponse>, ApiError> {
    let GenerateReviewsRequest {
        shop_id: Some(shop_id),
        language: Some(language),
    } = payload
    else {
        return Err(ApiError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let request_timeout = Duration::from_secs(state.args.server.request_timeout_secs);
    let reviews = tokio::time::timeout(
        request_timeout,
        state
            .service
            .generate_reviews(GenerateReviewsInput { shop_id, language }),
    )
    .await
    .map_err(|_| {
        tracing::error!("Review generation timed out after {:?}", request_timeout);
        ApiError::UpstreamFailure(StatusCode::GATEWAY_TIMEOUT)
    })?
    .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateReviewsResponse {
        reviews: reviews.into(),
    }))
}
