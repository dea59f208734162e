use super::handlers::generate_reviews::{__path_generate_reviews, generate_reviews};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_reviews))]
pub struct ReviewApiDoc;

pub fn review_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/generate", state.args.server.root_path),
        post(generate_reviews),
    )
}
