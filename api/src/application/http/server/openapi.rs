use crate::application::http::{
    health::HealthApiDoc, review::router::ReviewApiDoc, shop::router::ShopApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ScanReview API"
    ),
    nest(
        (path = "/shops", api = ShopApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document: nested shop routes plus the top-level review and health routes.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ReviewApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
