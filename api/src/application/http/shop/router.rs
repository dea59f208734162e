use super::handlers::get_shop::{__path_get_shop, get_shop};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_shop))]
pub struct ShopApiDoc;

pub fn shop_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/shops/{{shop_id}}", state.args.server.root_path),
        get(get_shop),
    )
}
