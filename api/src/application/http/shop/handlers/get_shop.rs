use axum::extract::{Path, State};
use scanreview_core::domain::shop::{
    entities::Shop,
    ports::ShopService,
    value_objects::{Language, ShareTarget},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub languages: Vec<ShopLanguageResponse>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopLanguageResponse {
    #[schema(example = "cn")]
    pub code: String,
    pub share_target: ShareTargetResponse,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareTargetResponse {
    pub platform: String,
    pub app_url: Option<String>,
    pub web_url: String,
}

impl From<ShareTarget> for ShareTargetResponse {
    fn from(target: ShareTarget) -> Self {
        Self {
            platform: target.platform,
            app_url: target.app_url,
            web_url: target.web_url,
        }
    }
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        let languages = shop
            .languages()
            .map(|language: Language| ShopLanguageResponse {
                code: language.code().to_string(),
                share_target: language.share_target().into(),
            })
            .collect();

        Self {
            id: shop.id,
            name: shop.name,
            cuisine: shop.cuisine,
            languages,
        }
    }
}

#[utoipa::path(
    get,
    path = "/{shop_id}",
    tag = "shop",
    summary = "Get shop",
    description = "Returns the display data of a shop and where each of its languages shares to.",
    params(
        ("shop_id" = String, Path, description = "Shop ID"),
    ),
    responses(
        (status = 200, body = ShopResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_shop(
    Path(shop_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ShopResponse>, ApiError> {
    let shop = state.service.get_shop(&shop_id).map_err(ApiError::from)?;

    Ok(Response::OK(shop.into()))
}
