use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReviewsRequest {
    #[validate(
        required(message = "Missing shopId or language"),
        length(min = 1, message = "Missing shopId or language")
    )]
    #[schema(example = "shop_001")]
    pub shop_id: Option<String>,

    #[validate(
        required(message = "Missing shopId or language"),
        length(min = 1, message = "Missing shopId or language")
    )]
    #[schema(example = "cn")]
    pub language: Option<String>,
}
