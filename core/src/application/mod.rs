use crate::{
    domain::common::{ScanReviewConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::DeepSeekLLMClient, shop::ShopRegistry},
};

pub type ScanReviewService = Service<ShopRegistry, DeepSeekLLMClient>;

pub fn create_service(config: ScanReviewConfig) -> Result<ScanReviewService, CoreError> {
    let shop_registry = match &config.registry.shops_file {
        Some(path) => {
            tracing::info!("Loading shops from {}", path.display());
            ShopRegistry::from_file(path)?
        }
        None => ShopRegistry::builtin(),
    };

    let mut shop_ids: Vec<&str> = shop_registry.shop_ids().collect();
    shop_ids.sort_unstable();
    tracing::info!(shops = ?shop_ids, "shop registry loaded");

    if config.llm.api_key.is_none() {
        tracing::warn!("No LLM API key configured, review generation will fail");
    }

    let llm_client = DeepSeekLLMClient::new(config.llm);

    Ok(Service::new(shop_registry, llm_client))
}
