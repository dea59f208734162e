use std::sync::Arc;

use crate::domain::{review::ports::LLMClient, shop::ports::ShopRepository};

pub struct Service<S, LLM>
where
    S: ShopRepository,
    LLM: LLMClient,
{
    pub(crate) shop_repository: Arc<S>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<S, LLM> Service<S, LLM>
where
    S: ShopRepository,
    LLM: LLMClient,
{
    pub fn new(shop_repository: S, llm_client: LLM) -> Self {
        Self {
            shop_repository: Arc::new(shop_repository),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<S, LLM> Clone for Service<S, LLM>
where
    S: ShopRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            shop_repository: Arc::clone(&self.shop_repository),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
