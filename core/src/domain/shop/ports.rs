use crate::domain::{
    common::entities::app_errors::CoreError,
    shop::entities::{ResolvedPrompt, Shop},
};

/// Read-only access to the shop catalogue
#[cfg_attr(test, mockall::automock)]
pub trait ShopRepository: Send + Sync {
    fn find_by_id(&self, shop_id: &str) -> Option<Shop>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ShopService: Send + Sync {
    fn get_shop(&self, shop_id: &str) -> Result<Shop, CoreError>;

    /// Picks the instruction text of `shop_id` for `language_code`.
    /// The shop is looked up before the language is checked.
    fn resolve_prompt(
        &self,
        shop_id: &str,
        language_code: &str,
    ) -> Result<ResolvedPrompt, CoreError>;
}
