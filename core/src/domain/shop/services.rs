use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    review::ports::LLMClient,
    shop::{
        entities::{ResolvedPrompt, Shop},
        ports::{ShopRepository, ShopService},
        value_objects::Language,
    },
};

impl<S, LLM> ShopService for Service<S, LLM>
where
    S: ShopRepository,
    LLM: LLMClient,
{
    fn get_shop(&self, shop_id: &str) -> Result<Shop, CoreError> {
        if shop_id.is_empty() {
            return Err(CoreError::InvalidInput);
        }

        self.shop_repository
            .find_by_id(shop_id)
            .ok_or(CoreError::NotFound)
    }

    fn resolve_prompt(
        &self,
        shop_id: &str,
        language_code: &str,
    ) -> Result<ResolvedPrompt, CoreError> {
        if language_code.is_empty() {
            return Err(CoreError::InvalidInput);
        }

        let shop = self.get_shop(shop_id)?;
        let language: Language = language_code.parse()?;

        let instruction = shop
            .prompt(language)
            .ok_or(CoreError::UnsupportedLanguage)?
            .to_string();

        Ok(ResolvedPrompt {
            shop,
            language,
            instruction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{review::ports::MockLLMClient, shop::ports::MockShopRepository},
        infrastructure::shop::ShopRegistry,
    };

    fn registry_service() -> Service<ShopRegistry, MockLLMClient> {
        Service::new(ShopRegistry::builtin(), MockLLMClient::new())
    }

    #[test]
    fn test_resolve_builtin_shop() {
        let service = registry_service();

        let resolved = service.resolve_prompt("shop_001", "en").unwrap();
        assert_eq!(resolved.shop.name, "Happy Lamb Hot Pot");
        assert_eq!(resolved.shop.cuisine, "Chinese Hot Pot");
        assert_eq!(resolved.language, Language::En);
        assert!(resolved.instruction.starts_with("Write a Google Review style review"));

        let resolved = service.resolve_prompt("shop_001", "cn").unwrap();
        assert!(resolved.instruction.starts_with("写一篇小红书风格的餐厅评价"));
    }

    #[test]
    fn test_resolve_unknown_shop() {
        let service = registry_service();

        assert_eq!(
            service.resolve_prompt("unknown_shop", "en"),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn test_resolve_unsupported_language() {
        let service = registry_service();

        assert_eq!(
            service.resolve_prompt("shop_001", "fr"),
            Err(CoreError::UnsupportedLanguage)
        );
    }

    #[test]
    fn test_unknown_shop_wins_over_unknown_language() {
        let service = registry_service();

        assert_eq!(
            service.resolve_prompt("unknown_shop", "fr"),
            Err(CoreError::NotFound)
        );
    }

    #[test]
    fn test_shop_without_instruction_for_language() {
        let mut repository = MockShopRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| {
                Some(
                    Shop::new("shop_002", "Noodle Bar", "Ramen")
                        .with_prompt(Language::En, "Write a review."),
                )
            });

        let service = Service::new(repository, MockLLMClient::new());

        assert_eq!(
            service.resolve_prompt("shop_002", "cn"),
            Err(CoreError::UnsupportedLanguage)
        );
    }

    #[test]
    fn test_empty_keys_are_invalid_input() {
        let mut repository = MockShopRepository::new();
        repository.expect_find_by_id().never();

        let service = Service::new(repository, MockLLMClient::new());

        assert_eq!(service.resolve_prompt("", "en"), Err(CoreError::InvalidInput));
        assert_eq!(
            service.resolve_prompt("shop_001", ""),
            Err(CoreError::InvalidInput)
        );
    }
}
