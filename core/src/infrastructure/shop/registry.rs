use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use serde::Deserialize;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shop::{entities::Shop, ports::ShopRepository, value_objects::Language},
};

const HAPPY_LAMB_PROMPT_EN: &str = "Write a Google Review style review for a Chinese hot pot restaurant. Make it authentic, detailed, and helpful for other diners. Include specific dishes you enjoyed, service quality, ambiance, and value for money. Keep it natural and conversational.";

const HAPPY_LAMB_PROMPT_CN: &str = "写一篇小红书风格的餐厅评价，包含丰富的表情符号。描述这家火锅店的用餐体验，包括菜品特色、服务感受、环境氛围和性价比。语言要生动有趣，适合在小红书平台分享。";

/// Immutable shop catalogue, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct ShopRegistry {
    shops: HashMap<String, Shop>,
}

/// Shape of one entry in a shops file, keyed by shop id:
///
/// ```json
/// { "shop_001": { "name": "...", "cuisine": "...", "prompts": { "en": "...", "cn": "..." } } }
/// ```
#[derive(Debug, Deserialize)]
struct ShopDefinition {
    name: String,
    cuisine: String,
    prompts: BTreeMap<Language, String>,
}

impl ShopRegistry {
    pub fn new(shops: impl IntoIterator<Item = Shop>) -> Result<Self, CoreError> {
        let mut registry = HashMap::new();

        for shop in shops {
            validate_shop(&shop)?;
            if registry.contains_key(&shop.id) {
                return Err(CoreError::InvalidRegistry(format!(
                    "duplicate shop id `{}`",
                    shop.id
                )));
            }
            registry.insert(shop.id.clone(), shop);
        }

        Ok(Self { shops: registry })
    }

    /// The catalogue shipped with the service.
    pub fn builtin() -> Self {
        let happy_lamb = Shop::new("shop_001", "Happy Lamb Hot Pot", "Chinese Hot Pot")
            .with_prompt(Language::En, HAPPY_LAMB_PROMPT_EN)
            .with_prompt(Language::Cn, HAPPY_LAMB_PROMPT_CN);

        Self {
            shops: HashMap::from([(happy_lamb.id.clone(), happy_lamb)]),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let definitions: BTreeMap<String, ShopDefinition> = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidRegistry(format!("malformed shops file: {}", e)))?;

        Self::new(definitions.into_iter().map(|(id, definition)| Shop {
            id,
            name: definition.name,
            cuisine: definition.cuisine,
            prompts: definition.prompts,
        }))
    }

    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::InvalidRegistry(format!("cannot read {}: {}", path.display(), e))
        })?;

        Self::from_json(&json)
    }

    pub fn shop_ids(&self) -> impl Iterator<Item = &str> {
        self.shops.keys().map(String::as_str)
    }
}

fn validate_shop(shop: &Shop) -> Result<(), CoreError> {
    if shop.id.trim().is_empty() {
        return Err(CoreError::InvalidRegistry("shop id must not be empty".to_string()));
    }

    if shop.name.trim().is_empty() {
        return Err(CoreError::InvalidRegistry(format!(
            "shop `{}` has no name",
            shop.id
        )));
    }

    if shop.prompts.is_empty() {
        return Err(CoreError::InvalidRegistry(format!(
            "shop `{}` has no prompts",
            shop.id
        )));
    }

    if let Some((language, _)) = shop
        .prompts
        .iter()
        .find(|(_, instruction)| instruction.trim().is_empty())
    {
        return Err(CoreError::InvalidRegistry(format!(
            "shop `{}` has an empty `{}` prompt",
            shop.id, language
        )));
    }

    Ok(())
}

impl ShopRepository for ShopRegistry {
    fn find_by_id(&self, shop_id: &str) -> Option<Shop> {
        self.shops.get(shop_id).cloned()
    }
}
