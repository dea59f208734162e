use std::collections::BTreeMap;

use crate::domain::shop::value_objects::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shop {
    pub id: String,
    pub name: String,
    /// Category label shown to the model, e.g. "Chinese Hot Pot".
    pub cuisine: String,
    pub prompts: BTreeMap<Language, String>,
}

impl Shop {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: cuisine.into(),
            prompts: BTreeMap::new(),
        }
    }

    pub fn with_prompt(mut self, language: Language, instruction: impl Into<String>) -> Self {
        self.prompts.insert(language, instruction.into());
        self
    }

    pub fn prompt(&self, language: Language) -> Option<&str> {
        self.prompts.get(&language).map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.prompts.keys().copied()
    }
}

/// A shop together with the instruction text picked for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    pub shop: Shop,
    pub language: Language,
    pub instruction: String,
}
