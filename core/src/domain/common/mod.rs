use std::path::PathBuf;

pub mod entities;
pub mod services;

pub const DEFAULT_LLM_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_LLM_MODEL: &str = "deepseek-chat";

#[derive(Clone, Debug)]
pub struct ScanReviewConfig {
    pub llm: LLMConfig,
    pub registry: RegistryConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Absent keys are reported per request, the server still starts.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            temperature: 0.8,
            max_tokens: 2000,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistryConfig {
    /// JSON catalogue of shops. The built-in catalogue is used when unset.
    pub shops_file: Option<PathBuf>,
}
