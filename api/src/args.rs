use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use scanreview_core::domain::common::{
    DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, LLMConfig, RegistryConfig, ScanReviewConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "scanreview-api", version, about = "Scan-to-review API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub registry: RegistryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Upper bound for one review generation call.
    #[arg(long = "request-timeout-secs", env = "REQUEST_TIMEOUT_SECS", default_value_t = 60)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long = "deepseek-api-key", env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "deepseek-base-url", env = "DEEPSEEK_BASE_URL", default_value = DEFAULT_LLM_BASE_URL)]
    pub base_url: String,

    #[arg(long = "deepseek-model", env = "DEEPSEEK_MODEL", default_value = DEFAULT_LLM_MODEL)]
    pub model: String,

    #[arg(long = "llm-temperature", env = "LLM_TEMPERATURE", default_value_t = 0.8)]
    pub temperature: f32,

    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RegistryArgs {
    /// JSON file with the shop catalogue. Uses the built-in catalogue when unset.
    #[arg(long = "shops-file", env = "SHOPS_FILE")]
    pub shops_file: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ScanReviewConfig {
    fn from(args: Args) -> Self {
        ScanReviewConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                model: args.llm.model,
                temperature: args.llm.temperature,
                max_tokens: args.llm.max_tokens,
            },
            registry: RegistryConfig {
                shops_file: args.registry.shops_file,
            },
        }
    }
}
