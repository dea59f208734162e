pub mod deepseek_client;

pub use deepseek_client::DeepSeekLLMClient;
