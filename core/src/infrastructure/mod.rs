pub mod llm;
pub mod shop;
