use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    review::{entities::ReviewSet, value_objects::GenerateReviewsInput},
};

/// LLM Client trait for calling text generation models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one system and one user instruction, returns the raw completion text.
    fn generate(
        &self,
        system_instruction: String,
        user_instruction: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for review generation
#[cfg_attr(test, mockall::automock)]
pub trait ReviewService: Send + Sync {
    fn generate_reviews(
        &self,
        input: GenerateReviewsInput,
    ) -> impl Future<Output = Result<ReviewSet, CoreError>> + Send;
}
