use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    review::{
        entities::ReviewSet,
        normalizer::normalize,
        ports::{LLMClient, ReviewService},
        prompts::{system_prompt, user_prompt},
        value_objects::GenerateReviewsInput,
    },
    shop::ports::{ShopRepository, ShopService},
};

impl<S, LLM> ReviewService for Service<S, LLM>
where
    S: ShopRepository,
    LLM: LLMClient,
{
    async fn generate_reviews(&self, input: GenerateReviewsInput) -> Result<ReviewSet, CoreError> {
        // 1. Resolve shop and instruction text
        let resolved = self.resolve_prompt(&input.shop_id, &input.language)?;

        // 2. Build prompts
        let system_instruction = system_prompt(resolved.language).to_string();
        let user_instruction = user_prompt(&resolved);

        // 3. Call LLM
        let raw_completion = self
            .llm_client
            .generate(system_instruction, user_instruction)
            .await?;

        // 4. Normalize into three reviews
        let reviews = normalize(&raw_completion);

        tracing::info!(
            shop_id = %resolved.shop.id,
            language = %resolved.language,
            completion_chars = raw_completion.chars().count(),
            "reviews generated"
        );

        Ok(reviews)
    }
}
