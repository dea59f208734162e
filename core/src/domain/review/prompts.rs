use crate::domain::shop::{entities::ResolvedPrompt, value_objects::Language};

const SYSTEM_PROMPT_EN: &str = "You are a professional food critic. Generate 3 authentic, natural restaurant reviews suitable for sharing on social media platforms. Each review should have a different style and perspective.";

const SYSTEM_PROMPT_CN: &str = "你是一位专业的美食评论家，擅长撰写生动有趣的餐厅评价。请生成3篇不同风格的评价，每篇都要真实自然，适合在社交媒体上分享。";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => SYSTEM_PROMPT_EN,
        Language::Cn => SYSTEM_PROMPT_CN,
    }
}

pub fn user_prompt(resolved: &ResolvedPrompt) -> String {
    format!(
        "{}\n\nRestaurant: {}\nCuisine: {}\n\nPlease generate exactly 3 reviews, each on a new line.",
        resolved.instruction, resolved.shop.name, resolved.shop.cuisine
    )
}
