#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReviewsInput {
    pub shop_id: String,
    /// Raw language code as sent by the caller; parsed during resolution.
    pub language: String,
}
