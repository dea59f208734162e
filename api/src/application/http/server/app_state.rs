use std::sync::Arc;

use scanreview_core::application::ScanReviewService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ScanReviewService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ScanReviewService) -> Self {
        Self { args, service }
    }
}
