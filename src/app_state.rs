use std::sync::Arc;

use crate::services::{
    controller::SubmissionController,
    dispatcher::RecommendationClient,
    validation::ValidationPolicy,
};
use crate::ui::page::Page;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Page<RecommendationClient>>,
    pub endpoint: Arc<str>,
}

impl AppState {
    /// Build the page and bind its submit handler, once.
    pub fn new(client: RecommendationClient, policy: ValidationPolicy) -> Self {
        let endpoint: Arc<str> = Arc::from(client.endpoint());
        let page = Arc::new(Page::new());
        let controller = SubmissionController::new(client, page.surface().clone(), policy);
        page.bind_submit(Arc::new(controller));

        Self { page, endpoint }
    }
}
