use std::sync::{Arc, Mutex, OnceLock};

use crate::models::recommendation::Outcome;
use crate::models::sample::FormFields;
use crate::services::controller::{SubmissionController, SubmitError};
use crate::services::dispatcher::Dispatcher;
use crate::ui::surface::{lock, SharedSurface, Surface};

const PAGE_TEMPLATE: &str = include_str!("../../static/index.html");
const SURFACE_SLOT: &str = "{{surface}}";

/// The dashboard page: one display surface and at most one submit handler.
pub struct Page<D> {
    surface: SharedSurface,
    submit_handler: OnceLock<Arc<SubmissionController<D>>>,
}

impl<D: Dispatcher + 'static> Default for Page<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dispatcher + 'static> Page<D> {
    pub fn new() -> Self {
        Self {
            surface: Arc::new(Mutex::new(Surface::default())),
            submit_handler: OnceLock::new(),
        }
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    /// Bind the submit handler. Only the first binding takes effect; later
    /// calls are ignored and return `false`.
    pub fn bind_submit(&self, controller: Arc<SubmissionController<D>>) -> bool {
        if !Arc::ptr_eq(controller.surface(), &self.surface) {
            tracing::warn!("Refusing to bind a controller that renders to a different surface");
            return false;
        }
        match self.submit_handler.set(controller) {
            Ok(()) => {
                tracing::info!("Submit handler bound");
                true
            }
            Err(_) => {
                tracing::warn!("Submit handler already bound; ignoring duplicate registration");
                false
            }
        }
    }

    /// The submit event, routed through the button guard.
    ///
    /// The submission runs on its own task, so it settles and renders even
    /// if the caller stops waiting for it.
    pub async fn submit(&self, form: &FormFields) -> Result<Outcome, SubmitError> {
        let controller = self.submit_handler.get().ok_or(SubmitError::Unbound)?.clone();
        let form = form.clone();
        tokio::spawn(async move { controller.trigger(&form).await }).await?
    }

    pub fn render_fragment(&self) -> String {
        lock(&self.surface).to_html()
    }

    pub fn render_document(&self) -> String {
        PAGE_TEMPLATE.replace(SURFACE_SLOT, &self.render_fragment())
    }
}
