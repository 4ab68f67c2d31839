use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;

use crate::app_state::AppState;
use crate::models::sample::FormFields;
use crate::services::controller::SubmitError;

/// GET / — the form with the current result surface.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.render_document())
}

/// POST /submit — the form's submit event.
///
/// The page is rendered back in every case; the status code says whether
/// the submission ran.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<FormFields>,
) -> (StatusCode, Html<String>) {
    let status = match state.page.submit(&form).await {
        Ok(_) => StatusCode::OK,
        Err(SubmitError::InProgress) => StatusCode::CONFLICT,
        Err(SubmitError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmitError::Unbound) => StatusCode::SERVICE_UNAVAILABLE,
        Err(SubmitError::Interrupted(err)) => {
            tracing::error!(error = %err, "Submission task did not complete");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Html(state.page.render_document()))
}
