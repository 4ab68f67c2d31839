//! Turns a service exchange into an [`Outcome`] and renders it.
//!
//! Service-provided text is always escaped before it reaches the surface.

use std::fmt::Write;

use tracing::error;

use crate::models::recommendation::{ErrorBody, Outcome, RecommendationResult};
use crate::services::dispatcher::{DispatchError, Exchange};
use crate::services::validation::Rejection;
use crate::ui::markup::escape_html;
use crate::ui::surface::{SubmissionState, Surface, Tone};

pub const RECOMMENDATION_PREFIX: &str = "🌾 Recommended Crop: ";
pub const SUGGESTIONS_TITLE: &str = "💡 Suggestions for your soil conditions:";
pub const DISEASE_TITLE: &str = "🦠 Disease Symptom Suggestions:";
pub const NO_SUGGESTIONS_NOTICE: &str =
    "No specific soil suggestions for current conditions (all optimal or values not provided).";
pub const GENERIC_SERVICE_ERROR: &str = "Something went wrong on the server.";
pub const UNREACHABLE_MESSAGE: &str =
    "Something went wrong. Please check if the server is running and try again!";

/// Classify a settled exchange.
///
/// A 2xx body that is not a recommendation counts as a transport failure.
/// A non-2xx body is read best-effort; anything unreadable falls back to the
/// generic message.
pub fn interpret(exchange: Result<Exchange, DispatchError>) -> Outcome {
    let exchange = match exchange {
        Ok(exchange) => exchange,
        Err(err) => {
            error!(error = %err, "Recommendation service unreachable");
            return Outcome::TransportError(err.to_string());
        }
    };

    if exchange.success {
        let parsed = exchange
            .body
            .ok_or_else(|| "body is not JSON".to_string())
            .and_then(|body| {
                serde_json::from_value::<RecommendationResult>(body).map_err(|e| e.to_string())
            });
        return match parsed {
            Ok(result) => Outcome::Success(result),
            Err(reason) => {
                error!(status = exchange.status, %reason, "Malformed recommendation reply");
                Outcome::TransportError(format!("Malformed recommendation reply: {reason}"))
            }
        };
    }

    let message = exchange
        .body
        .and_then(|body| serde_json::from_value::<ErrorBody>(body).ok())
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
    Outcome::ServiceError(message)
}

/// Write an outcome to the surface. `Submitting -> {Success, Failure}`.
pub fn render(outcome: &Outcome, surface: &mut Surface) {
    match outcome {
        Outcome::Success(result) => {
            surface.state = SubmissionState::Success;
            surface.result_tone = Tone::Positive;
            surface.result_html = format!(
                "<strong>{RECOMMENDATION_PREFIX}</strong>{}",
                escape_html(&result.recommendation)
            );

            surface.suggestions_html = if result.suggestions.is_empty() {
                format!("<p>{NO_SUGGESTIONS_NOTICE}</p>")
            } else {
                titled_list(SUGGESTIONS_TITLE, &result.suggestions)
            };
            if !result.disease_suggestions.is_empty() {
                let diseases = titled_list(DISEASE_TITLE, &result.disease_suggestions);
                surface.suggestions_html.push_str(&diseases);
            }
        }
        Outcome::ServiceError(message) => {
            render_failure(surface, &format!("Error: {}", escape_html(message)));
        }
        Outcome::TransportError(_) => render_failure(surface, UNREACHABLE_MESSAGE),
    }
}

/// Render a submission blocked by the validation policy.
pub fn render_rejection(rejection: &Rejection, surface: &mut Surface) {
    let message = format!("Invalid input: {rejection}.");
    render_failure(surface, &format!("Error: {}", escape_html(&message)));
}

fn render_failure(surface: &mut Surface, html: &str) {
    surface.state = SubmissionState::Failure;
    surface.result_tone = Tone::Error;
    surface.result_html = format!("<p>{html}</p>");
    surface.suggestions_html.clear();
}

fn titled_list(title: &str, items: &[String]) -> String {
    let mut html = format!("<h3>{title}</h3><ul>");
    for item in items {
        let _ = write!(html, "<li>{}</li>", escape_html(item));
    }
    html.push_str("</ul>");
    html
}
