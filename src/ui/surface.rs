//! Rendered display state and the submission lifecycle.
//!
//! `Idle -> Submitting -> {Success, Failure} -> Idle`. The return to `Idle`
//! is owned by [`SubmissionGuard`]: it happens when the guard is dropped, so
//! every exit path (including a panic while rendering) re-enables the button.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use strum::Display;

use super::markup::escape_html;

pub const SUBMIT_LABEL: &str = "🌾 Get Recommended Crop";
pub const WORKING_LABEL: &str = "Calculating...";
pub const LOADING_TEXT: &str = "Calculating... Please wait...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Colour of the result block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum Tone {
    #[default]
    #[strum(serialize = "#1b5e20")]
    Positive,
    #[strum(serialize = "red")]
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: String,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

/// The page areas a submission writes to.
///
/// `result_html` and `suggestions_html` hold markup that has already been
/// through the escaping boundary.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub state: SubmissionState,
    pub result_html: String,
    pub result_tone: Tone,
    pub suggestions_html: String,
    pub button: SubmitButton,
    /// Number of submissions that have returned to `Idle`.
    pub completed: u64,
}

impl Surface {
    /// `Idle -> Submitting`.
    fn begin(&mut self) {
        self.state = SubmissionState::Submitting;
        self.result_html = LOADING_TEXT.to_string();
        self.result_tone = Tone::Positive;
        self.suggestions_html.clear();
        self.button.enabled = false;
        self.button.label = WORKING_LABEL.to_string();
    }

    /// `{Success, Failure} -> Idle`.
    fn release(&mut self) {
        self.state = SubmissionState::Idle;
        self.button = SubmitButton::default();
        self.completed += 1;
    }

    /// Markup for the result block, suggestion block and submit button.
    pub fn to_html(&self) -> String {
        let disabled = if self.button.enabled { "" } else { " disabled" };
        format!(
            concat!(
                "<button type=\"submit\"{}>{}</button>\n",
                "<div id=\"result\" style=\"color: {};\">{}</div>\n",
                "<div id=\"suggestions\">{}</div>"
            ),
            disabled,
            escape_html(&self.button.label),
            self.result_tone,
            self.result_html,
            self.suggestions_html,
        )
    }
}

pub type SharedSurface = Arc<Mutex<Surface>>;

/// Lock the surface, recovering it if a renderer panicked while holding it.
pub fn lock(surface: &SharedSurface) -> MutexGuard<'_, Surface> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds the "submission in progress" state of a surface.
///
/// Acquiring moves the surface to `Submitting`; dropping returns it to
/// `Idle`, exactly once.
pub struct SubmissionGuard<'a> {
    surface: &'a SharedSurface,
}

impl<'a> SubmissionGuard<'a> {
    /// Unconditional acquisition, used by paths that bypass the button.
    pub fn acquire(surface: &'a SharedSurface) -> Self {
        lock(surface).begin();
        Self { surface }
    }

    /// Acquire only if the submit button is enabled.
    pub fn try_acquire(surface: &'a SharedSurface) -> Option<Self> {
        let mut locked = lock(surface);
        if !locked.button.enabled {
            return None;
        }
        locked.begin();
        drop(locked);
        Some(Self { surface })
    }

    /// Do not hold the returned lock across an await point.
    pub fn surface(&self) -> MutexGuard<'_, Surface> {
        lock(self.surface)
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        lock(self.surface).release();
    }
}
