//! Backend-to-UI events for the landing page.

use waitlist_core::SubmitOutcome;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    SubmissionFinished(SubmitOutcome),
    BackendFailed(String),
}
