//! Waitlist form state and the controller that drives a submission end to end.

use tracing::warn;

use crate::{service::WaitlistService, ModalDescriptor, SubmitOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub email_input: String,
    pub is_submitting: bool,
    pub modal: ModalDescriptor,
}

/// `Idle -> Submitting -> {Success | Duplicate | Error} -> Idle`.
///
/// Holds no I/O, so a UI thread can own it while the network calls run
/// elsewhere: call [`begin_submit`](Self::begin_submit), send the returned
/// email off, then feed the outcome back through
/// [`finish_submit`](Self::finish_submit).
#[derive(Debug, Default)]
pub struct WaitlistForm {
    state: UiState,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn email_input(&self) -> &str {
        &self.state.email_input
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn modal(&self) -> &ModalDescriptor {
        &self.state.modal
    }

    /// Ignored while a submission is in flight; the input is disabled then.
    pub fn set_email_input(&mut self, value: impl Into<String>) {
        if self.state.is_submitting {
            return;
        }
        self.state.email_input = value.into();
    }

    /// Returns the email to submit, or `None` when a submission is already
    /// running or the input is empty.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.state.is_submitting {
            return None;
        }

        let email = self.state.email_input.trim();
        if email.is_empty() {
            return None;
        }

        let email = email.to_string();
        self.state.is_submitting = true;
        Some(email)
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        if !self.state.is_submitting {
            warn!(?outcome, "ignoring submission outcome with no submission in flight");
            return;
        }

        self.state.is_submitting = false;
        self.state.modal = outcome.modal();
        if outcome == SubmitOutcome::Success {
            self.state.email_input.clear();
        }
    }

    /// Hides the modal; title and message stay as last shown.
    pub fn dismiss(&mut self) {
        self.state.modal.visible = false;
    }
}

/// Form state plus the service, for callers that can await the submission
/// in place.
pub struct WaitlistController {
    form: WaitlistForm,
    service: WaitlistService,
}

impl WaitlistController {
    pub fn new(service: WaitlistService) -> Self {
        Self {
            form: WaitlistForm::new(),
            service,
        }
    }

    pub fn state(&self) -> &UiState {
        self.form.state()
    }

    pub fn form_mut(&mut self) -> &mut WaitlistForm {
        &mut self.form
    }

    pub fn set_email_input(&mut self, value: impl Into<String>) {
        self.form.set_email_input(value);
    }

    /// `None` when the guard rejected the call and nothing was sent.
    pub async fn submit(&mut self) -> Option<SubmitOutcome> {
        let email = self.form.begin_submit()?;
        let outcome = self.service.submit(&email).await;
        self.form.finish_submit(outcome);
        Some(outcome)
    }

    pub fn dismiss(&mut self) {
        self.form.dismiss();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
