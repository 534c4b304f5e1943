//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use waitlist_core::{SubmitOutcome, WaitlistForm};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

const BACKEND_LOST_STATUS: &str = "Backend worker stopped; restart the app";

/// Returns `false` when the command could not be queued; `status` then
/// carries the reason.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue is full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend command processor disconnected");
            *status = "Backend command processor disconnected; restart the app".to_string();
            false
        }
    }
}

/// Starts a submission from the form and hands it to the backend. A command
/// that cannot be queued completes the submission as an error right away so
/// the form never stays stuck in the submitting state.
pub fn queue_submission(
    form: &mut WaitlistForm,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    let Some(email) = form.begin_submit() else {
        return;
    };

    if !dispatch_backend_command(cmd_tx, BackendCommand::SubmitEmail { email }, status) {
        form.finish_submit(SubmitOutcome::Error);
    }
}

/// Applies every pending backend event to the form. If the backend side of
/// the channel is gone, an in-flight submission is finished as an error.
/// Returns the latest status message worth showing, if any.
pub fn apply_ui_events(form: &mut WaitlistForm, ui_rx: &Receiver<UiEvent>) -> Option<String> {
    let mut status = None;
    loop {
        match ui_rx.try_recv() {
            Ok(UiEvent::Info(message)) => tracing::debug!("{message}"),
            Ok(UiEvent::SubmissionFinished(outcome)) => form.finish_submit(outcome),
            Ok(UiEvent::BackendFailed(message)) => {
                tracing::error!("{message}");
                status = Some(message);
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                if form.is_submitting() {
                    tracing::error!("backend worker stopped with a submission in flight");
                    form.finish_submit(SubmitOutcome::Error);
                    status = Some(BACKEND_LOST_STATUS.to_string());
                }
                break;
            }
        }
    }
    status
}
