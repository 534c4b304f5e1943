//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use waitlist_core::WaitlistService;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker. Commands are handled one at a time, so a
/// submission's check and insert never overlap with another submission.
pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, service: WaitlistService) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitEmail { email } => {
                        let outcome = service.submit(&email).await;
                        if ui_tx.send(UiEvent::SubmissionFinished(outcome)).is_err() {
                            tracing::warn!("ui event queue closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
        tracing::debug!("backend worker stopped");
    });
}
