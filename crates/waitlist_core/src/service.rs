use std::sync::Arc;

use shared::domain::Submission;
use tracing::{error, info};

use crate::{
    config::StoreConfig,
    context::ClientContextProvider,
    error::StoreError,
    store::{RestWaitlistStore, WaitlistStore},
    SubmitOutcome,
};

/// Runs the duplicate check and the insert, strictly in that order.
#[derive(Clone)]
pub struct WaitlistService {
    store: Arc<dyn WaitlistStore>,
    context: Arc<dyn ClientContextProvider>,
}

impl WaitlistService {
    pub fn new(store: Arc<dyn WaitlistStore>, context: Arc<dyn ClientContextProvider>) -> Self {
        Self { store, context }
    }

    pub fn from_config(config: &StoreConfig, context: Arc<dyn ClientContextProvider>) -> Self {
        Self::new(Arc::new(RestWaitlistStore::new(config)), context)
    }

    /// Never fails: store errors are logged and reported as
    /// [`SubmitOutcome::Error`].
    pub async fn submit(&self, email: &str) -> SubmitOutcome {
        match self.check_then_insert(email).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(email, status = ?err.status(), "waitlist submission failed: {err}");
                SubmitOutcome::Error
            }
        }
    }

    async fn check_then_insert(&self, email: &str) -> Result<SubmitOutcome, StoreError> {
        let existing = self.store.find_by_email(email).await?;
        if !existing.is_empty() {
            info!(email, matches = existing.len(), "email already on waitlist");
            return Ok(SubmitOutcome::Duplicate);
        }

        // No uniqueness guard between the check and the insert; a concurrent
        // signup for the same address surfaces as an insert failure or a
        // second row, depending on the table's constraints.
        let submission = Submission::new(email, self.context.user_agent(), self.context.referrer());
        self.store.insert(&submission).await?;

        info!(email, referrer = %submission.referrer, "email added to waitlist");
        Ok(SubmitOutcome::Success)
    }
}
