//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    SubmitEmail { email: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitEmail { .. } => "submit_email",
        }
    }
}
