use serde::Serialize;

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
mod service;
pub mod store;

pub use config::StoreConfig;
pub use context::{ClientContextProvider, ProcessClientContext, StaticClientContext};
pub use controller::{UiState, WaitlistController, WaitlistForm};
pub use error::StoreError;
pub use service::WaitlistService;
pub use store::{RestWaitlistStore, WaitlistStore};

const SUCCESS_TITLE: &str = "Successfully Added!";
const SUCCESS_MESSAGE: &str = "Welcome to Interview Lens! You're now on our exclusive waitlist and will be the first to know when we launch.";
const DUPLICATE_TITLE: &str = "Already Subscribed!";
const DUPLICATE_MESSAGE: &str = "You're already on our waitlist! We'll keep you updated.";
const ERROR_TITLE: &str = "Submission Error";
const ERROR_MESSAGE: &str = "Could not add your email at this time. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success,
    Duplicate,
    Error,
}

impl SubmitOutcome {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_TITLE,
            Self::Duplicate => DUPLICATE_TITLE,
            Self::Error => ERROR_TITLE,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Duplicate => DUPLICATE_MESSAGE,
            Self::Error => ERROR_MESSAGE,
        }
    }

    pub fn modal(self) -> ModalDescriptor {
        ModalDescriptor {
            visible: true,
            title: self.title().to_string(),
            message: self.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalDescriptor {
    pub visible: bool,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
