use serde::{Deserialize, Serialize};

pub const API_KEY_HEADER: &str = "apikey";
pub const PREFER_HEADER: &str = "Prefer";
pub const PREFER_RETURN_MINIMAL: &str = "return=minimal";

/// Query string for an exact-match lookup on the `email` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailFilter {
    pub email: String,
}

impl EmailFilter {
    pub fn exact(email: &str) -> Self {
        Self {
            email: format!("eq.{email}"),
        }
    }

    /// The email a filter matches, if it is an `eq.` filter.
    pub fn matched_email(&self) -> Option<&str> {
        self.email.strip_prefix("eq.")
    }
}
