//! Client-reported metadata attached to each submission.

pub const REFERRER_ENV_VAR: &str = "WAITLIST_REFERRER";

pub trait ClientContextProvider: Send + Sync {
    fn user_agent(&self) -> String;
    /// `None` (or blank) is recorded as a direct visit.
    fn referrer(&self) -> Option<String>;
}

/// Fixed values, for tests and for callers that already know both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticClientContext {
    pub user_agent: String,
    pub referrer: Option<String>,
}

impl StaticClientContext {
    pub fn new(user_agent: impl Into<String>, referrer: Option<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            referrer,
        }
    }
}

impl ClientContextProvider for StaticClientContext {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn referrer(&self) -> Option<String> {
        self.referrer.clone()
    }
}

/// Describes the running process: `<app>/<version> (<os>; <arch>)`, with the
/// referrer taken from `WAITLIST_REFERRER` at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessClientContext {
    user_agent: String,
}

impl ProcessClientContext {
    pub fn new(app_name: &str, app_version: &str) -> Self {
        Self {
            user_agent: format!(
                "{app_name}/{app_version} ({}; {})",
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
        }
    }
}

impl ClientContextProvider for ProcessClientContext {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn referrer(&self) -> Option<String> {
        std::env::var(REFERRER_ENV_VAR).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_context_reports_app_platform_user_agent() {
        let context = ProcessClientContext::new("interview-lens-landing", "0.1.0");
        let user_agent = context.user_agent();

        assert!(user_agent.starts_with("interview-lens-landing/0.1.0 ("));
        assert!(user_agent.contains(std::env::consts::OS));
        assert!(user_agent.ends_with(')'));
    }
}
