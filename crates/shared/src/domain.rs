use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Referrer reported when the client has none.
pub const DIRECT_REFERRER: &str = "direct";

const LOCAL_PART_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_DOMAIN_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionSource {
    #[default]
    Website,
}

/// Record handed to the remote store when an email joins the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub email: String,
    pub source: SubmissionSource,
    pub user_agent: String,
    pub referrer: String,
}

impl Submission {
    pub fn new(
        email: impl Into<String>,
        user_agent: impl Into<String>,
        referrer: Option<String>,
    ) -> Self {
        let referrer = referrer
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DIRECT_REFERRER.to_string());

        Self {
            email: email.into(),
            source: SubmissionSource::Website,
            user_agent: user_agent.into(),
            referrer,
        }
    }
}

/// Row returned by the existence check. The store decides which columns come
/// back, so every field is optional and an unreadable value is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    pub fn from_row(row: &Value) -> Self {
        let text = |column: &str| row.get(column).and_then(Value::as_str).map(str::to_string);
        Self {
            email: text("email"),
            source: text("source"),
            referrer: text("referrer"),
            created_at: row
                .get("created_at")
                .and_then(Value::as_str)
                .and_then(parse_timestamp),
        }
    }
}

/// `timestamptz` columns carry an offset, plain `timestamp` columns do not;
/// the latter are read as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailInputError {
    #[error("Please fill out this field.")]
    Missing,
    #[error("Please enter a valid email address.")]
    Invalid,
}

/// Applies the check a browser runs on a required `<input type="email">`
/// before it lets the form submit. Returns the sanitized value.
pub fn check_email_input(raw: &str) -> Result<&str, EmailInputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(EmailInputError::Missing);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(EmailInputError::Invalid);
    };

    if !is_valid_local_part(local) || !is_valid_domain(domain) {
        return Err(EmailInputError::Invalid);
    }

    Ok(value)
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SPECIALS.contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty() && domain.split('.').all(is_valid_domain_label)
}

fn is_valid_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    bytes.len() <= MAX_DOMAIN_LABEL_LEN
        && first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}
