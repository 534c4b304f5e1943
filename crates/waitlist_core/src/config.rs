use std::{collections::HashMap, fmt, fs, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "waitlist.toml";
pub const DEFAULT_TABLE: &str = "waitlist";
pub const DEFAULT_REST_PATH: &str = "rest/v1";

const STORE_URL_VARS: &[&str] = &["SUPABASE_URL", "WAITLIST_STORE_URL", "APP__STORE_URL"];
const STORE_API_KEY_VARS: &[&str] = &[
    "SUPABASE_ANON_KEY",
    "WAITLIST_STORE_API_KEY",
    "APP__STORE_API_KEY",
];
const STORE_TABLE_VARS: &[&str] = &["APP__STORE_TABLE"];
const STORE_REST_PATH_VARS: &[&str] = &["APP__STORE_REST_PATH"];

/// Raw settings as gathered from the settings file and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_url: Option<String>,
    pub store_api_key: Option<String>,
    pub store_table: String,
    pub store_rest_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_url: None,
            store_api_key: None,
            store_table: DEFAULT_TABLE.into(),
            store_rest_path: DEFAULT_REST_PATH.into(),
        }
    }
}

/// Reads `path` (or `waitlist.toml` in the working directory when present),
/// then applies environment overrides.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let mut settings = Settings::default();

    let raw = match path {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))?,
        ),
        None => fs::read_to_string(DEFAULT_SETTINGS_FILE).ok(),
    };

    if let Some(raw) = raw {
        let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
            .context("settings file must be a flat table of string values")?;
        apply_file_values(&mut settings, &file_cfg);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_values(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("store_url") {
        settings.store_url = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("store_api_key") {
        settings.store_api_key = Some(v.clone());
    }
    if let Some(v) = file_cfg.get("store_table") {
        settings.store_table = v.clone();
    }
    if let Some(v) = file_cfg.get("store_rest_path") {
        settings.store_rest_path = v.clone();
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let last_set = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| lookup(*name))
            .filter(|value| !value.trim().is_empty())
            .last()
    };

    if let Some(v) = last_set(STORE_URL_VARS) {
        settings.store_url = Some(v);
    }
    if let Some(v) = last_set(STORE_API_KEY_VARS) {
        settings.store_api_key = Some(v);
    }
    if let Some(v) = last_set(STORE_TABLE_VARS) {
        settings.store_table = v;
    }
    if let Some(v) = last_set(STORE_REST_PATH_VARS) {
        settings.store_rest_path = v;
    }
}

/// Validated connection settings for the remote store. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    table_url: String,
    api_key: String,
    table: String,
}

impl StoreConfig {
    pub fn new(store_url: &str, api_key: &str) -> Result<Self> {
        Self::from_settings(&Settings {
            store_url: Some(store_url.to_string()),
            store_api_key: Some(api_key.to_string()),
            ..Settings::default()
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_settings(&load_settings(path)?)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let store_url = non_blank(settings.store_url.as_deref())
            .ok_or_else(|| anyhow!("store URL is not configured (set SUPABASE_URL or store_url)"))?;
        let api_key = non_blank(settings.store_api_key.as_deref()).ok_or_else(|| {
            anyhow!("store API key is not configured (set SUPABASE_ANON_KEY or store_api_key)")
        })?;
        let table = non_blank(Some(settings.store_table.as_str()))
            .ok_or_else(|| anyhow!("store table name must not be empty"))?;

        let base = Url::parse(store_url)
            .with_context(|| format!("store URL '{store_url}' is not a valid URL"))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!(
                "store URL '{store_url}' must use http or https, got '{}'",
                base.scheme()
            );
        }

        let mut table_url = base.as_str().trim_end_matches('/').to_string();
        let rest_path = settings.store_rest_path.trim().trim_matches('/');
        if !rest_path.is_empty() {
            table_url.push('/');
            table_url.push_str(rest_path);
        }
        table_url.push('/');
        table_url.push_str(table);

        Ok(Self {
            table_url,
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }

    /// `<base>/<table>`, the endpoint both store calls target.
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("table_url", &self.table_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
