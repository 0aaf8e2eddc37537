use crate::session::{DEFAULT_COOKIE_KEY, DEFAULT_STORAGE_KEY, RefreshPolicy};
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub session: Session,
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Api {
    pub base_url: String,
    /// Keep a cookie jar so the refresh cookie travels with every call.
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,
}

#[derive(Debug, Deserialize)]
pub struct Session {
    pub backend: String, // "memory" or "file"
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Entry holding the cookie jar, stored beside the token.
    #[serde(default = "default_cookie_key")]
    pub cookie_key: String,
    #[serde(default = "default_login_route")]
    pub login_route: String,
    #[serde(default)]
    pub refresh_policy: RefreshPolicy,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

fn default_with_credentials() -> bool {
    true
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_cookie_key() -> String {
    DEFAULT_COOKIE_KEY.to_string()
}

fn default_login_route() -> String {
    "/".to_string()
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_keys_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "http://localhost:3000"

[session]
backend = "memory"

[log]
filter = "debug"
"#,
        )
        .unwrap();

        let settings = parse_settings(path.to_str()).unwrap();

        assert!(settings.api.with_credentials);
        assert_eq!(settings.session.storage_key, "accessToken");
        assert_eq!(settings.session.cookie_key, "cookies");
        assert_eq!(settings.session.login_route, "/");
        assert_eq!(settings.session.refresh_policy, RefreshPolicy::Coalesced);
        assert_eq!(settings.session.path, None);
    }

    #[test]
    fn refresh_policy_is_read_in_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("independent.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "https://api.shop.tn"
with_credentials = false

[session]
backend = "file"
path = "/tmp/backoffice/session.json"
refresh_policy = "independent"

[log]
filter = "info"
"#,
        )
        .unwrap();

        let settings = parse_settings(path.to_str()).unwrap();

        assert!(!settings.api.with_credentials);
        assert_eq!(settings.session.refresh_policy, RefreshPolicy::Independent);
        assert_eq!(
            settings.session.path.as_deref(),
            Some("/tmp/backoffice/session.json")
        );
    }
}
