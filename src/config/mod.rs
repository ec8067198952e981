//! Configuration loaded from the environment (and `.env`, when present).

use std::fmt;
use std::time::Duration;

use crate::error::{DustError, Result};
use crate::types::MessageContext;

pub const DEFAULT_BASE_URL: &str = "https://dust.tt";
pub const DEFAULT_USERNAME: &str = "dust-cli-user";
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";
pub const DEFAULT_SOURCE_URL_TEMPLATE: &str =
    "https://www.archives.gov/files/research/jfk/releases/2025/0318/{name}.pdf";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

pub const TOKEN_VAR: &str = "DUST_TOKEN";
pub const WORKSPACE_VAR: &str = "WLD";
pub const SPACE_VAR: &str = "SPACE_ID";
pub const DATA_SOURCE_VAR: &str = "DSID";
pub const BASE_URL_VAR: &str = "DUST_URL";
pub const USERNAME_VAR: &str = "DUST_USERNAME";
pub const TIMEZONE_VAR: &str = "DUST_TIMEZONE";
pub const SOURCE_URL_TEMPLATE_VAR: &str = "DUST_SOURCE_URL_TEMPLATE";
pub const TIMEOUT_VAR: &str = "DUST_TIMEOUT_SECS";

/// Connection settings for one Dust workspace.
///
/// Token and workspace are mandatory. Space and data source are only needed
/// by the document commands and are checked when those run.
#[derive(Clone)]
pub struct DustConfig {
    token: String,
    workspace_id: String,
    space_id: Option<String>,
    data_source_id: Option<String>,
    base_url: String,
    username: String,
    timezone: String,
    source_url_template: String,
    timeout: Duration,
}

impl fmt::Debug for DustConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DustConfig")
            .field("token", &"..")
            .field("workspace_id", &self.workspace_id)
            .field("space_id", &self.space_id)
            .field("data_source_id", &self.data_source_id)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("timezone", &self.timezone)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl DustConfig {
    pub fn new(token: impl Into<String>, workspace_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            workspace_id: workspace_id.into(),
            space_id: None,
            data_source_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            username: DEFAULT_USERNAME.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            source_url_template: DEFAULT_SOURCE_URL_TEMPLATE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from environment variables (DUST_TOKEN, WLD, SPACE_ID, DSID, DUST_URL, ...).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get(TOKEN_VAR).ok_or_else(|| DustError::missing(TOKEN_VAR))?;
        let workspace_id = get(WORKSPACE_VAR).ok_or_else(|| DustError::missing(WORKSPACE_VAR))?;
        let mut config = Self::new(token, workspace_id);

        config.space_id = get(SPACE_VAR);
        config.data_source_id = get(DATA_SOURCE_VAR);
        if let Some(url) = get(BASE_URL_VAR) {
            config.base_url = url;
        }
        if let Some(username) = get(USERNAME_VAR) {
            config.username = username;
        }
        if let Some(timezone) = get(TIMEZONE_VAR) {
            config.timezone = timezone;
        }
        if let Some(template) = get(SOURCE_URL_TEMPLATE_VAR) {
            config.source_url_template = template;
        }
        if let Some(secs) = get(TIMEOUT_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                DustError::Configuration(format!("{TIMEOUT_VAR} must be a number of seconds"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_data_source(
        mut self,
        space_id: impl Into<String>,
        data_source_id: impl Into<String>,
    ) -> Self {
        self.space_id = Some(space_id.into());
        self.data_source_id = Some(data_source_id.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub fn with_source_url_template(mut self, template: impl Into<String>) -> Self {
        self.source_url_template = template.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source_url_template(&self) -> &str {
        &self.source_url_template
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn require_space_id(&self) -> Result<&str> {
        self.space_id
            .as_deref()
            .ok_or_else(|| DustError::missing(SPACE_VAR))
    }

    pub fn require_data_source_id(&self) -> Result<&str> {
        self.data_source_id
            .as_deref()
            .ok_or_else(|| DustError::missing(DATA_SOURCE_VAR))
    }

    /// Context block attached to every message this client sends.
    pub fn message_context(&self) -> MessageContext {
        MessageContext {
            username: self.username.clone(),
            timezone: self.timezone.clone(),
        }
    }
}
