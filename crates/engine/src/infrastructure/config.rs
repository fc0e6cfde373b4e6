//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

pub const DEFAULT_API_BASE_URL: &str = "https://eor-api.exile-studios.com/api";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one `<collection>.json` per collection
    pub data_dir: PathBuf,
    /// Directory holding rendered `<map id>.png` previews
    pub preview_dir: PathBuf,
    /// Upstream API root; collection dumps live at `{base}/{collection}/dump`
    pub api_base_url: String,
    /// Shared refresh secret. Unset means refresh is always denied.
    pub refresh_key: Option<String>,
    /// Records per listing page
    pub page_size: usize,
    pub server_host: String,
    pub server_port: u16,
    /// CORS allowed origins (comma-separated, or "*" for any); empty disables CORS
    pub cors_allowed_origins: Vec<String>,
    /// Drop cached previews when the map data is refreshed
    pub clear_previews_on_refresh: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(var("DATA_DIR", "data"));
        let preview_dir = lookup("PREVIEW_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("maps"));

        let page_size: usize = var("PAGE_SIZE", "25")
            .parse()
            .context("PAGE_SIZE must be a positive integer")?;
        ensure!(page_size > 0, "PAGE_SIZE must be greater than zero");

        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("SERVER_PORT must be a valid port number")?;

        let clear_previews_on_refresh = match var("CLEAR_PREVIEWS_ON_REFRESH", "true")
            .to_ascii_lowercase()
            .as_str()
        {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => anyhow::bail!("CLEAR_PREVIEWS_ON_REFRESH must be a boolean, got '{other}'"),
        };

        Ok(Self {
            data_dir,
            preview_dir,
            api_base_url: var("API_BASE_URL", DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            refresh_key: lookup("API_REFRESH_KEY").filter(|k| !k.is_empty()),
            page_size,
            server_host: var("SERVER_HOST", "0.0.0.0"),
            server_port,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            clear_previews_on_refresh,
        })
    }
}
