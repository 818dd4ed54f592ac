use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::assets::AssetMode;
use crate::llm_client::DEFAULT_COMPLETION_URL;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; the completion credential is optional
/// here and checked per chat request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub completion_api_url: String,
    pub asset_mode: AssetMode,
    pub host: String,
    pub port: u16,
    pub client_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub resume_scratch_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let app_env = resolve_app_env(optional_env("APP_ENV"), optional_env("NODE_ENV"));

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            completion_api_url: optional_env("COMPLETION_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            asset_mode: app_env
                .parse::<AssetMode>()
                .with_context(|| format!("APP_ENV/NODE_ENV has unsupported value '{app_env}'"))?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            client_dir: optional_env("CLIENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("client")),
            dist_dir: optional_env("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist/public")),
            resume_scratch_dir: optional_env("RESUME_SCRATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// `APP_ENV` wins over `NODE_ENV`, which front-end tooling usually sets;
/// neither means development.
fn resolve_app_env(app_env: Option<String>, node_env: Option<String>) -> String {
    app_env
        .or(node_env)
        .unwrap_or_else(|| "development".to_string())
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler tests: no credential, scratch files in `scratch_dir`.
    pub fn for_tests(scratch_dir: PathBuf) -> Self {
        Config {
            groq_api_key: None,
            completion_api_url: DEFAULT_COMPLETION_URL.to_string(),
            asset_mode: AssetMode::Production,
            host: "127.0.0.1".to_string(),
            port: 0,
            client_dir: PathBuf::from("client"),
            dist_dir: PathBuf::from("dist/public"),
            resume_scratch_dir: scratch_dir,
            rust_log: "debug".to_string(),
        }
    }
}
