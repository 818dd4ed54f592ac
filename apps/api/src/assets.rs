//! Front-end serving for everything outside `/api`.
//!
//! Exactly one strategy is chosen at startup from `APP_ENV`:
//! - development: the client template is re-read on every page request and
//!   its entry script gets a cache-busting query, other files come straight
//!   from the client source directory.
//! - production: the pre-built output directory, with unknown paths falling
//!   back to its `index.html` so client-side routes resolve.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Result};
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

const ENTRY_SCRIPT: &str = r#"src="/src/main.tsx""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetMode {
    Development,
    Production,
}

impl FromStr for AssetMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AssetMode::Development),
            "production" | "prod" => Ok(AssetMode::Production),
            other => bail!("expected 'development' or 'production', got '{other}'"),
        }
    }
}

/// Rewrites the entry script reference so every page load fetches it anew.
pub fn bust_entry_script(template: &str, version: &str) -> String {
    template.replace(
        ENTRY_SCRIPT,
        &format!(r#"src="/src/main.tsx?v={version}""#),
    )
}

async fn dev_index(State(template): State<PathBuf>) -> Result<Html<String>, AppError> {
    let source = tokio::fs::read_to_string(&template)
        .await
        .map_err(|e| AppError::io("Failed to load client template", e))?;
    Ok(Html(bust_entry_script(&source, &Uuid::new_v4().simple().to_string())))
}

fn development_router(client_dir: &Path) -> Result<Router> {
    let template = client_dir.join("index.html");
    if !template.is_file() {
        bail!(
            "Could not find the client template: {}, the development server cannot start",
            template.display()
        );
    }
    info!("Serving client sources from {} (development)", client_dir.display());

    let index = get(dev_index).with_state(template);
    let files = ServeDir::new(client_dir)
        .append_index_html_on_directories(false)
        .fallback(index.clone());

    Ok(Router::new()
        .route("/", index)
        .fallback_service(files))
}

fn production_router(dist_dir: &Path) -> Result<Router> {
    if !dist_dir.is_dir() {
        bail!(
            "Could not find the build directory: {}, make sure to build the client first",
            dist_dir.display()
        );
    }
    info!("Serving built client from {} (production)", dist_dir.display());

    let files = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));
    Ok(Router::new().fallback_service(files))
}

/// Builds the asset router for `mode`. Fails when the directory the mode
/// depends on is missing, which stops the process before it starts listening.
pub fn build_asset_router(mode: AssetMode, client_dir: &Path, dist_dir: &Path) -> Result<Router> {
    match mode {
        AssetMode::Development => development_router(client_dir),
        AssetMode::Production => production_router(dist_dir),
    }
}
