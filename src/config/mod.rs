//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Prefix every route is mounted under (e.g. "/aishwarya-blog")
    #[serde(default)]
    pub base_path: String,

    /// Entries in the "Latest Articles" section
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,

    /// JSON content table replacing the compiled-in one
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_latest_count() -> usize {
    3
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BLOG_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/aishwarya-blog");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("aishwarya-blog");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/aishwarya-blog");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("aishwarya-blog");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Normalize a mount prefix: "" for root, otherwise "/seg" without trailing slash
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (BLOG_PORT, BLOG_BASE_PATH, etc.)
        .add_source(
            ::config::Environment::with_prefix("BLOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Explicit precedence: BLOG_PORT > PORT > config > default
    if let Ok(port) = std::env::var("BLOG_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // PORT is what most container platforms hand us
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let mut config: Config = builder.build()?.try_deserialize()?;
    config.base_path = normalize_base_path(&config.base_path);
    if config.latest_count == 0 {
        tracing::warn!("latest_count of 0 leaves the Latest Articles section empty");
    }

    Ok(config)
}
