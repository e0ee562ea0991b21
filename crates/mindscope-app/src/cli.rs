//! CLI argument definitions for the MindScope binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "MINDSCOPE_CONFIG";
pub const PORT_ENV: &str = "MINDSCOPE_PORT";
pub const HOST_ENV: &str = "MINDSCOPE_HOST";

/// MindScope AI - a web chat assistant backed by Google Gemini.
#[derive(Parser, Debug)]
#[command(name = "mindscope", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Address to bind the web server to.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Web server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Priority: --config flag > MINDSCOPE_CONFIG > ~/.mindscope/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        pick_config_path(self.config.clone(), std::env::var(CONFIG_ENV).ok())
    }

    /// Priority: --port flag > MINDSCOPE_PORT > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        pick_port(self.port, std::env::var(PORT_ENV).ok(), config_port)
    }

    /// Priority: --host flag > MINDSCOPE_HOST > config file value.
    pub fn resolve_host(&self, config_host: &str) -> String {
        pick_host(self.host.clone(), std::env::var(HOST_ENV).ok(), config_host)
    }

    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

fn pick_config_path(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    flag.or_else(|| env.filter(|p| !p.is_empty()).map(PathBuf::from))
        .unwrap_or_else(default_config_path)
}

fn pick_port(flag: Option<u16>, env: Option<String>, config_port: u16) -> u16 {
    if let Some(p) = flag {
        return p;
    }
    if let Some(p) = env.and_then(|v| v.parse::<u16>().ok()) {
        return p;
    }
    config_port
}

fn pick_host(flag: Option<String>, env: Option<String>, config_host: &str) -> String {
    flag.or_else(|| env.filter(|h| !h.is_empty()))
        .unwrap_or_else(|| config_host.to_string())
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".mindscope").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".mindscope").join("config.toml");
    }
    PathBuf::from("config.toml")
}
