// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Stock API service
//!
//! Loads configuration from environment variables (optionally seeded by a `.env` file).

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8000;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    pub const RESPONSE_STYLE: &str = "RESPONSE_STYLE";
}

/// Which of the two historical response variants the service reproduces
///
/// `Json` answers `/` with `{"message": ...}` and reports health as `"UP"`.
/// `Plain` answers `/` with a bare string and reports health as `"ok"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseStyle {
    #[default]
    Json,
    Plain,
}

impl ResponseStyle {
    /// Value of the `status` field returned by `/health`
    #[must_use]
    pub fn health_status(self) -> &'static str {
        match self {
            ResponseStyle::Json => "UP",
            ResponseStyle::Plain => "ok",
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ResponseStyle::Json),
            "plain" | "text" => Ok(ResponseStyle::Plain),
            other => Err(AppError::Config(format!(
                "Unknown response style '{other}': expected 'json' or 'plain'"
            ))),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub response_style: ResponseStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            response_style: ResponseStyle::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(env_vars::HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| defaults::HOST.to_string());

        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid {} value '{}': {}. Using {}.",
                    env_vars::PORT,
                    raw,
                    e,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        let response_style = match lookup(env_vars::RESPONSE_STYLE) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}. Using default.", e);
                ResponseStyle::default()
            }),
            None => ResponseStyle::default(),
        };

        Config {
            host,
            port,
            response_style,
        }
    }

    /// Socket address the HTTP server binds to
    pub fn server_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
