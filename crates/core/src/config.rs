// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API endpoint configuration
//!
//! Resolution order: explicit flag, then `FQ_API_URL`, then an
//! `fq.toml` config file, then the local default. The production URL is
//! kept as a named constant for `--production` style selection.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hosted solver API
pub const PRODUCTION_URL: &str = "https://flowshop-qbsolver.onrender.com/api";
/// Local development API
pub const DEFAULT_LOCAL_URL: &str = "http://127.0.0.1:8000/api";

/// Config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "fq.toml";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "FQ_API_URL";

/// Errors from config file loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where solve requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    api: RawApi,
}

#[derive(Debug, Default, Deserialize)]
struct RawApi {
    base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_LOCAL_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn production() -> Self {
        Self::with_base_url(PRODUCTION_URL)
    }

    /// Full URL for an endpoint path like `/solve_qubo`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Load from a TOML config file. `Ok(None)` when the file does not
    /// exist or carries no `[api] base_url`.
    pub fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(raw.api.base_url.map(Self::with_base_url))
    }

    /// Apply the resolution order given already-read inputs.
    pub fn resolve_from(
        flag: Option<String>,
        env: Option<String>,
        file: Option<Self>,
    ) -> Self {
        if let Some(url) = flag {
            return Self::with_base_url(url);
        }
        if let Some(url) = env {
            return Self::with_base_url(url);
        }
        file.unwrap_or_default()
    }

    /// Resolve against the live environment and the working directory's
    /// `fq.toml`.
    pub fn resolve(flag: Option<String>) -> Result<Self, ConfigError> {
        let env = std::env::var(API_URL_ENV).ok();
        let file = Self::load_file(Path::new(CONFIG_FILE))?;
        Ok(Self::resolve_from(flag, env, file))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
