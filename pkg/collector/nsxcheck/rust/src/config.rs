// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "/etc/nsx-check/config.yaml";

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub manager: ManagerConfig,
    pub operations: OperationsConfig,
    /// Per-request timeout in seconds, applied to both APIs.
    pub timeout: Option<u64>,
}

/// NSX Manager connection.
#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct ManagerConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub tls_verify: Option<bool>,
}

/// Aria Operations Suite API connection.
#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct OperationsConfig {
    pub host: String,
    pub username: String,
    pub password: String,
    pub auth_source: Option<String>,
    pub tls_verify: Option<bool>,
}

pub mod defaults {
    use std::time::Duration;

    pub const TIMEOUT: Duration = Duration::from_secs(10);
    pub const TLS_VERIFY: bool = false;
    pub const AUTH_SOURCE: &str = "LOCAL";
}

impl Config {
    pub fn timeout(&self) -> Duration {
        self.timeout.map_or(defaults::TIMEOUT, Duration::from_secs)
    }
}

impl ManagerConfig {
    pub fn tls_verify(&self) -> bool {
        self.tls_verify.unwrap_or(defaults::TLS_VERIFY)
    }
}

impl OperationsConfig {
    pub fn tls_verify(&self) -> bool {
        self.tls_verify.unwrap_or(defaults::TLS_VERIFY)
    }

    pub fn auth_source(&self) -> &str {
        self.auth_source.as_deref().unwrap_or(defaults::AUTH_SOURCE)
    }
}

/// Location of the configuration file when none is given on the command line.
pub fn config_path() -> PathBuf {
    std::env::var("NSX_CHECK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
