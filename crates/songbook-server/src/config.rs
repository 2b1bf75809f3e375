// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::env;

/// Runtime knobs, all env-driven with serving defaults.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            max_body_bytes: 16 * 1024,
            log_json: false,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: env::var("SONGBOOK_BIND").unwrap_or(defaults.bind_addr),
            max_body_bytes: env_usize("SONGBOOK_MAX_BODY_BYTES", defaults.max_body_bytes),
            log_json: env_bool("SONGBOOK_LOG_JSON", defaults.log_json),
        }
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}
