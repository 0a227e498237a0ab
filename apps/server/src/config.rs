// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Server configuration loaded from environment variables.

use lux_lite_core::catalog::{DEFAULT_DAILY_USAGE_HOURS, DEFAULT_ENERGY_COST_PER_KWH};
use lux_lite_core::UsageProfile;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Maximum request body size in KB.
    pub max_body_kb: usize,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Allowed CORS origins (comma-separated, or "*" for any origin).
    pub cors_origins: Vec<String>,
    /// Electricity price per kWh used for energy costs.
    pub energy_cost_per_kwh: f64,
    /// Hours per day the lights are assumed to be on.
    pub daily_usage_hours: f64,
    /// Emit JSON log lines instead of the pretty format.
    pub log_json: bool,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Keep `usage` when energy figures stay finite with it, otherwise fall
/// back to the catalog defaults.
fn usable(usage: UsageProfile) -> UsageProfile {
    match usage.validate() {
        Ok(()) => usage,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring configured usage, using defaults");
            UsageProfile::default()
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let usage = usable(UsageProfile {
            daily_hours: env_or("DAILY_USAGE_HOURS", DEFAULT_DAILY_USAGE_HOURS),
            cost_per_kwh: env_or("ENERGY_COST_PER_KWH", DEFAULT_ENERGY_COST_PER_KWH),
        });
        Self {
            port: env_or("PORT", 8080),
            max_body_kb: env_or("MAX_BODY_KB", 64),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            energy_cost_per_kwh: usage.cost_per_kwh,
            daily_usage_hours: usage.daily_hours,
            log_json: std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json"),
        }
    }

    /// Usage assumptions applied to every energy calculation.
    pub fn usage(&self) -> UsageProfile {
        UsageProfile {
            daily_hours: self.daily_usage_hours,
            cost_per_kwh: self.energy_cost_per_kwh,
        }
    }

    /// True when any origin may call the API.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            max_body_kb: 64,
            request_timeout_secs: 30,
            cors_origins: vec!["*".into()],
            energy_cost_per_kwh: DEFAULT_ENERGY_COST_PER_KWH,
            daily_usage_hours: DEFAULT_DAILY_USAGE_HOURS,
            log_json: false,
        }
    }
}
