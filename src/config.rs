//! Session endpoint and route configuration.
//!
//! The browser bundle has no process environment, so overrides are baked in
//! at build time with `option_env!`. Every value has a default matching the
//! server's routes.

use std::time::Duration;

pub const DEFAULT_REFRESH_PATH: &str = "/auth/refresh_token";
pub const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";
pub const DEFAULT_REFRESH_TIMEOUT_MS: u64 = 10_000;

pub const LOGIN_ROUTE: &str = "/login";
pub const INSTALL_ROUTE: &str = "/install";
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub refresh_path: String,
    pub logout_path: String,
    pub login_route: String,
    pub install_route: String,
    pub refresh_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_path: DEFAULT_REFRESH_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
            login_route: LOGIN_ROUTE.to_owned(),
            install_route: INSTALL_ROUTE.to_owned(),
            refresh_timeout: Duration::from_millis(DEFAULT_REFRESH_TIMEOUT_MS),
        }
    }
}

impl SessionConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `CITADEL_REFRESH_PATH`: default `/auth/refresh_token`
    /// - `CITADEL_LOGOUT_PATH`: default `/auth/logout`
    /// - `CITADEL_REFRESH_TIMEOUT_MS`: default 10000
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("CITADEL_REFRESH_PATH"),
            option_env!("CITADEL_LOGOUT_PATH"),
            option_env!("CITADEL_REFRESH_TIMEOUT_MS"),
        )
    }

    pub(crate) fn from_values(refresh: Option<&str>, logout: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            refresh_path: refresh.map_or(defaults.refresh_path, normalize_path),
            logout_path: logout.map_or(defaults.logout_path, normalize_path),
            refresh_timeout: Duration::from_millis(parse_timeout_ms(timeout_ms)),
            ..Self::default()
        }
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REFRESH_TIMEOUT_MS)
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
