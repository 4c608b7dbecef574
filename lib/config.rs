//! Runtime configuration loaded from the environment.

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT, DEFAULT_MAX_PAGES, DEFAULT_SEED_TIMEOUT, ENABLE_REGISTRY_VALIDATION_ENV,
    HTTP_TIMEOUT_ENV, SEED_FROM_ENV, SEED_MAX_PAGES_ENV, SEED_TIMEOUT_ENV,
};
use crate::error::{RegistryError, RegistryResult};
use std::str::FromStr;
use std::time::Duration;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Registry configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed source locator (path, URL, catalog URL, or `embedded`). Empty disables seeding.
    pub seed_from: String,

    /// Whether publish validation checks package registry ownership.
    pub enable_registry_validation: bool,

    /// Overall deadline for one import run.
    pub seed_timeout: Duration,

    /// Timeout applied to each HTTP request.
    pub http_timeout: Duration,

    /// Maximum number of catalog pages fetched in one import.
    pub max_pages: usize,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl Config {
    /// Load configuration from `MCP_REGISTRY_*` environment variables.
    pub fn from_env() -> RegistryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RegistryResult<Self> {
        let defaults = Self::default();

        let seed_from = lookup(SEED_FROM_ENV).unwrap_or_default();

        let enable_registry_validation = match lookup(ENABLE_REGISTRY_VALIDATION_ENV) {
            Some(raw) => parse_bool(ENABLE_REGISTRY_VALIDATION_ENV, &raw)?,
            None => defaults.enable_registry_validation,
        };

        let seed_timeout = match lookup(SEED_TIMEOUT_ENV) {
            Some(raw) => Duration::from_secs(parse_value(SEED_TIMEOUT_ENV, &raw)?),
            None => defaults.seed_timeout,
        };

        let http_timeout = match lookup(HTTP_TIMEOUT_ENV) {
            Some(raw) => Duration::from_secs(parse_value(HTTP_TIMEOUT_ENV, &raw)?),
            None => defaults.http_timeout,
        };

        let max_pages = match lookup(SEED_MAX_PAGES_ENV) {
            Some(raw) => parse_value(SEED_MAX_PAGES_ENV, &raw)?,
            None => defaults.max_pages,
        };

        Ok(Self {
            seed_from,
            enable_registry_validation,
            seed_timeout,
            http_timeout,
            max_pages,
        })
    }
}

//--------------------------------------------------------------------------------------------------
// Trait Implementations
//--------------------------------------------------------------------------------------------------

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_from: String::new(),
            enable_registry_validation: true,
            seed_timeout: DEFAULT_SEED_TIMEOUT,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

fn parse_bool(key: &str, raw: &str) -> RegistryResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(RegistryError::Config(format!(
            "{} must be a boolean, got `{}`",
            key, other
        ))),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> RegistryResult<T> {
    raw.trim().parse().map_err(|_| {
        RegistryError::Config(format!("{} must be a non-negative integer, got `{}`", key, raw))
    })
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
