//! Process environment configuration
//!
//! Read once at startup and handed to the commands, so no component
//! looks up environment variables on its own.

use crate::models::{ACCESS_TOKEN_VAR, ENDPOINT_VAR, VariableMapping};

pub const ENDPOINT_ENV: &str = "ENDPOINT";
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";
pub const TOKEN_ENV: &str = "TOKEN";

/// Collection file used when none is given on the command line
pub const DEFAULT_COLLECTION_PATH: &str = "Workshop Regresion.postman_collection.json";

/// Directory generated tests are written to by default
pub const DEFAULT_OUTPUT_DIR: &str = "tests";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub endpoint: String,
    pub access_token: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            endpoint: non_empty(ENDPOINT_ENV).unwrap_or_default(),
            access_token: non_empty(ACCESS_TOKEN_ENV)
                .or_else(|| non_empty(TOKEN_ENV))
                .unwrap_or_default(),
        }
    }

    /// Variables used when no variables file is supplied
    pub fn default_variables(&self) -> VariableMapping {
        [
            (ENDPOINT_VAR, self.endpoint.as_str()),
            (ACCESS_TOKEN_VAR, self.access_token.as_str()),
        ]
        .into_iter()
        .collect()
    }
}
