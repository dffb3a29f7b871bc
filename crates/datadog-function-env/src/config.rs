// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{
    DD_ENV_ENV_VAR, DD_SERVICE_ENV_VAR, DD_SOURCE_CODE_INTEGRATION_ENABLED, ENABLE_DD_LOGS_ENV_VAR,
    ENABLE_DD_TRACING_ENV_VAR, LOG_LEVEL_ENV_VAR,
};
use crate::env::{BaseFlags, DatadogOptions};
use crate::error::ConfigError;
use std::env;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Options controlling how functions are instrumented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatadogProps {
    /// Value written to DD_TRACE_ENABLED
    pub enable_datadog_tracing: bool,
    /// Value written to DD_SERVERLESS_LOGS_ENABLED
    pub enable_datadog_logs: bool,
    /// Value written to DD_ENV, if any
    pub env: Option<String>,
    /// Value written to DD_SERVICE, if any
    pub service: Option<String>,
    /// Whether to tag functions with the commit they were deployed from
    pub source_code_integration: bool,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for DatadogProps {
    fn default() -> Self {
        Self {
            enable_datadog_tracing: true,
            enable_datadog_logs: true,
            env: None,
            service: None,
            source_code_integration: true,
            log_level: "info".to_string(),
        }
    }
}

impl DatadogProps {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let props = Self {
            enable_datadog_tracing: bool_from_env(ENABLE_DD_TRACING_ENV_VAR),
            enable_datadog_logs: bool_from_env(ENABLE_DD_LOGS_ENV_VAR),
            env: non_empty_from_env(DD_ENV_ENV_VAR),
            service: non_empty_from_env(DD_SERVICE_ENV_VAR),
            source_code_integration: bool_from_env(DD_SOURCE_CODE_INTEGRATION_ENABLED),
            log_level: env::var(LOG_LEVEL_ENV_VAR)
                .map(|val| val.to_lowercase())
                .unwrap_or_else(|_| "info".to_string()),
        };

        props.validate()?;
        Ok(props)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }

    #[must_use]
    pub fn base_flags(&self) -> BaseFlags {
        BaseFlags {
            tracing_enabled: self.enable_datadog_tracing,
            logs_enabled: self.enable_datadog_logs,
        }
    }

    #[must_use]
    pub fn dd_options(&self) -> DatadogOptions {
        DatadogOptions {
            env: self.env.clone(),
            service: self.service.clone(),
        }
    }
}

fn bool_from_env(key: &str) -> bool {
    env::var(key)
        .map(|val| val.to_lowercase() != "false")
        .unwrap_or(true)
}

fn non_empty_from_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|val| !val.is_empty())
}
