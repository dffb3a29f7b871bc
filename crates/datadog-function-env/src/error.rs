// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while running an external command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {}: {stderr}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{program}` produced non UTF-8 output")]
    InvalidOutput { program: String },
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur when installing the log subscriber
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}
