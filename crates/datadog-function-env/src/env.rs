// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Environment variables written onto instrumented functions.

use crate::command::CommandRunner;
use crate::constants::{
    DD_ENV_ENV_VAR, DD_SERVICE_ENV_VAR, DD_TAGS, ENABLE_DD_LOGS_ENV_VAR, ENABLE_DD_TRACING_ENV_VAR,
    GIT_COMMIT_SHA_TAG,
};
use crate::function::FunctionConfig;
use crate::git::get_git_data;
use tracing::debug;

/// Flags written unconditionally on every function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFlags {
    pub tracing_enabled: bool,
    pub logs_enabled: bool,
}

impl Default for BaseFlags {
    fn default() -> Self {
        Self {
            tracing_enabled: true,
            logs_enabled: true,
        }
    }
}

/// Unified service tags; `None` leaves the entry alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatadogOptions {
    pub env: Option<String>,
    pub service: Option<String>,
}

/// Appends `git.commit.sha:<hash>` to the `DD_TAGS` entry of every function
/// that already has one.
///
/// Nothing is written when the git metadata is unavailable. A function whose
/// tags already carry the same commit segment is skipped.
pub fn set_git_environment_variables<'a, F, I, R>(functions: I, runner: &R)
where
    F: FunctionConfig + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut F>,
    R: CommandRunner + ?Sized,
{
    debug!("Adding source code integration...");
    let metadata = get_git_data(runner);
    if metadata.is_empty() {
        return;
    }

    let segment = format!("{GIT_COMMIT_SHA_TAG}:{}", metadata.hash);
    for function in functions {
        let Some(tags) = function.environment_value(DD_TAGS) else {
            continue;
        };
        if tags.split(',').any(|existing| existing.trim() == segment) {
            debug!("{} already tagged with {}", DD_TAGS, segment);
            continue;
        }
        let merged = format!("{tags},{segment}");
        function.add_environment(DD_TAGS, &merged);
    }
}

/// Writes the tracing and logs flags as lower-case booleans.
pub fn apply_env_variables<F: FunctionConfig + ?Sized>(function: &mut F, flags: BaseFlags) {
    debug!("Setting environment variables...");
    function.add_environment(ENABLE_DD_TRACING_ENV_VAR, &flags.tracing_enabled.to_string());
    function.add_environment(ENABLE_DD_LOGS_ENV_VAR, &flags.logs_enabled.to_string());
}

/// Writes `DD_ENV` and `DD_SERVICE` for the options that are present.
pub fn set_dd_env_variables<F: FunctionConfig + ?Sized>(
    function: &mut F,
    options: &DatadogOptions,
) {
    if let Some(env) = &options.env {
        function.add_environment(DD_ENV_ENV_VAR, env);
    }
    if let Some(service) = &options.service {
        function.add_environment(DD_SERVICE_ENV_VAR, service);
    }
}
