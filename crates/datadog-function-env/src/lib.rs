// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Environment helpers for instrumenting serverless functions with Datadog.
//!
//! Two concerns live here:
//!
//! - source code integration: the commit hash of the local working tree is
//!   read through `git` and appended to each function's `DD_TAGS`
//! - the fixed set of Datadog environment variables written onto each function
//!
//! Function definitions are borrowed through [`FunctionConfig`]; external
//! commands go through [`CommandRunner`] so callers can substitute their own.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod command;
pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod function;
pub mod git;
pub mod logger;
pub mod remote;

pub use command::{CommandRunner, ShellCommandRunner};
pub use config::DatadogProps;
pub use env::{
    apply_env_variables, set_dd_env_variables, set_git_environment_variables, BaseFlags,
    DatadogOptions,
};
pub use error::{CommandError, ConfigError, LoggerError};
pub use function::{FunctionConfig, FunctionEnvironment};
pub use git::{get_git_data, GitMetadata};

use tracing::debug_span;

/// Applies every environment variable described by `props` to `functions`.
///
/// Base flags and unified service tags are written on each function; the
/// commit tag is then appended once across the whole batch when source code
/// integration is enabled.
pub fn instrument<F, R>(functions: &mut [F], props: &DatadogProps, runner: &R)
where
    F: FunctionConfig,
    R: CommandRunner + ?Sized,
{
    let span = debug_span!("instrument", functions = functions.len());
    let _guard = span.enter();

    let flags = props.base_flags();
    let options = props.dd_options();
    for function in functions.iter_mut() {
        apply_env_variables(function, flags);
        set_dd_env_variables(function, &options);
    }

    if props.source_code_integration {
        set_git_environment_variables(functions.iter_mut(), runner);
    }
}
