// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! External command execution.

use crate::error::CommandError;
use std::path::PathBuf;
use std::process::Command;

/// Runs an external program to completion and captures its standard output.
pub trait CommandRunner {
    /// Run `program` with `args`, returning stdout on a zero exit status.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        (**self).run(program, args)
    }
}

/// Blocking runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner {
    working_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl ShellCommandRunner {
    /// Runner that executes in the current working directory of the process.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that executes in `dir`.
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
            envs: Vec::new(),
        }
    }

    /// Sets an extra environment variable for every spawned command.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd.envs(self.envs.iter().map(|(k, v)| (k, v)));

        let output = cmd.output().map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(CommandError::NonZeroExit {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CommandError::InvalidOutput {
            program: program.to_string(),
        })
    }
}
