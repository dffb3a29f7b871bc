// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Source code metadata of the local working tree.

use crate::command::CommandRunner;
use crate::remote::filter_and_format_remote;
use tracing::debug;

const GIT: &str = "git";
const HEAD_HASH_ARGS: [&str; 2] = ["rev-parse", "HEAD"];
const ORIGIN_URL_ARGS: [&str; 3] = ["config", "--get", "remote.origin.url"];

/// Commit hash and sanitized origin remote of the working tree.
///
/// Both fields are empty when the metadata could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitMetadata {
    pub hash: String,
    pub repo_url: String,
}

impl GitMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hash.is_empty() || self.repo_url.is_empty()
    }
}

/// Reads the current commit hash and origin remote through `runner`.
///
/// Either command failing yields empty metadata; there is no partial result.
pub fn get_git_data<R: CommandRunner + ?Sized>(runner: &R) -> GitMetadata {
    let result = runner.run(GIT, &HEAD_HASH_ARGS).and_then(|hash| {
        runner
            .run(GIT, &ORIGIN_URL_ARGS)
            .map(|url| (hash.trim().to_string(), url.trim().to_string()))
    });

    match result {
        Ok((hash, repo_url)) => GitMetadata {
            hash,
            repo_url: filter_and_format_remote(&repo_url),
        },
        Err(e) => {
            debug!("Failed to add source code integration. Error: {}", e);
            GitMetadata::default()
        }
    }
}
