// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Environment variable names understood by the Datadog serverless libraries.

pub const AWS_LAMBDA_EXEC_WRAPPER_KEY: &str = "AWS_LAMBDA_EXEC_WRAPPER";
pub const AWS_LAMBDA_EXEC_WRAPPER_VAL: &str = "/opt/datadog_wrapper";

pub const ENABLE_DD_TRACING_ENV_VAR: &str = "DD_TRACE_ENABLED";
pub const ENABLE_DD_ASM_ENV_VAR: &str = "DD_SERVERLESS_APPSEC_ENABLED";
pub const ENABLE_XRAY_TRACE_MERGING_ENV_VAR: &str = "DD_MERGE_XRAY_TRACES";
pub const INJECT_LOG_CONTEXT_ENV_VAR: &str = "DD_LOGS_INJECTION";
pub const LOG_LEVEL_ENV_VAR: &str = "DD_LOG_LEVEL";
pub const ENABLE_DD_LOGS_ENV_VAR: &str = "DD_SERVERLESS_LOGS_ENABLED";
pub const CAPTURE_LAMBDA_PAYLOAD_ENV_VAR: &str = "DD_CAPTURE_LAMBDA_PAYLOAD";
pub const DD_ENV_ENV_VAR: &str = "DD_ENV";
pub const DD_SERVICE_ENV_VAR: &str = "DD_SERVICE";
pub const DD_VERSION_ENV_VAR: &str = "DD_VERSION";
pub const DD_TAGS: &str = "DD_TAGS";
pub const DD_COLD_START_TRACING: &str = "DD_COLD_START_TRACING";
pub const DD_MIN_COLD_START_DURATION: &str = "DD_MIN_COLD_START_DURATION";
pub const DD_COLD_START_TRACE_SKIP_LIB: &str = "DD_COLD_START_TRACE_SKIP_LIB";
pub const DD_PROFILING_ENABLED: &str = "DD_PROFILING_ENABLED";
pub const DD_ENCODE_AUTHORIZER_CONTEXT: &str = "DD_ENCODE_AUTHORIZER_CONTEXT";
pub const DD_DECODE_AUTHORIZER_CONTEXT: &str = "DD_DECODE_AUTHORIZER_CONTEXT";
pub const DD_APM_FLUSH_DEADLINE_MILLISECONDS: &str = "DD_APM_FLUSH_DEADLINE_MILLISECONDS";

/// Read at build time only, never written onto a function.
pub const DD_SOURCE_CODE_INTEGRATION_ENABLED: &str = "DD_SOURCE_CODE_INTEGRATION_ENABLED";

/// Tag key carrying the commit the function was deployed from.
pub const GIT_COMMIT_SHA_TAG: &str = "git.commit.sha";
