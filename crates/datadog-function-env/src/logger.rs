// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Log output for build tooling that embeds this crate.
//!
//! Lines look like:
//!
//! ```text
//! DD_FUNCTION_ENV | DEBUG | Adding source code integration...
//! DD_FUNCTION_ENV | DEBUG | instrument{functions=3}: Setting environment variables...
//! ```

use crate::error::LoggerError;
use std::fmt;
use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::{
    format::{self, FormatEvent, FormatFields},
    FmtContext, FormattedFields,
};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const PREFIX: &str = "DD_FUNCTION_ENV";

/// Event formatter that prefixes each line with `DD_FUNCTION_ENV` and the level.
#[derive(Debug, Clone, Copy)]
pub struct Formatter;

impl<S, N> FormatEvent<S, N> for Formatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(&mut writer, "{PREFIX} | {} | ", event.metadata().level())?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}", span.name())?;

                let ext = span.extensions();
                if let Some(fields) = ext.get::<FormattedFields<N>>() {
                    if !fields.is_empty() {
                        write!(writer, "{{{fields}}}")?;
                    }
                }
                write!(writer, ": ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs a global subscriber writing plain lines to stderr at `log_level`.
pub fn init(log_level: &str) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(log_level)
        .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(false)
        .without_time()
        .event_format(Formatter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!("Logging subsystem enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(EnvFilter::new("debug"))
            .with_writer(buffer.clone())
            .with_ansi(false)
            .event_format(Formatter)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    #[test]
    fn test_format_plain_event() {
        let output = capture(|| tracing::info!("tagged {} functions", 2));
        assert_eq!(output, "DD_FUNCTION_ENV | INFO | tagged 2 functions\n");
    }

    #[test]
    fn test_format_includes_span_scope() {
        let output = capture(|| {
            let span = tracing::debug_span!("instrument", functions = 3);
            let _guard = span.enter();
            tracing::debug!(hash = "abc123", "appending commit");
        });
        assert_eq!(
            output,
            "DD_FUNCTION_ENV | DEBUG | instrument{functions=3}: appending commit hash=\"abc123\"\n"
        );
    }

    #[test]
    fn test_format_has_no_escape_codes() {
        let output = capture(|| {
            let span = tracing::debug_span!("instrument", functions = 1);
            let _guard = span.enter();
            tracing::warn!(program = "git", "command failed");
        });
        assert!(!output.contains('\u{1b}'), "unexpected escape codes: {output:?}");
        assert_eq!(
            output,
            "DD_FUNCTION_ENV | WARN | instrument{functions=1}: command failed program=\"git\"\n"
        );
    }

    #[test]
    fn test_init_rejects_bad_filter() {
        let result = init("datadog_function_env=loud");
        assert!(matches!(result, Err(LoggerError::InvalidFilter(_))));
    }
}
