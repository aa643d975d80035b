// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::sync::Arc;

use crate::Level;
use crate::Logger;
use crate::record::Location;

/// Forwards records from the `log` crate facade to a named [`Logger`].
///
/// `log` levels map onto the named levels: `Trace` and `Debug` to `DEBUG`, `Info` to `INFO`,
/// `Warn` to `WARNING`, `Error` to `ERROR`. The record's file and line become the call site if
/// the logger annotates call sites; records without them are annotated `Unknown:0: `.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    /// Create a bridge to `logger`.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// The logger records are forwarded to.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARNING,
        log::Level::Info => Level::INFO,
        log::Level::Debug | log::Level::Trace => Level::DEBUG,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(level_of(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(Location::new(file, line)),
            _ => None,
        };
        let message = match record.args().as_str() {
            Some(message) => Cow::Borrowed(message),
            None => Cow::Owned(record.args().to_string()),
        };
        self.logger
            .log_at(level_of(record.level()), location, &message);
    }

    fn flush(&self) {
        self.logger.flush();
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_boxed_logger`] with a [`LogBridge`] to `logger`, so that all
/// logs from the log crate are written by it.
///
/// This should be called early in the execution of a Rust program. Any log events that occur
/// before initialization will be ignored.
///
/// This function will set the global maximum log level to `Trace`, leaving the filtering to the
/// logger's level. To override this, call [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// use levelog::append;
///
/// let logger = levelog::global()
///     .create("log-crate", append::Stderr::default(), true)
///     .unwrap();
/// if let Err(err) = levelog::bridge::try_setup_log_crate(logger) {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// log::info!("forwarded");
/// ```
pub fn try_setup_log_crate(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`].
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate(logger: Arc<Logger>) {
    try_setup_log_crate(logger).expect(
        "levelog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;
    use crate::Registry;
    use crate::append::Buffer;
    use crate::layout::TextLayout;

    #[test]
    fn test_bridge_maps_levels_and_locations() {
        let buffer = Buffer::default();
        let registry = Registry::new();
        let logger = registry.register(
            crate::builder("bridge", buffer.clone())
                .layout(TextLayout::bare())
                .call_site(true)
                .level(Level::INFO),
        );
        let bridge = LogBridge::new(logger);

        assert!(!bridge.enabled(&log::Metadata::builder().level(log::Level::Debug).build()));
        assert!(bridge.enabled(&log::Metadata::builder().level(log::Level::Warn).build()));

        bridge.log(
            &log::Record::builder()
                .args(format_args!("from {}", "log"))
                .level(log::Level::Warn)
                .file(Some("src/lib.rs"))
                .line(Some(7))
                .build(),
        );
        bridge.log(
            &log::Record::builder()
                .args(format_args!("no location"))
                .level(log::Level::Error)
                .build(),
        );
        bridge.log(
            &log::Record::builder()
                .args(format_args!("dropped"))
                .level(log::Level::Trace)
                .build(),
        );

        assert_eq!(
            buffer.lines(),
            vec!["WARNING: lib.rs:7: from log", "ERROR: Unknown:0: no location"]
        );
    }
}
