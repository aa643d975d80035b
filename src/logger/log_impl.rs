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

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Append;
use crate::Layout;
use crate::Level;
use crate::Trap;
use crate::record::Location;
use crate::record::Record;

/// A named logger that drops messages below its level and writes the rest to one destination.
///
/// Loggers are created through a [`Registry`](crate::Registry) and shared as `Arc<Logger>`.
/// Every method takes the logger's own lock for its whole duration: a message is checked
/// against the level, formatted, and written before any concurrent [`set_level`] or other
/// message on the same logger proceeds.
///
/// The severity methods are `#[track_caller]`. When the logger annotates call sites, the
/// reported location is the call to the severity method, or the call to the outermost
/// `#[track_caller]` function wrapping it.
///
/// [`set_level`]: Logger::set_level
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: Mutex<Level>,
    call_site: bool,
    layout: Box<dyn Layout>,
    append: Box<dyn Append>,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(
        name: String,
        level: Level,
        call_site: bool,
        layout: Box<dyn Layout>,
        append: Box<dyn Append>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            name,
            level: Mutex::new(level),
            call_site,
            layout,
            append,
            trap,
        }
    }

    // a panic in a layout or appender must not disable the logger
    fn lock(&self) -> MutexGuard<'_, Level> {
        self.level
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The name this logger is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether lines carry the `file:line: ` of the call.
    pub fn annotates_call_site(&self) -> bool {
        self.call_site
    }

    /// The current level. Messages below it are dropped.
    pub fn level(&self) -> Level {
        *self.lock()
    }

    /// Replace the current level.
    ///
    /// Any integer is accepted. Calls made after this returns observe the new level.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Level;
    /// use levelog::Registry;
    /// use levelog::append;
    ///
    /// let registry = Registry::new();
    /// let logger = registry.register(levelog::builder("app", append::Stderr::default()));
    /// logger.set_level(Level::WARNING);
    /// assert!(!logger.enabled(Level::INFO));
    /// logger.set_level(15);
    /// assert!(!logger.enabled(Level::INFO));
    /// assert!(logger.enabled(Level::WARNING));
    /// ```
    pub fn set_level(&self, level: impl Into<Level>) {
        *self.lock() = level.into();
    }

    /// Whether a message of the given severity would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= *self.lock()
    }

    /// Log a message with the `DEBUG` label.
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.write(Level::DEBUG, Some(Location::caller()), message);
    }

    /// Log a message with the `INFO` label.
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.write(Level::INFO, Some(Location::caller()), message);
    }

    /// Log a message with the `WARNING` label.
    #[track_caller]
    pub fn warning(&self, message: &str) {
        self.write(Level::WARNING, Some(Location::caller()), message);
    }

    /// Log a message with the `ERROR` label.
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.write(Level::ERROR, Some(Location::caller()), message);
    }

    /// Log a message with the `FATAL` label.
    ///
    /// If the message is written, the returned [`FatalExit`] must be used to terminate the
    /// process; [`fatal!`](crate::fatal) does that for you. If the message is dropped by the
    /// level, `None` is returned and the caller carries on.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use levelog::Registry;
    /// use levelog::append;
    ///
    /// let registry = Registry::new();
    /// let logger = registry.register(levelog::builder("app", append::Stderr::default()));
    /// if let Some(exit) = logger.fatal("cannot continue") {
    ///     exit.exit();
    /// }
    /// ```
    #[track_caller]
    #[must_use = "a written fatal message requests process termination; call `exit` on it"]
    pub fn fatal(&self, message: &str) -> Option<FatalExit<'_>> {
        self.write(Level::FATAL, Some(Location::caller()), message)
            .then_some(FatalExit { logger: self })
    }

    /// Log a message with an arbitrary severity.
    ///
    /// The label is the one of the nearest named level at or below `level`, so `15` is
    /// labelled `INFO`. Returns whether the message was written.
    #[track_caller]
    pub fn log(&self, level: impl Into<Level>, message: &str) -> bool {
        self.write(level.into(), Some(Location::caller()), message)
    }

    /// Log a message with an explicit call site.
    ///
    /// Use this from adapters that know the location of the original call. A `None` location
    /// is annotated as `Unknown:0: `. Returns whether the message was written.
    pub fn log_at(&self, level: Level, location: Option<Location<'_>>, message: &str) -> bool {
        self.write(level, location, message)
    }

    /// Flush the destination. Errors go to the trap.
    pub fn flush(&self) {
        let _guard = self.lock();
        if let Err(err) = self.append.flush() {
            self.trap.trap(&self.name, &err);
        }
    }

    fn write(&self, level: Level, location: Option<Location<'_>>, message: &str) -> bool {
        let threshold = self.lock();
        if level < *threshold {
            return false;
        }

        let mut builder = Record::builder(level, message).logger(&self.name);
        if self.call_site {
            builder = builder.call_site(location);
        }
        let record = builder.build();

        let written = self
            .layout
            .format(&record)
            .and_then(|line| self.append.append(&line));
        if let Err(err) = written {
            self.trap.trap(&self.name, &err);
        }

        // the level stays locked until the line is out
        drop(threshold);
        true
    }
}

/// A request to terminate the process, returned by [`Logger::fatal`] once the message is written.
#[must_use = "call `exit` to terminate the process"]
#[derive(Debug)]
pub struct FatalExit<'a> {
    logger: &'a Logger,
}

impl FatalExit<'_> {
    /// The exit status the process terminates with.
    pub const CODE: i32 = 1;

    /// The logger that wrote the fatal message.
    pub fn logger(&self) -> &Logger {
        self.logger
    }

    /// Flush the logger's destination and terminate the process with [`FatalExit::CODE`].
    pub fn exit(self) -> ! {
        self.logger.flush();
        std::process::exit(Self::CODE)
    }
}
