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

//! Log record and call-site location.

use std::fmt;
use std::time::SystemTime;

use crate::Level;

/// The source location of a logging call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Location<'a> {
    /// Create a location from a file path and a line number.
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// The source file as reported by the compiler or the caller.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The base name of the source file.
    pub fn filename(&self) -> &'a str {
        // paths may come from another platform's compiler, so split on both separators
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// The line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl Location<'static> {
    /// Capture the location of the caller.
    ///
    /// Propagates through functions marked `#[track_caller]`, so a wrapper that is itself
    /// `#[track_caller]` reports its own caller.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename(), self.line)
    }
}

/// Display adapter for the call-site annotation, `<file>:<line>: ` or `Unknown:0: `.
#[derive(Debug, Clone, Copy)]
pub struct CallSite<'a>(pub Option<Location<'a>>);

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(location) => write!(f, "{location}: "),
            None => f.write_str("Unknown:0: "),
        }
    }
}

/// A single message that passed its logger's threshold.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: SystemTime,

    level: Level,
    label: &'static str,
    logger: &'a str,

    // present only if the logger annotates call sites
    call_site: Option<CallSite<'a>>,

    message: &'a str,
}

impl<'a> Record<'a> {
    /// Return a builder for a record with the given level and message.
    pub fn builder(level: Level, message: &'a str) -> RecordBuilder<'a> {
        RecordBuilder {
            record: Record {
                now: SystemTime::now(),
                level,
                label: level.label(),
                logger: "",
                call_site: None,
                message,
            },
        }
    }

    /// The observed time.
    pub fn time(&self) -> SystemTime {
        self.now
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The fixed label of the severity, such as `INFO`.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The name of the logger that accepted the message.
    pub fn logger(&self) -> &'a str {
        self.logger
    }

    /// The call-site annotation, if the logger annotates call sites.
    pub fn call_site(&self) -> Option<CallSite<'a>> {
        self.call_site
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl<'a> RecordBuilder<'a> {
    /// Set the observed time. Default to the time the builder was created.
    pub fn time(mut self, now: SystemTime) -> Self {
        self.record.now = now;
        self
    }

    /// Override the label. Default to [`Level::label`].
    pub fn label(mut self, label: &'static str) -> Self {
        self.record.label = label;
        self
    }

    /// Set the logger name.
    pub fn logger(mut self, logger: &'a str) -> Self {
        self.record.logger = logger;
        self
    }

    /// Annotate the record with a call site. `None` renders as `Unknown:0: `.
    pub fn call_site(mut self, location: Option<Location<'a>>) -> Self {
        self.record.call_site = Some(CallSite(location));
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
