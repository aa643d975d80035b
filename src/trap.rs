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

//! Traps for errors raised while writing a line.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

/// A handler for errors that a logger cannot return to its caller.
///
/// Severity methods never fail; a layout or appender error is handed to the logger's trap
/// instead, together with the name of the logger that hit it.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle an error raised by the logger named `logger`.
    fn trap(&self, logger: &str, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A default trap that sends errors to standard error if possible.
///
/// If standard error is not available, the error is dropped.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, logger: &str, err: &Error) {
        let _ = writeln!(io::stderr(), "levelog: logger {logger:?} failed to write: {err}");
    }
}
