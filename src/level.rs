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

//! Numeric severity levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::ErrorKind;

/// A severity, also used as a logger's threshold.
///
/// Levels are plain integers compared numerically. The named constants leave gaps between
/// them so that any integer, such as `15`, is a valid threshold that falls between two levels.
///
/// # Examples
///
/// ```
/// use levelog::Level;
///
/// assert!(Level::DEBUG < Level::INFO);
/// assert!(Level::from(15) > Level::INFO);
/// assert!(Level::from(15) < Level::WARNING);
/// assert_eq!(Level::WARNING.to_string(), "WARNING");
/// assert_eq!(Level::from(15).to_string(), "15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    /// Designates lower priority information. The most verbose named level.
    pub const DEBUG: Level = Level(0);
    /// Designates useful information.
    pub const INFO: Level = Level(10);
    /// Designates hazardous situations.
    pub const WARNING: Level = Level(20);
    /// Designates errors.
    pub const ERROR: Level = Level(30);
    /// Designates errors after which the process should not continue.
    pub const FATAL: Level = Level(40);

    /// Create a level from its raw value.
    pub const fn new(value: i32) -> Self {
        Level(value)
    }

    /// Return the raw value of this level.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Return the name of this level if it is one of the named constants.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Level::DEBUG => Some("DEBUG"),
            Level::INFO => Some("INFO"),
            Level::WARNING => Some("WARNING"),
            Level::ERROR => Some("ERROR"),
            Level::FATAL => Some("FATAL"),
            _ => None,
        }
    }

    /// Return the label of the nearest named level at or below this one.
    ///
    /// Values below [`Level::DEBUG`] are labelled `DEBUG`, values above [`Level::FATAL`] are
    /// labelled `FATAL`.
    pub fn label(self) -> &'static str {
        if self >= Level::FATAL {
            "FATAL"
        } else if self >= Level::ERROR {
            "ERROR"
        } else if self >= Level::WARNING {
            "WARNING"
        } else if self >= Level::INFO {
            "INFO"
        } else {
            "DEBUG"
        }
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Level(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => write!(f, "Level({})", self.0),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.pad(name),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        let s = s.trim();
        for (name, level) in [
            ("debug", Level::DEBUG),
            ("info", Level::INFO),
            ("warn", Level::WARNING),
            ("warning", Level::WARNING),
            ("err", Level::ERROR),
            ("error", Level::ERROR),
            ("fatal", Level::FATAL),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        s.parse::<i32>().map(Level).map_err(|err| {
            Error::new(ErrorKind::InvalidLevel, format!("malformed level: {s:?}")).with_source(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_are_ordered() {
        let levels = [
            Level::DEBUG,
            Level::INFO,
            Level::WARNING,
            Level::ERROR,
            Level::FATAL,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Level::default(), Level::DEBUG);
    }

    #[test]
    fn test_label_rounds_down() {
        assert_eq!(Level::from(-5).label(), "DEBUG");
        assert_eq!(Level::from(9).label(), "DEBUG");
        assert_eq!(Level::from(15).label(), "INFO");
        assert_eq!(Level::from(29).label(), "WARNING");
        assert_eq!(Level::from(35).label(), "ERROR");
        assert_eq!(Level::from(100).label(), "FATAL");
        assert_eq!(Level::from(15).name(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::DEBUG);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::WARNING);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::WARNING);
        assert_eq!(" error ".parse::<Level>().unwrap(), Level::ERROR);
        assert_eq!("fatal".parse::<Level>().unwrap(), Level::FATAL);
        assert_eq!("15".parse::<Level>().unwrap(), Level::from(15));
        assert_eq!("-3".parse::<Level>().unwrap(), Level::from(-3));

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:>7}", Level::INFO), "   INFO");
        assert_eq!(format!("{:?}", Level::from(15)), "Level(15)");
        assert_eq!(i32::from(Level::ERROR), 30);
    }
}
