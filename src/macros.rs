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

/// Log a formatted message with the `DEBUG` label.
///
/// ```
/// use levelog::Registry;
/// use levelog::append;
///
/// let registry = Registry::new();
/// let logger = registry.register(levelog::builder("app", append::Stderr::default()));
/// levelog::debug!(logger, "loaded {} entries", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(&::std::format!($($arg)+))
    };
}

/// Log a formatted message with the `INFO` label.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(&::std::format!($($arg)+))
    };
}

/// Log a formatted message with the `WARNING` label.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(&::std::format!($($arg)+))
    };
}

/// Log a formatted message with the `ERROR` label.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(&::std::format!($($arg)+))
    };
}

/// Log a formatted message with the `FATAL` label, then terminate the process if it was written.
///
/// If the logger's level is above `FATAL`, the message is dropped and execution continues.
///
/// ```no_run
/// use levelog::Registry;
/// use levelog::append;
///
/// let registry = Registry::new();
/// let logger = registry.register(levelog::builder("app", append::Stderr::default()));
/// levelog::fatal!(logger, "config file {} is missing", "app.toml");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        if let ::std::option::Option::Some(exit) = $logger.fatal(&::std::format!($($arg)+)) {
            exit.exit()
        }
    };
}
