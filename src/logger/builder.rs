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

use crate::Append;
use crate::Error;
use crate::ErrorKind;
use crate::Layout;
use crate::Level;
use crate::Logger;
use crate::Trap;
use crate::layout::TextLayout;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] for a logger named `name` that writes to `append`.
///
/// The logger is created when the builder is registered with a [`Registry`](crate::Registry).
///
/// # Examples
///
/// ```
/// use levelog::Registry;
/// use levelog::append;
///
/// let registry = Registry::new();
/// let logger = registry.register(levelog::builder("app", append::Stderr::default()));
/// logger.info("started");
/// ```
pub fn builder(name: impl Into<String>, append: impl Into<Box<dyn Append>>) -> LoggerBuilder {
    LoggerBuilder {
        name: name.into(),
        append: append.into(),
        layout: Box::new(TextLayout::default()),
        trap: Box::new(DefaultTrap::default()),
        call_site: false,
        level: Level::DEBUG,
        env_level: None,
    }
}

/// A builder for configuring a named logger.
///
/// Everything configured here is fixed for the lifetime of the logger, except the level, which
/// can be changed later with [`Logger::set_level`].
///
/// # Examples
///
/// ```
/// use levelog::Level;
/// use levelog::Registry;
/// use levelog::append;
/// use levelog::layout::TextLayout;
///
/// let registry = Registry::new();
/// let logger = registry.register(
///     levelog::builder("app", append::Stdout::default())
///         .call_site(true)
///         .layout(TextLayout::default().microseconds(true))
///         .level(Level::INFO),
/// );
/// assert_eq!(logger.level(), Level::INFO);
/// ```
#[must_use = "register the builder with a `Registry` to create the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    append: Box<dyn Append>,
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    call_site: bool,
    level: Level,
    env_level: Option<String>,
}

impl LoggerBuilder {
    /// Whether to annotate each line with the `file:line: ` of the call. Default to `false`.
    pub fn call_site(mut self, call_site: bool) -> Self {
        self.call_site = call_site;
        self
    }

    /// Set the layout. Default to [`TextLayout::default`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the trap for write errors. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Set the initial level. Default to [`Level::DEBUG`], which lets everything through.
    pub fn level(mut self, level: impl Into<Level>) -> Self {
        self.level = level.into();
        self
    }

    /// Read the initial level from the environment variable `key` when the logger is created.
    ///
    /// The value is parsed with [`Level::from_str`](std::str::FromStr), so both names such as
    /// `warning` and raw integers such as `15` are accepted. If the variable is not set, the
    /// level configured with [`level`](LoggerBuilder::level) is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::Registry;
    /// use levelog::append;
    ///
    /// let registry = Registry::new();
    /// let logger = registry.register(
    ///     levelog::builder("app", append::Stderr::default()).level_from_env("APP_LOG_LEVEL"),
    /// );
    /// ```
    pub fn level_from_env(mut self, key: impl Into<String>) -> Self {
        self.env_level = Some(key.into());
        self
    }

    /// The name the logger will be registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn build(self) -> Result<Logger, Error> {
        let level = match self.env_level {
            None => self.level,
            Some(key) => match std::env::var(&key) {
                Ok(value) => value.parse::<Level>().map_err(|err| {
                    Error::new(ErrorKind::InvalidLevel, "failed to read level from environment")
                        .with_context("name", &self.name)
                        .with_context("key", &key)
                        .with_source(err)
                })?,
                Err(std::env::VarError::NotPresent) => self.level,
                Err(err) => {
                    return Err(Error::new(
                        ErrorKind::InvalidLevel,
                        "failed to read level from environment",
                    )
                    .with_context("name", &self.name)
                    .with_context("key", &key)
                    .with_source(err));
                }
            },
        };

        Ok(Logger::new(
            self.name,
            level,
            self.call_site,
            self.layout,
            self.append,
            self.trap,
        ))
    }
}
