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

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;

use crate::Append;
use crate::Error;
use crate::ErrorKind;
use crate::Logger;
use crate::LoggerBuilder;
use crate::logger::builder;

/// A set of loggers addressed by unique names.
///
/// A registry hands out shared handles: every lookup of a name returns the same [`Logger`] that
/// was created under it, so a level change through one handle is seen through all of them.
/// Loggers are never removed.
///
/// Create one registry at startup and pass it to the components that need loggers, or use the
/// process-wide one returned by [`global`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use levelog::Level;
/// use levelog::Registry;
/// use levelog::append;
///
/// let registry = Registry::new();
/// let logger = registry
///     .create("app", append::Stdout::default(), true)
///     .unwrap();
///
/// let same = registry.lookup("app").unwrap();
/// assert!(Arc::ptr_eq(&logger, &same));
///
/// same.set_level(Level::ERROR);
/// assert_eq!(logger.level(), Level::ERROR);
///
/// assert!(registry.lookup("other").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // entries are insert-only, so a panic while the lock is held cannot leave a partial entry
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create a logger with the default layout and register it under `name`.
    ///
    /// The new logger starts at [`Level::DEBUG`](crate::Level::DEBUG). To choose the output
    /// format (date, time, microseconds, label placement) or the initial level, configure a
    /// [`builder`](crate::builder) and pass it to [`try_register`](Registry::try_register):
    ///
    /// ```
    /// use levelog::Registry;
    /// use levelog::append;
    /// use levelog::layout::LabelPlacement;
    /// use levelog::layout::TextLayout;
    ///
    /// let registry = Registry::new();
    /// let logger = registry
    ///     .try_register(
    ///         levelog::builder("app", append::Stdout::default())
    ///             .call_site(true)
    ///             .layout(
    ///                 TextLayout::default()
    ///                     .date(false)
    ///                     .label_placement(LabelPlacement::LineStart),
    ///             ),
    ///     )
    ///     .unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::DuplicateName`] error if `name` is already registered. The
    /// existing logger is left untouched.
    pub fn create(
        &self,
        name: impl Into<String>,
        append: impl Into<Box<dyn Append>>,
        call_site: bool,
    ) -> Result<Arc<Logger>, Error> {
        self.try_register(builder(name, append).call_site(call_site))
    }

    /// Create the logger described by `builder` and register it under its name.
    ///
    /// # Errors
    ///
    /// Return an [`ErrorKind::DuplicateName`] error if the name is already registered, or an
    /// [`ErrorKind::InvalidLevel`] error if the builder reads an unparsable level from the
    /// environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::ErrorKind;
    /// use levelog::Registry;
    /// use levelog::append;
    ///
    /// let registry = Registry::new();
    /// registry
    ///     .try_register(levelog::builder("app", append::Stderr::default()))
    ///     .unwrap();
    ///
    /// let err = registry
    ///     .try_register(levelog::builder("app", append::Stdout::default()))
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DuplicateName);
    /// ```
    pub fn try_register(&self, builder: LoggerBuilder) -> Result<Arc<Logger>, Error> {
        let mut loggers = self.lock();
        if loggers.contains_key(builder.name()) {
            return Err(
                Error::new(ErrorKind::DuplicateName, "logger name already in use")
                    .with_context("name", builder.name()),
            );
        }

        let logger = Arc::new(builder.build()?);
        loggers.insert(logger.name().to_owned(), logger.clone());
        Ok(logger)
    }

    /// Create the logger described by `builder` and register it under its name.
    ///
    /// # Panics
    ///
    /// Panic if the name is already registered or the logger cannot be built. Use
    /// [`try_register`](Registry::try_register) to handle these cases.
    pub fn register(&self, builder: LoggerBuilder) -> Arc<Logger> {
        self.try_register(builder)
            .unwrap_or_else(|err| panic!("unable to create logger: {err}"))
    }

    /// Return the logger registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Arc<Logger>> {
        self.lock().get(name).cloned()
    }

    /// Return whether a logger is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Return the number of registered loggers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Return whether no logger is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Return the registered names in ascending order.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.lock().keys().cloned().collect::<Vec<_>>();
        names.sort_unstable();
        names
    }
}

/// Return the process-wide registry, creating it on first use.
///
/// # Examples
///
/// ```
/// use levelog::append;
///
/// let logger = levelog::global()
///     .create("docs-global", append::Stderr::default(), false)
///     .unwrap();
/// assert!(levelog::global().contains("docs-global"));
/// ```
pub fn global() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::append::Buffer;
    use crate::layout::TextLayout;

    #[test]
    fn test_duplicate_name_keeps_first_logger() {
        let registry = Registry::new();
        let first = Buffer::default();
        let second = Buffer::default();

        let logger = registry
            .try_register(builder("app", first.clone()).layout(TextLayout::bare()))
            .unwrap();
        let err = registry
            .try_register(builder("app", second.clone()).call_site(true))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
        assert_eq!(err.context("name"), Some("app"));

        registry.lookup("app").unwrap().info("still first");
        assert_eq!(first.lines(), vec!["INFO: still first"]);
        assert!(second.is_empty());
        assert_eq!(registry.len(), 1);
        assert_eq!(logger.level(), Level::DEBUG);
    }

    #[test]
    #[should_panic(expected = "logger name already in use")]
    fn test_register_panics_on_duplicate() {
        let registry = Registry::new();
        let _ = registry.register(builder("app", Buffer::default()));
        let _ = registry.register(builder("app", Buffer::default()));
    }

    #[test]
    fn test_names() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        for name in ["b", "c", "a"] {
            registry.create(name, Buffer::default(), false).unwrap();
        }
        assert_eq!(registry.names(), vec!["a", "b", "c"]);
        assert!(registry.contains("b"));
        assert!(!registry.contains("d"));
    }

    #[test]
    fn test_global_is_shared() {
        let logger = global()
            .create("registry-test-global", Buffer::default(), false)
            .unwrap();
        let found = global().lookup("registry-test-global").unwrap();
        assert!(Arc::ptr_eq(&logger, &found));
    }
}
