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

//! Levelog provides named loggers that filter messages by a numeric level and write the
//! accepted ones to a destination, with a level label and an optional `file:line: ` call site.
//!
//! # Overview
//!
//! Loggers live in a [`Registry`] under unique names. Any component holding the registry can
//! look a logger up by name and gets the same shared instance, so a level change made in one
//! place is seen everywhere. The levels are plain integers, [`Level::DEBUG`] (0),
//! [`Level::INFO`] (10), [`Level::WARNING`] (20), [`Level::ERROR`] (30) and [`Level::FATAL`]
//! (40); any integer in between is a valid threshold too.
//!
//! # Examples
//!
//! ```
//! use levelog::Level;
//! use levelog::Registry;
//! use levelog::append;
//!
//! let registry = Registry::new();
//! let logger = registry
//!     .create("app", append::Stdout::default(), true)
//!     .unwrap();
//! logger.set_level(Level::INFO);
//!
//! logger.debug("dropped");
//! logger.info("written, e.g. `2024/08/11 22:44:57 INFO: main.rs:12: written`");
//!
//! // elsewhere
//! let logger = registry.lookup("app").unwrap();
//! levelog::warning!(logger, "{} retries left", 2);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod layout;
pub mod record;
pub mod trap;

pub use append::Append;
pub use layout::Layout;
pub use trap::Trap;

mod error;
pub use error::Error;
pub use error::ErrorKind;

mod level;
pub use level::Level;

mod logger;
pub use logger::*;

mod registry;
pub use registry::Registry;
pub use registry::global;

mod macros;
