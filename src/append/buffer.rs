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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::append::Append;

/// An in-memory appender.
///
/// Clones share the same storage, so a clone kept by the caller observes every line written
/// through the logger that owns the other clone.
///
/// # Examples
///
/// ```
/// use levelog::Registry;
/// use levelog::append::Buffer;
/// use levelog::layout::TextLayout;
///
/// let buffer = Buffer::default();
/// let registry = Registry::new();
/// let logger = registry
///     .try_register(
///         levelog::builder("app", buffer.clone()).layout(TextLayout::bare()),
///     )
///     .unwrap();
///
/// logger.info("hello");
/// assert_eq!(buffer.lines(), vec!["INFO: hello"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Return the lines written so far, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Return the number of bytes written so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Return whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Append for Buffer {
    fn append(&self, line: &[u8]) -> Result<(), Error> {
        let mut bytes = self.lock();
        bytes.extend_from_slice(line);
        bytes.push(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_storage() {
        let buffer = Buffer::default();
        let clone = buffer.clone();
        assert!(buffer.is_empty());

        clone.append(b"a").unwrap();
        clone.append(b"b").unwrap();
        assert_eq!(buffer.contents(), "a\nb\n");
        assert_eq!(buffer.lines(), vec!["a", "b"]);
        assert_eq!(buffer.len(), 4);

        buffer.clear();
        assert!(clone.is_empty());
    }
}
