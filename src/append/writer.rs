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

use std::fmt;
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::append::Append;

/// An appender that writes lines to any [`Write`] implementation, such as an opened file.
///
/// Each line and its newline are handed to the writer in a single `write_all` call.
///
/// # Examples
///
/// ```
/// use std::fs::OpenOptions;
///
/// use levelog::append::Writer;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = OpenOptions::new()
///     .append(true)
///     .create(true)
///     .open(dir.path().join("app.log"))
///     .unwrap();
/// let file_appender = Writer::new(file);
/// ```
pub struct Writer<W> {
    writer: Mutex<W>,
}

impl<W> fmt::Debug for Writer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: Write + Send + 'static> Writer<W> {
    /// Create an appender that owns the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the appender and return the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send + 'static> Append for Writer<W> {
    fn append(&self, line: &[u8]) -> Result<(), Error> {
        let mut bytes = Vec::with_capacity(line.len() + 1);
        bytes.extend_from_slice(line);
        bytes.push(b'\n');
        self.lock().write_all(&bytes).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        self.lock().flush().map_err(Error::from_io_error)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::fs::OpenOptions;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_file_writer_appends_lines() {
        let temp_file = NamedTempFile::new().expect("failed to create a temporary file");
        let file = OpenOptions::new()
            .append(true)
            .open(temp_file.path())
            .unwrap();
        let writer = Writer::new(file);

        let first = generate_random_string();
        let second = generate_random_string();
        writer.append(first.as_bytes()).unwrap();
        writer.append(second.as_bytes()).unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(contents, format!("{first}\n{second}\n"));
    }

    #[test]
    fn test_into_inner() {
        let writer = Writer::new(Vec::new());
        writer.append(b"one").unwrap();
        assert_eq!(writer.into_inner(), b"one\n");
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        let random_string: String = std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect();

        random_string
    }
}
