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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::Error;
use crate::Layout;
use crate::record::Record;

type FormatFunction = dyn Fn(&Record) -> Result<String, Error> + Send + Sync + 'static;

/// A layout that you can pass the custom layout function.
///
/// The custom layout function accepts a [`Record`] and returns the line to write. For example:
///
/// ```rust
/// use levelog::layout::CustomLayout;
/// use levelog::record::Record;
///
/// let layout = CustomLayout::new(|record: &Record| {
///     Ok(format!("[{}] {}", record.label(), record.message()))
/// });
/// ```
pub struct CustomLayout {
    f: Box<FormatFunction>,
}

impl Debug for CustomLayout {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "CustomLayout {{ ... }}")
    }
}

impl CustomLayout {
    /// Create a layout from a format function.
    pub fn new(
        layout: impl Fn(&Record) -> Result<String, Error> + Send + Sync + 'static,
    ) -> Self {
        CustomLayout {
            f: Box::new(layout),
        }
    }
}

impl Layout for CustomLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        (self.f)(record).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn test_custom_format() {
        let layout = CustomLayout::new(|record| {
            Ok(format!("{}|{}|{}", record.logger(), record.level(), record.message()))
        });
        let record = Record::builder(Level::from(15), "odd").logger("svc").build();
        assert_eq!(layout.format(&record).unwrap(), b"svc|15|odd");
    }
}
