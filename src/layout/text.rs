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

use std::fmt::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Error;
use crate::ErrorKind;
use crate::Layout;
use crate::record::Record;

/// Where the level label goes relative to the date/time header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPlacement {
    /// The label is placed right before the message, after the date/time header.
    ///
    /// ```text
    /// 2024/08/11 22:44:57 INFO: main.rs:7: Hello info!
    /// ```
    #[default]
    BeforeMessage,
    /// The label starts the line, before the date/time header.
    ///
    /// ```text
    /// INFO: 2024/08/11 22:44:57 main.rs:7: Hello info!
    /// ```
    LineStart,
}

/// A layout that formats log records as plain text lines.
///
/// Output format with the default options:
///
/// ```text
/// 2024/08/11 22:44:57 ERROR: main.rs:51: Hello error!
/// 2024/08/11 22:44:57 WARNING: main.rs:52: Hello warning!
/// 2024/08/11 22:44:57 INFO: main.rs:53: Hello info!
/// 2024/08/11 22:44:57 DEBUG: main.rs:54: Hello debug!
/// ```
///
/// The `main.rs:51: ` part only appears for loggers that annotate call sites.
///
/// Timestamps are rendered in the system timezone unless [`utc`](TextLayout::utc) or
/// [`timezone`](TextLayout::timezone) says otherwise.
///
/// # Examples
///
/// ```
/// use levelog::layout::LabelPlacement;
/// use levelog::layout::TextLayout;
///
/// let layout = TextLayout::default()
///     .microseconds(true)
///     .label_placement(LabelPlacement::LineStart);
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    date: bool,
    time: bool,
    microseconds: bool,
    timezone: TimeZone,
    placement: LabelPlacement,
    #[cfg(feature = "colored")]
    colored: bool,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            date: true,
            time: true,
            microseconds: false,
            timezone: TimeZone::system(),
            placement: LabelPlacement::BeforeMessage,
            #[cfg(feature = "colored")]
            colored: false,
        }
    }
}

impl TextLayout {
    /// Create a layout with no date or time header, only the label and the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use levelog::layout::TextLayout;
    ///
    /// // equivalent to TextLayout::default().date(false).time(false)
    /// let layout = TextLayout::bare();
    /// ```
    pub fn bare() -> Self {
        Self::default().date(false).time(false)
    }

    /// Whether to print the date as `YYYY/MM/DD`. Default to `true`.
    pub fn date(mut self, date: bool) -> Self {
        self.date = date;
        self
    }

    /// Whether to print the clock time as `HH:MM:SS`. Default to `true`.
    pub fn time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    /// Whether to print microseconds after the clock time. Default to `false`.
    ///
    /// Turning this on prints the clock time even if [`time`](TextLayout::time) is off.
    pub fn microseconds(mut self, microseconds: bool) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Render timestamps in UTC instead of the system timezone.
    pub fn utc(mut self, utc: bool) -> Self {
        self.timezone = if utc {
            TimeZone::UTC
        } else {
            TimeZone::system()
        };
        self
    }

    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use levelog::layout::TextLayout;
    ///
    /// let layout = TextLayout::default().timezone(TimeZone::fixed(jiff::tz::offset(8)));
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set where the level label is placed. Default to [`LabelPlacement::BeforeMessage`].
    pub fn label_placement(mut self, placement: LabelPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Color the level label.
    #[cfg(feature = "colored")]
    pub fn colored(mut self) -> Self {
        self.colored = true;
        self
    }

    fn has_header(&self) -> bool {
        self.date || self.time || self.microseconds
    }

    fn write_header(&self, text: &mut String, record: &Record) -> Result<(), Error> {
        let ts = Timestamp::try_from(record.time()).map_err(|err| {
            Error::new(ErrorKind::Unexpected, "record time is out of range").with_source(err)
        })?;
        let zoned = ts.to_zoned(self.timezone.clone());

        if self.date {
            write!(text, "{} ", zoned.strftime("%Y/%m/%d")).map_err(Error::from_fmt_error)?;
        }
        if self.time || self.microseconds {
            write!(text, "{}", zoned.strftime("%H:%M:%S")).map_err(Error::from_fmt_error)?;
            if self.microseconds {
                let micros = zoned.subsec_nanosecond() / 1000;
                write!(text, ".{micros:06}").map_err(Error::from_fmt_error)?;
            }
            text.push(' ');
        }
        Ok(())
    }

    fn write_label(&self, text: &mut String, record: &Record) {
        #[cfg(feature = "colored")]
        if self.colored {
            use colored::Color;
            use colored::Colorize;

            use crate::Level;

            let color = match record.level() {
                l if l >= Level::ERROR => Color::Red,
                l if l >= Level::WARNING => Color::Yellow,
                l if l >= Level::INFO => Color::Green,
                _ => Color::Blue,
            };
            // SAFETY: write to a string always succeeds
            write!(text, "{}: ", record.label().color(color)).unwrap();
            return;
        }

        text.push_str(record.label());
        text.push_str(": ");
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        if self.placement == LabelPlacement::LineStart {
            self.write_label(&mut text, record);
        }
        if self.has_header() {
            self.write_header(&mut text, record)?;
        }
        if self.placement == LabelPlacement::BeforeMessage {
            self.write_label(&mut text, record);
        }
        if let Some(call_site) = record.call_site() {
            write!(&mut text, "{call_site}").map_err(Error::from_fmt_error)?;
        }
        text.push_str(record.message());

        Ok(text.into_bytes())
    }
}
