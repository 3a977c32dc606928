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

//! Values that can be written to a [`Logger`](crate::Logger).

use std::fmt;
use std::io;
use std::io::Write;

/// A value that can be passed to [`Logger::write`](crate::Logger::write).
///
/// Every [`Display`](fmt::Display) type is insertable and writes its text. [`Control`] tokens act
/// on the sink directly.
pub trait Insert {
    /// Write this value to `sink`.
    ///
    /// `enabled` is false when the current message is suppressed by the verbosity filter; no
    /// message bytes may reach the sink in that case.
    fn insert(&self, sink: &mut dyn Write, enabled: bool) -> io::Result<()>;

    /// Whether writing this value leaves the sink at the start of a new line.
    fn ends_line(&self) -> bool {
        false
    }
}

impl<T: fmt::Display + ?Sized> Insert for T {
    fn insert(&self, sink: &mut dyn Write, enabled: bool) -> io::Result<()> {
        if enabled {
            write!(sink, "{self}")?;
        }
        Ok(())
    }
}

/// Tokens that act on the sink rather than adding text to the message.
///
/// Line breaks are message bytes and are suppressed together with the rest of a filtered message.
/// Flushes write nothing and are always honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Write a line terminator.
    LineBreak,
    /// Flush the sink.
    Flush,
    /// Write a line terminator, then flush the sink.
    EndLine,
}

impl Insert for Control {
    fn insert(&self, sink: &mut dyn Write, enabled: bool) -> io::Result<()> {
        match self {
            Control::LineBreak => {
                if enabled {
                    sink.write_all(b"\n")?;
                }
            }
            Control::Flush => sink.flush()?,
            Control::EndLine => {
                if enabled {
                    sink.write_all(b"\n")?;
                }
                sink.flush()?;
            }
        }
        Ok(())
    }

    fn ends_line(&self) -> bool {
        matches!(self, Control::LineBreak | Control::EndLine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_display_values_are_gated() {
        let mut sink = CountingSink::default();
        "shown ".insert(&mut sink, true).unwrap();
        42_u32.insert(&mut sink, true).unwrap();
        "hidden".insert(&mut sink, false).unwrap();
        assert_eq!(sink.bytes, b"shown 42");
        assert_eq!(sink.flushes, 0);
    }

    #[test]
    fn test_line_break_is_gated() {
        let mut sink = CountingSink::default();
        Control::LineBreak.insert(&mut sink, false).unwrap();
        assert!(sink.bytes.is_empty());
        Control::LineBreak.insert(&mut sink, true).unwrap();
        assert_eq!(sink.bytes, b"\n");
    }

    #[test]
    fn test_flush_is_never_gated() {
        let mut sink = CountingSink::default();
        Control::Flush.insert(&mut sink, false).unwrap();
        Control::EndLine.insert(&mut sink, false).unwrap();
        assert!(sink.bytes.is_empty());
        assert_eq!(sink.flushes, 2);

        Control::EndLine.insert(&mut sink, true).unwrap();
        assert_eq!(sink.bytes, b"\n");
        assert_eq!(sink.flushes, 3);
    }

    #[test]
    fn test_ends_line() {
        assert!(Control::LineBreak.ends_line());
        assert!(Control::EndLine.ends_line());
        assert!(!Control::Flush.ends_line());
        assert!(!"text\n".ends_line());
    }
}
