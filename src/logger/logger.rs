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
use std::io;
use std::io::Stderr;
use std::io::Write;

use crate::ALL;
use crate::Clock;
use crate::Error;
use crate::NONE;
use crate::Severity;
use crate::Timestamp;
use crate::insert::Insert;

#[cfg(feature = "colored")]
use crate::color::SeverityColor;

/// A chainable logger that stamps and filters messages written to a sink.
///
/// Each call to [`select`][Logger::select] starts a new logical message: the previous line is
/// terminated and a header `<timestamp> [<SEVERITY>] ` is written. Subsequent calls to
/// [`write`][Logger::write] append to that message. Both are gated by the verbosity: when the
/// selected severity is less urgent than the verbosity, nothing reaches the sink until the next
/// passing `select`.
///
/// Output on the sink looks like:
///
/// ```text
///
/// 2024-08-10T09:12:52.005Z [ERROR] disk full
/// 2024-08-10T09:12:52.017Z [WARN] retrying in 5s
/// ```
///
/// The sink can be owned (`Logger<File>`) or borrowed (`Logger<&mut Vec<u8>>`); the logger never
/// closes it. When the logger is dropped it writes a final line terminator and flushes the sink,
/// whatever the filter state of the last message. I/O errors during drop are discarded; call
/// [`finish`][Logger::finish] to observe them.
///
/// Header timestamps never decrease: if the clock steps backwards, headers keep the latest
/// timestamp already issued until the clock catches up.
///
/// A logger is meant to be driven from one thread at a time. Wrap it in a
/// [`SharedLogger`](crate::bridge::SharedLogger) to share it.
///
/// # Examples
///
/// ```
/// use qlog::Logger;
///
/// let mut out = Vec::new();
/// {
///     let mut logger = Logger::new(&mut out, qlog::WARN);
///     logger.select(qlog::ERROR)?.write("disk full")?;
///     logger.select(qlog::DEBUG)?.write("details")?;
/// }
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains(" [ERROR] disk full\n"));
/// assert!(!out.contains("details"));
/// # Ok::<(), qlog::Error>(())
/// ```
pub struct Logger<W: Write = Stderr> {
    sink: W,
    verbosity: Severity,
    current: Severity,
    clock: Clock,
    last_stamp: Option<Timestamp>,
    #[cfg(feature = "colored")]
    colors: Option<SeverityColor>,
    open_line: bool,
    finished: bool,
}

impl Logger<Stderr> {
    /// Create a logger that writes every message to standard error.
    pub fn stderr() -> Self {
        Logger::with_sink(std::io::stderr())
    }

    /// Create a [`LoggerBuilder`](crate::LoggerBuilder) to configure a logger.
    pub fn builder() -> crate::LoggerBuilder {
        crate::LoggerBuilder::new()
    }
}

impl Default for Logger<Stderr> {
    fn default() -> Self {
        Logger::stderr()
    }
}

impl<W: Write> Logger<W> {
    /// Create a logger writing to `sink` that emits messages at most as verbose as `verbosity`.
    pub fn new(sink: W, verbosity: Severity) -> Self {
        Self {
            sink,
            verbosity,
            current: NONE,
            clock: Clock::default(),
            last_stamp: None,
            #[cfg(feature = "colored")]
            colors: None,
            open_line: false,
            finished: false,
        }
    }

    /// Create a logger writing every message to `sink`.
    pub fn with_sink(sink: W) -> Self {
        Logger::new(sink, ALL)
    }

    pub(crate) fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(feature = "colored")]
    pub(crate) fn with_colors(mut self, colors: Option<SeverityColor>) -> Self {
        self.colors = colors;
        self
    }

    /// The configured verbosity ceiling.
    pub fn verbosity(&self) -> Severity {
        self.verbosity
    }

    /// The severity of the in-progress message.
    ///
    /// Before the first [`select`][Logger::select] this is [`NONE`], which passes every
    /// verbosity.
    pub fn current(&self) -> Severity {
        self.current
    }

    /// Whether a message of `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.verbosity)
    }

    /// Whether the in-progress message is being written.
    pub fn is_current_enabled(&self) -> bool {
        self.enabled(self.current)
    }

    /// Start a new logical message of `severity`.
    ///
    /// If the severity passes the verbosity, terminates the previous line, flushes the sink and
    /// writes the message header. Otherwise performs no I/O. In both cases the severity becomes
    /// the current one and the logger is returned for chaining.
    pub fn select(&mut self, severity: Severity) -> Result<&mut Self, Error> {
        self.current = severity;
        if self.is_current_enabled() {
            self.start_message(severity)
                .map_err(|err| Error::sink("select", err))?;
        }
        Ok(self)
    }

    /// Append `value` to the current message.
    ///
    /// Text is forwarded to the sink only when the current severity passes the verbosity. See
    /// [`Control`](crate::Control) for the tokens that act on the sink directly.
    pub fn write(&mut self, value: impl Insert) -> Result<&mut Self, Error> {
        let enabled = self.is_current_enabled();
        value
            .insert(&mut self.sink, enabled)
            .map_err(|err| Error::sink("write", err))?;
        if enabled {
            self.open_line = !value.ends_line();
        }
        Ok(self)
    }

    /// Terminate the line written so far, if any, and flush the sink.
    ///
    /// Use this where the logger is never dropped, e.g. when it is installed as the global `log`
    /// logger. Does nothing but flush if the last written byte already ended a line.
    pub fn end_line(&mut self) -> Result<&mut Self, Error> {
        if self.open_line {
            self.sink
                .write_all(b"\n")
                .map_err(|err| Error::sink("end_line", err))?;
            self.open_line = false;
        }
        self.flush()
    }

    /// Whether bytes have been written since the last line terminator.
    pub fn has_open_line(&self) -> bool {
        self.open_line
    }

    /// Flush the sink.
    pub fn flush(&mut self) -> Result<&mut Self, Error> {
        self.sink.flush().map_err(|err| Error::sink("flush", err))?;
        Ok(self)
    }

    /// Terminate the current line, flush the sink and consume the logger.
    ///
    /// This is what dropping the logger does, except that I/O errors are returned.
    pub fn finish(mut self) -> Result<(), Error> {
        self.finished = true;
        self.terminate().map_err(|err| Error::sink("finish", err))
    }

    /// Get a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Get a mutable reference to the sink.
    ///
    /// Bytes written directly bypass the verbosity filter.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    fn start_message(&mut self, severity: Severity) -> io::Result<()> {
        let now = self.stamp();
        self.sink.write_all(b"\n")?;
        self.open_line = false;
        self.sink.flush()?;
        self.write_header(now, severity)?;
        self.open_line = true;
        Ok(())
    }

    // Headers never go back in time, even if the clock does.
    fn stamp(&mut self) -> Timestamp {
        let now = self.clock.now();
        let now = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(now);
        now
    }

    #[cfg(not(feature = "colored"))]
    fn write_header(&mut self, now: Timestamp, severity: Severity) -> io::Result<()> {
        write!(self.sink, "{now} [{}] ", severity.name())
    }

    #[cfg(feature = "colored")]
    fn write_header(&mut self, now: Timestamp, severity: Severity) -> io::Result<()> {
        match &self.colors {
            Some(colors) => write!(self.sink, "{now} [{}] ", colors.colorize(severity)),
            None => write!(self.sink, "{now} [{}] ", severity.name()),
        }
    }

    fn terminate(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\n")?;
        self.open_line = false;
        self.sink.flush()
    }
}

impl<W: Write> Drop for Logger<W> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.terminate();
        }
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity)
            .field("current", &self.current)
            .field("clock", &self.clock)
            .field("open_line", &self.open_line)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Control;
    use crate::DEBUG;
    use crate::ERROR;
    use crate::INFO;
    use crate::ManualClock;
    use crate::WARN;

    fn manual_clock() -> ManualClock {
        ManualClock::new("2024-08-10T09:12:52.005Z".parse().unwrap())
    }

    fn capture(verbosity: Severity, f: impl FnOnce(&mut Logger<&mut Vec<u8>>)) -> String {
        let mut out = Vec::new();
        {
            let mut logger =
                Logger::new(&mut out, verbosity).with_clock(Clock::Manual(manual_clock()));
            f(&mut logger);
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_severity_always_passes() {
        let logger = Logger::new(Vec::new(), NONE);
        assert_eq!(logger.current(), NONE);
        assert!(logger.is_current_enabled());

        let out = capture(NONE, |logger| {
            logger.write("unstamped").unwrap();
        });
        assert_eq!(out, "unstamped\n");
    }

    #[test]
    fn test_select_writes_header() {
        let out = capture(ALL, |logger| {
            logger.select(ERROR).unwrap().write("disk full").unwrap();
        });
        assert_eq!(out, "\n2024-08-10T09:12:52.005Z [ERROR] disk full\n");
    }

    #[test]
    fn test_suppressed_select_updates_current_without_io() {
        let out = capture(WARN, |logger| {
            logger.select(DEBUG).unwrap();
            assert_eq!(logger.current(), DEBUG);
            assert!(!logger.is_current_enabled());
            assert!(logger.get_ref().is_empty());
            logger.write("details").unwrap().write(Control::LineBreak).unwrap();
            assert!(logger.get_ref().is_empty());
        });
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_writes_concatenate_on_one_line() {
        let out = capture(INFO, |logger| {
            logger
                .select(INFO)
                .unwrap()
                .write("copied ")
                .unwrap()
                .write(3)
                .unwrap()
                .write(" files in ")
                .unwrap()
                .write(1.5)
                .unwrap()
                .write("s")
                .unwrap();
        });
        assert_eq!(out, "\n2024-08-10T09:12:52.005Z [INFO] copied 3 files in 1.5s\n");
    }

    #[test]
    fn test_enabled() {
        let logger = Logger::new(Vec::new(), WARN);
        assert!(logger.enabled(ERROR));
        assert!(logger.enabled(WARN));
        assert!(!logger.enabled(INFO));
        assert_eq!(logger.verbosity(), WARN);
    }

    #[test]
    fn test_end_line_terminates_only_open_lines() {
        let out = capture(WARN, |logger| {
            logger.end_line().unwrap();
            assert!(logger.get_ref().is_empty());

            logger.select(ERROR).unwrap().write("disk full").unwrap();
            assert!(logger.has_open_line());
            logger.end_line().unwrap();
            assert!(!logger.has_open_line());
            logger.end_line().unwrap();

            logger.select(DEBUG).unwrap().write("hidden").unwrap();
            assert!(!logger.has_open_line());
            logger.end_line().unwrap();
        });
        assert_eq!(out, "\n2024-08-10T09:12:52.005Z [ERROR] disk full\n\n");
    }

    #[test]
    fn test_line_break_closes_line() {
        let mut logger = Logger::with_sink(Vec::new());
        logger.write("a").unwrap();
        assert!(logger.has_open_line());
        logger.write(Control::LineBreak).unwrap();
        assert!(!logger.has_open_line());
        logger.end_line().unwrap();
        assert_eq!(logger.get_ref(), b"a\n");
    }

    #[test]
    fn test_headers_never_go_back_in_time() {
        let clock = manual_clock();
        let handle = clock.clone();

        let mut out = Vec::new();
        {
            let mut logger = Logger::with_sink(&mut out).with_clock(Clock::Manual(clock));
            logger.select(INFO).unwrap().write("first").unwrap();
            handle.set_now("2024-08-10T09:12:51.999Z".parse().unwrap());
            logger.select(INFO).unwrap().write("clock stepped back").unwrap();
            handle.set_now("2024-08-10T09:12:52.010Z".parse().unwrap());
            logger.select(INFO).unwrap().write("caught up").unwrap();
        }

        assert_eq!(
            String::from_utf8(out).unwrap(),
            concat!(
                "\n2024-08-10T09:12:52.005Z [INFO] first",
                "\n2024-08-10T09:12:52.005Z [INFO] clock stepped back",
                "\n2024-08-10T09:12:52.010Z [INFO] caught up\n",
            )
        );
    }

    #[test]
    fn test_finish_terminates_once() {
        let mut out = Vec::new();
        let mut logger = Logger::with_sink(&mut out).with_clock(Clock::Manual(manual_clock()));
        logger.select(WARN).unwrap().write("low disk").unwrap();
        logger.finish().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n2024-08-10T09:12:52.005Z [WARN] low disk\n"
        );
    }

    #[test]
    fn test_debug_omits_sink() {
        let logger = Logger::new(Vec::new(), WARN);
        let text = format!("{logger:?}");
        assert!(text.starts_with("Logger { verbosity: Severity { level: 300"));
        assert!(text.ends_with(".. }"));
    }
}
