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

use std::borrow::Cow;
use std::io::Stderr;
use std::io::Write;

use crate::ALL;
use crate::Clock;
use crate::Error;
use crate::Logger;
use crate::Severity;
use crate::env;

#[cfg(feature = "colored")]
use crate::color::SeverityColor;

/// Create a new empty [`LoggerBuilder`] instance for configuring a logger.
///
/// # Examples
///
/// ```rust
/// let mut logger = qlog::builder()
///     .verbosity(qlog::INFO)
///     .build(Vec::new());
///
/// logger.select(qlog::INFO)?.write("ready")?;
/// # Ok::<(), qlog::Error>(())
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder::new()
}

/// Create a logger writing every message to standard error.
///
/// This is a convenient API that you can use as:
///
/// ```rust
/// qlog::stderr().select(qlog::INFO)?.write("hello")?;
/// # Ok::<(), qlog::Error>(())
/// ```
pub fn stderr() -> Logger<Stderr> {
    Logger::stderr()
}

/// A builder for configuring a [`Logger`]. See also [`builder`] for a fluent API.
///
/// Defaults: verbosity [`ALL`], the system clock, no colors.
///
/// ## Examples
///
/// Take the verbosity from `QLOG_VERBOSITY` when it is set, otherwise emit warnings and above:
///
/// ```rust
/// let logger = qlog::builder()
///     .verbosity(qlog::WARN)
///     .verbosity_from_default_env()?
///     .build_stderr();
/// # Ok::<(), qlog::Error>(())
/// ```
#[must_use = "call `build` to create the logger"]
#[derive(Debug, Clone)]
pub struct LoggerBuilder {
    verbosity: Severity,
    clock: Clock,
    #[cfg(feature = "colored")]
    colors: Option<SeverityColor>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a new [`LoggerBuilder`] with the default settings.
    pub fn new() -> Self {
        Self {
            verbosity: ALL,
            clock: Clock::default(),
            #[cfg(feature = "colored")]
            colors: None,
        }
    }

    /// Set the verbosity ceiling: messages less urgent than this are suppressed.
    pub fn verbosity(mut self, verbosity: Severity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Override the verbosity with the value of the environment variable `name`, if it is set.
    ///
    /// A set but malformed value is an error.
    pub fn verbosity_from_env<'a, E>(mut self, name: E) -> Result<Self, Error>
    where
        E: Into<Cow<'a, str>>,
    {
        if let Some(verbosity) = env::verbosity_from_env(name)? {
            self.verbosity = verbosity;
        }
        Ok(self)
    }

    /// Override the verbosity with the value of `QLOG_VERBOSITY`, if it is set.
    pub fn verbosity_from_default_env(self) -> Result<Self, Error> {
        self.verbosity_from_env(env::DEFAULT_VERBOSITY_ENV)
    }

    /// Set the clock used to stamp message headers.
    pub fn clock(mut self, clock: impl Into<Clock>) -> Self {
        self.clock = clock.into();
        self
    }

    /// Color the severity label of each header.
    #[cfg(feature = "colored")]
    pub fn colors(mut self, colors: SeverityColor) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Build a logger writing to `sink`.
    pub fn build<W: Write>(self, sink: W) -> Logger<W> {
        let logger = Logger::new(sink, self.verbosity).with_clock(self.clock);

        #[cfg(feature = "colored")]
        let logger = logger.with_colors(self.colors);

        logger
    }

    /// Build a logger writing to standard error.
    pub fn build_stderr(self) -> Logger<Stderr> {
        self.build(std::io::stderr())
    }
}
