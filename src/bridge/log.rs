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
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::ErrorKind;
use crate::Logger;
use crate::Severity;

/// A [`Logger`] behind a mutex, usable as the global [`log`] logger.
///
/// Each `log` record becomes one logical message: its level is mapped to a [`Severity`]
/// (`Trace` maps to [`TRACE`](crate::TRACE)) and its arguments are written after the header.
/// Holding the lock for the whole chain keeps concurrent messages from interleaving.
///
/// # Examples
///
/// ```
/// use qlog::bridge::SharedLogger;
///
/// let shared = SharedLogger::new(qlog::builder().verbosity(qlog::INFO).build(Vec::new()));
/// shared.lock().select(qlog::INFO)?.write("chained under the lock")?;
/// # Ok::<(), qlog::Error>(())
/// ```
pub struct SharedLogger<W: Write = Stderr> {
    verbosity: Severity,
    logger: Mutex<Logger<W>>,
}

impl<W: Write> SharedLogger<W> {
    /// Wrap `logger` for shared use.
    pub fn new(logger: Logger<W>) -> Self {
        Self {
            verbosity: logger.verbosity(),
            logger: Mutex::new(logger),
        }
    }

    /// Lock the logger to write a chain of values as one message.
    ///
    /// A poisoned lock is recovered: the logger holds no invariant a panic could break.
    pub fn lock(&self) -> MutexGuard<'_, Logger<W>> {
        self.logger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The verbosity of the wrapped logger.
    pub fn verbosity(&self) -> Severity {
        self.verbosity
    }

    /// Unwrap the logger.
    pub fn into_inner(self) -> Logger<W> {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send + 'static> SharedLogger<W> {
    /// Set up the global logger with this [`SharedLogger`].
    ///
    /// The `log` max level is derived from the verbosity, so records that would be suppressed
    /// are skipped before they are formatted.
    ///
    /// # Errors
    ///
    /// Return an error if a global logger has already been set.
    pub fn apply(self) -> Result<(), Error> {
        let max_level = log::LevelFilter::from(self.verbosity);
        log::set_boxed_logger(Box::new(self))
            .map_err(|err| Error::new(ErrorKind::SetLogger).with_source(err))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl<W: Write> fmt::Debug for SharedLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogger")
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send + 'static> log::Log for SharedLogger<W> {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Severity::from(metadata.level()).passes(self.verbosity)
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut logger = self.lock();
        let result = logger
            .select(record.level().into())
            .and_then(|logger| logger.write(record.args()));
        if let Err(err) = result {
            trap(&err);
        }
    }

    // The global logger is never dropped, so flushing also ends the last record's line.
    fn flush(&self) {
        if let Err(err) = self.lock().end_line() {
            trap(&err);
        }
    }
}

// The `log` facade has no error channel.
fn trap(err: &Error) {
    let _ = writeln!(io::stderr(), "{err}");
}
