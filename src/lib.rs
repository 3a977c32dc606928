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

//! qlog is a tiny chainable logger: it stamps each message with a UTC timestamp and a severity
//! label, and drops messages less urgent than a configured verbosity.
//!
//! # Overview
//!
//! A [`Logger`] wraps any [`std::io::Write`] sink. [`Logger::select`] starts a new message of a
//! given [`Severity`] and [`Logger::write`] appends values to it. Severities with a lower level
//! are more urgent; a message is written when its level is at most the verbosity level.
//!
//! # Examples
//!
//! Log to standard error, keeping warnings and above:
//!
//! ```
//! let mut log = qlog::builder().verbosity(qlog::WARN).build_stderr();
//!
//! log.write("This doesn't have a severity level.")?;
//! log.select(qlog::ERROR)?.write("This is an error message.")?;
//! log.select(qlog::DEBUG)?.write("This debug message is dropped.")?;
//! log.select(qlog::WARN)?.write("Disk usage at ")?.write(91)?.write('%')?;
//! # Ok::<(), qlog::Error>(())
//! ```
//!
//! Route the [`log`] facade through a logger:
//!
//! ```no_run
//! use qlog::bridge::SharedLogger;
//!
//! SharedLogger::new(qlog::builder().verbosity(qlog::INFO).build_stderr()).apply()?;
//!
//! log::info!("This is an info message.");
//! # Ok::<(), qlog::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod env;

#[cfg(feature = "colored")]
pub mod color;

mod clock;
pub use self::clock::*;

mod error;
pub use self::error::Error;
pub use self::error::ErrorKind;

mod insert;
pub use self::insert::Control;
pub use self::insert::Insert;

mod logger;
pub use self::logger::*;

mod severity;
pub use self::severity::*;
