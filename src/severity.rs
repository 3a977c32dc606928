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

//! Named, ordered urgency levels.
//!
//! A lower [`Severity::level`] is more urgent. A message is emitted when its severity level is
//! less than or equal to the logger's verbosity level:
//!
//! ```text
//! NONE(0) < FATAL(100) < ERROR(200) < WARN(300) < INFO(400) < DEBUG(500) < TRACE(600) < ALL(999)
//! ```
//!
//! [`NONE`] and [`ALL`] are verbosity bounds: a logger with verbosity [`NONE`] only emits writes
//! made before any severity was selected, and a logger with verbosity [`ALL`] emits everything.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

use crate::Error;

/// A named urgency level attached to a log message.
///
/// Severities compare by [`level`][Severity::level] only; the name is a display label.
///
/// Custom severities can be declared as constants, as long as their levels are ordered
/// consistently with the built-ins they interact with:
///
/// ```
/// use qlog::Severity;
///
/// const NOTICE: Severity = Severity::new(350, "NOTICE");
///
/// assert!(qlog::WARN < NOTICE && NOTICE < qlog::INFO);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Severity {
    level: u32,
    name: &'static str,
}

/// Verbosity bound that suppresses every selected message.
pub const NONE: Severity = Severity::new(0, "NONE");
/// Unrecoverable failures.
pub const FATAL: Severity = Severity::new(100, "FATAL");
/// Errors.
pub const ERROR: Severity = Severity::new(200, "ERROR");
/// Warnings.
pub const WARN: Severity = Severity::new(300, "WARN");
/// Informational messages.
pub const INFO: Severity = Severity::new(400, "INFO");
/// Debug messages.
pub const DEBUG: Severity = Severity::new(500, "DEBUG");
/// Very verbose diagnostics.
pub const TRACE: Severity = Severity::new(600, "TRACE");
/// Verbosity bound that allows every message.
pub const ALL: Severity = Severity::new(999, "ALL");

const BUILTINS: [Severity; 8] = [NONE, FATAL, ERROR, WARN, INFO, DEBUG, TRACE, ALL];

impl Severity {
    /// Create a severity with the given level and display name.
    pub const fn new(level: u32, name: &'static str) -> Severity {
        Severity { level, name }
    }

    /// The ordinal of this severity; lower is more urgent.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// The display label of this severity.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a message of this severity passes a logger configured with `verbosity`.
    pub const fn passes(&self, verbosity: Severity) -> bool {
        self.level <= verbosity.level
    }

    /// The built-in severities, in ascending level order.
    pub fn builtins() -> &'static [Severity] {
        &BUILTINS
    }
}

impl PartialEq for Severity {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
    }
}

impl Eq for Severity {}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level.cmp(&other.level)
    }
}

impl Hash for Severity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name)
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// Parse a built-in severity name (case-insensitive; `warning` is accepted for [`WARN`]) or a
    /// bare level number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Ok(level) = text.parse::<u32>() {
            return Ok(BUILTINS
                .iter()
                .copied()
                .find(|severity| severity.level == level)
                .unwrap_or(Severity::new(level, "LEVEL")));
        }

        if text.eq_ignore_ascii_case("warning") {
            return Ok(WARN);
        }

        BUILTINS
            .iter()
            .copied()
            .find(|severity| severity.name.eq_ignore_ascii_case(text))
            .ok_or_else(|| Error::malformed_severity(s))
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => ERROR,
            log::Level::Warn => WARN,
            log::Level::Info => INFO,
            log::Level::Debug => DEBUG,
            log::Level::Trace => TRACE,
        }
    }
}

impl From<Severity> for log::LevelFilter {
    /// The most verbose `log` level that a logger with this verbosity would emit.
    fn from(verbosity: Severity) -> Self {
        if verbosity >= TRACE {
            log::LevelFilter::Trace
        } else if verbosity >= DEBUG {
            log::LevelFilter::Debug
        } else if verbosity >= INFO {
            log::LevelFilter::Info
        } else if verbosity >= WARN {
            log::LevelFilter::Warn
        } else if verbosity >= ERROR {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_builtins_are_strictly_ordered() {
        let builtins = Severity::builtins();
        assert_eq!(builtins.first(), Some(&NONE));
        assert_eq!(builtins.last(), Some(&ALL));
        for pair in builtins.windows(2) {
            assert!(pair[0] < pair[1], "{} must be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_passes_uses_lower_is_more_urgent() {
        assert!(ERROR.passes(WARN));
        assert!(WARN.passes(WARN));
        assert!(!DEBUG.passes(WARN));
        assert!(NONE.passes(NONE));
        assert!(!FATAL.passes(NONE));
        for severity in Severity::builtins() {
            assert!(severity.passes(ALL));
        }
    }

    #[test]
    fn test_parse_names_and_levels() {
        assert_eq!("error".parse::<Severity>().unwrap().name(), "ERROR");
        assert_eq!(" Warning ".parse::<Severity>().unwrap(), WARN);
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), DEBUG);
        assert_eq!("400".parse::<Severity>().unwrap().name(), "INFO");

        let custom = "350".parse::<Severity>().unwrap();
        assert_eq!(custom.level(), 350);
        assert_eq!(custom.name(), "LEVEL");
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "loud".parse::<Severity>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::MalformedSeverity {
                input: "loud".to_owned()
            }
        );
    }

    #[test]
    fn test_equality_ignores_name() {
        assert_eq!(Severity::new(200, "OOPS"), ERROR);
        assert_eq!(format!("[{:>5}]", INFO), "[ INFO]");
    }

    #[test]
    fn test_log_level_conversions() {
        assert_eq!(Severity::from(log::Level::Warn), WARN);
        assert_eq!(Severity::from(log::Level::Trace), TRACE);

        assert_eq!(log::LevelFilter::from(ALL), log::LevelFilter::Trace);
        assert_eq!(log::LevelFilter::from(DEBUG), log::LevelFilter::Debug);
        assert_eq!(log::LevelFilter::from(Severity::new(450, "CHATTY")), log::LevelFilter::Info);
        assert_eq!(log::LevelFilter::from(FATAL), log::LevelFilter::Off);
        assert_eq!(log::LevelFilter::from(NONE), log::LevelFilter::Off);
    }
}
