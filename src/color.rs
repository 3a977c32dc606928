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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::DEBUG;
use crate::ERROR;
use crate::FATAL;
use crate::INFO;
use crate::Severity;
use crate::WARN;

/// Colors for the severity label of message headers.
///
/// A severity takes the color of the first band it falls into: at most [`FATAL`], at most
/// [`ERROR`], and so on; anything less urgent than [`DEBUG`] uses `trace`.
///
/// Colors are only emitted when `colored` decides the output should be colorized (see
/// `colored::control`).
#[derive(Debug, Clone)]
pub struct SeverityColor {
    /// Color for fatal messages.
    pub fatal: Color,
    /// Color for error messages.
    pub error: Color,
    /// Color for warnings.
    pub warn: Color,
    /// Color for informational messages.
    pub info: Color,
    /// Color for debug messages.
    pub debug: Color,
    /// Color for everything more verbose than debug.
    pub trace: Color,
}

impl Default for SeverityColor {
    fn default() -> Self {
        Self {
            fatal: Color::BrightRed,
            error: Color::Red,
            warn: Color::Yellow,
            info: Color::Green,
            debug: Color::Blue,
            trace: Color::Magenta,
        }
    }
}

impl SeverityColor {
    /// The color for messages of `severity`.
    pub fn color_of(&self, severity: Severity) -> Color {
        if severity <= FATAL {
            self.fatal
        } else if severity <= ERROR {
            self.error
        } else if severity <= WARN {
            self.warn
        } else if severity <= INFO {
            self.info
        } else if severity <= DEBUG {
            self.debug
        } else {
            self.trace
        }
    }

    /// Colorize the name of `severity`.
    pub fn colorize(&self, severity: Severity) -> ColoredString {
        severity.name().color(self.color_of(severity))
    }
}
