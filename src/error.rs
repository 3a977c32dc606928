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

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The sink failed while the logger performed `op` (`select`, `write`, `flush`, `end_line` or
    /// `finish`).
    Sink { op: &'static str },
    /// A severity could not be parsed from `input`.
    MalformedSeverity { input: String },
    /// A global `log` logger was already installed.
    SetLogger,
}

/// The error struct of qlog.
///
/// Sink failures carry the [`io::Error`] returned by the sink as their source.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    env: Option<String>,
    source: Option<anyhow::Error>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Sink { op } => write!(f, "sink failed during {op}")?,
            ErrorKind::MalformedSeverity { input } => write!(f, "malformed severity '{input}'")?,
            ErrorKind::SetLogger => write!(f, "failed to set global logger")?,
        }
        if let Some(env) = &self.env {
            write!(f, " (from env {env})")?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

impl Error {
    /// Create a new Error of the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            env: None,
            source: None,
        }
    }

    /// The error for a sink failure during `op`.
    pub fn sink(op: &'static str, err: io::Error) -> Error {
        Error::new(ErrorKind::Sink { op }).with_source(err)
    }

    /// The error for severity text that could not be parsed.
    pub fn malformed_severity(input: impl Into<String>) -> Error {
        Error::new(ErrorKind::MalformedSeverity {
            input: input.into(),
        })
    }

    /// Record the environment variable the failing value was read from.
    pub fn with_env(mut self, name: impl Into<String>) -> Self {
        self.env = Some(name.into());
        self
    }

    /// Set the underlying cause.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.source = Some(src.into());
        self
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The logger operation during which the sink failed, if this is a sink failure.
    pub fn op(&self) -> Option<&'static str> {
        match self.kind {
            ErrorKind::Sink { op } => Some(op),
            _ => None,
        }
    }

    /// The environment variable the failing value was read from.
    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display() {
        let err = Error::sink("write", io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "sink failed during write: pipe closed");
        assert_eq!(err.op(), Some("write"));
        assert_eq!(err.env(), None);
    }

    #[test]
    fn test_source_is_the_io_error() {
        let err = Error::sink("flush", io::Error::other("disk full"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn test_malformed_severity_from_env() {
        let err = Error::malformed_severity("loud").with_env("QLOG_VERBOSITY");
        assert_eq!(err.to_string(), "malformed severity 'loud' (from env QLOG_VERBOSITY)");
        assert_eq!(
            err.kind(),
            &ErrorKind::MalformedSeverity {
                input: "loud".to_owned()
            }
        );
        assert_eq!(err.op(), None);
        assert!(std::error::Error::source(&err).is_none());
    }
}
