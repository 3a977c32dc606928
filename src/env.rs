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

//! Verbosity configuration from environment variables.

use std::borrow::Cow;
use std::env::VarError;

use crate::Error;
use crate::Severity;

/// The variable read by [`LoggerBuilder::verbosity_from_default_env`].
///
/// [`LoggerBuilder::verbosity_from_default_env`]: crate::LoggerBuilder::verbosity_from_default_env
pub const DEFAULT_VERBOSITY_ENV: &str = "QLOG_VERBOSITY";

/// Read a verbosity from the environment variable `name`.
///
/// Returns `Ok(None)` if the variable is not set. The value is parsed with
/// [`Severity::from_str`](std::str::FromStr::from_str), so both names (`warn`) and levels (`300`)
/// are accepted.
///
/// # Examples
///
/// ```
/// let verbosity = qlog::env::verbosity_from_env("MY_APP_VERBOSITY")?;
/// assert!(verbosity.is_none());
/// # Ok::<(), qlog::Error>(())
/// ```
pub fn verbosity_from_env<'a, E>(name: E) -> Result<Option<Severity>, Error>
where
    E: Into<Cow<'a, str>>,
{
    let name = name.into();
    match std::env::var(&*name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .map_err(|err: Error| err.with_env(&*name)),
        Err(VarError::NotPresent) => Ok(None),
        Err(err @ VarError::NotUnicode(_)) => Err(Error::malformed_severity("<non-unicode>")
            .with_env(&*name)
            .with_source(err)),
    }
}
