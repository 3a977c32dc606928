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

//! Message timestamps.

use std::fmt;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use jiff::SignedDuration;
use jiff::tz::TimeZone;

/// An instant stamped on the header of a log message.
///
/// Displays as a sortable UTC timestamp with millisecond precision, e.g.
/// `2024-08-10T09:12:52.005Z`. The millisecond field is always three digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub jiff::Timestamp);

impl Timestamp {
    /// Get the current timestamp.
    pub fn now() -> Self {
        Self(jiff::Timestamp::now())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let utc = self.0.to_zoned(TimeZone::UTC);
        write!(
            f,
            "{}.{:03}Z",
            utc.strftime("%Y-%m-%dT%H:%M:%S"),
            utc.millisecond()
        )
    }
}

/// The source of timestamps for message headers.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    /// Read the system clock.
    #[default]
    System,
    /// Return the instant held by a [`ManualClock`].
    Manual(ManualClock),
}

impl Clock {
    /// The current instant according to this clock.
    pub fn now(&self) -> Timestamp {
        match self {
            Clock::System => Timestamp::now(),
            Clock::Manual(clock) => clock.now(),
        }
    }
}

impl From<ManualClock> for Clock {
    fn from(clock: ManualClock) -> Self {
        Clock::Manual(clock)
    }
}

/// A clock whose time only changes when told to.
///
/// Clones share the same instant, so a handle kept by the caller can move the time of a clock
/// already handed to a logger.
///
/// # Examples
///
/// ```
/// use qlog::ManualClock;
///
/// let clock = ManualClock::new("2024-08-10T09:12:52Z".parse().unwrap());
/// let handle = clock.clone();
/// handle.advance(jiff::SignedDuration::from_millis(5));
/// assert_eq!(clock.now().to_string(), "2024-08-10T09:12:52.005Z");
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<jiff::Timestamp>>,
}

impl ManualClock {
    /// Create a clock stopped at `now`.
    pub fn new(now: jiff::Timestamp) -> ManualClock {
        ManualClock {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// The instant this clock is stopped at.
    pub fn now(&self) -> Timestamp {
        Timestamp(*self.now.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Reset the clock to `now`.
    pub fn set_now(&self, now: jiff::Timestamp) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move the clock by `duration`. The clock is left unchanged if the result would fall
    /// outside the range of [`jiff::Timestamp`].
    pub fn advance(&self, duration: SignedDuration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        if let Ok(next) = now.checked_add(duration) {
            *now = next;
        }
    }
}
