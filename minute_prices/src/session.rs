//! Market session clock
//!
//! Maps minute indices of a [`crate::PriceSeries`] to wall-clock times.

use crate::{Result, SeriesError};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u64 = 24 * 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Opening time and sampling interval of a trading session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionConfig")]
pub struct MarketSession {
    open: NaiveTime,
    interval_minutes: u32,
}

/// Unvalidated session parameters as they appear in serialized form
#[derive(Deserialize)]
struct SessionConfig {
    open: NaiveTime,
    interval_minutes: u32,
}

impl TryFrom<SessionConfig> for MarketSession {
    type Error = SeriesError;

    fn try_from(config: SessionConfig) -> Result<Self> {
        Self::new(config.open, config.interval_minutes)
    }
}

impl MarketSession {
    /// Create a session opening at `open` with one sample every `interval_minutes`
    pub fn new(open: NaiveTime, interval_minutes: u32) -> Result<Self> {
        if interval_minutes == 0 {
            return Err(SeriesError::InvalidSession(
                "Sampling interval must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            open,
            interval_minutes,
        })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    /// Clock time of the sample at `index`. Wraps past midnight.
    pub fn time_at(&self, index: usize) -> NaiveTime {
        let day_index = index as u64 % MINUTES_PER_DAY;
        let minutes = day_index * u64::from(self.interval_minutes) % MINUTES_PER_DAY;
        // minutes < 1440, the cast is lossless
        self.open + Duration::minutes(minutes as i64)
    }

    /// Sample index for `time`, if it falls exactly on the sampling grid.
    ///
    /// Times before the open count as the next day, so for a session that
    /// crosses midnight this is the inverse of [`MarketSession::time_at`]
    /// within the first 24 hours.
    pub fn index_of(&self, time: NaiveTime) -> Option<usize> {
        let elapsed = time
            .signed_duration_since(self.open)
            .num_seconds()
            .rem_euclid(SECONDS_PER_DAY);
        if elapsed % 60 != 0 {
            return None;
        }

        let minutes = elapsed / 60;
        let interval = i64::from(self.interval_minutes);
        if minutes % interval != 0 {
            return None;
        }
        usize::try_from(minutes / interval).ok()
    }
}

impl Default for MarketSession {
    /// US equities regular session: 09:30 open, one-minute samples
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default(),
            interval_minutes: 1,
        }
    }
}
