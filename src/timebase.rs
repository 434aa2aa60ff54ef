//! Clock source and astronomical time conversions.
//!
//! Synchronizes once against an SNTP time authority at startup, then serves
//! offset-adjusted UTC/local samples on demand, together with the Julian
//! date of the adjusted instant. If synchronization fails the clock runs
//! with a zero offset and carries an explicit unsynchronized flag for the
//! UI.

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeDelta, TimeZone, Timelike, Utc};
use rsntp::SntpClient;

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("time authority query failed: {0}")]
    Sync(#[from] rsntp::SynchronizationError),
    #[error("clock offset out of representable range")]
    OffsetRange,
}

/// One readout of the adjusted clocks, refreshed on the timer tick.
#[derive(Clone, Copy, Debug)]
pub struct TimeSample {
    pub utc: DateTime<Utc>,
    pub local: DateTime<FixedOffset>,
    /// Host UTC offset in seconds, DST-aware for the sampled instant.
    pub local_offset_seconds: i32,
    pub julian_date: f64,
    pub synchronized: bool,
}

/// System clock plus a fixed offset obtained from the time authority.
pub struct ClockSource {
    offset: TimeDelta,
    synchronized: bool,
}

impl ClockSource {
    /// One blocking SNTP round trip; no retries. The returned offset is
    /// authority UTC minus local UTC at the time of the request.
    pub fn synchronize(server: &str) -> Result<Self, ClockError> {
        let result = SntpClient::new().synchronize(server)?;
        let offset: TimeDelta = result
            .clock_offset()
            .try_into()
            .map_err(|_| ClockError::OffsetRange)?;
        log::info!("clock synchronized against {server}, offset {offset}");
        Ok(Self {
            offset,
            synchronized: true,
        })
    }

    /// Zero-offset fallback when the time authority is unreachable; the
    /// flag surfaces in the time panel.
    pub fn unsynchronized() -> Self {
        Self {
            offset: TimeDelta::zero(),
            synchronized: false,
        }
    }

    pub fn now(&self) -> TimeSample {
        let utc = Utc::now() + self.offset;
        let host_offset = Local.offset_from_utc_datetime(&utc.naive_utc());
        TimeSample {
            utc,
            local: utc.with_timezone(&host_offset),
            local_offset_seconds: host_offset.local_minus_utc(),
            julian_date: julian_date(utc),
            synchronized: self.synchronized,
        }
    }
}

/// Fractional Julian date of a UTC instant.
///
/// Fliegel-Van Flandern integer Julian Day Number plus the fractional day.
/// The JDN terms use integer division throughout; floating division there
/// shifts the day number near month boundaries.
pub fn julian_date(utc: DateTime<Utc>) -> f64 {
    let year = utc.year() as i64;
    let month = utc.month() as i64;
    let day = utc.day() as i64;
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 * 1e-9;
    jdn as f64
        + (utc.hour() as f64 - 12.0) / 24.0
        + utc.minute() as f64 / 1440.0
        + seconds / 86400.0
}
