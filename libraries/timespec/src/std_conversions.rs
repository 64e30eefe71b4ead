use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::{TimeSpec, TimeVal, NSEC_PER_SEC, USEC_PER_SEC};

/// Failure converting a signed time value into an unsigned std type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeConversionError {
    /// Negative values have no `Duration` counterpart.
    #[error("negative time value cannot be converted to a Duration")]
    Negative,
}

// SystemTime conversions
impl From<SystemTime> for TimeSpec {
    fn from(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => TimeSpec::new(after.as_secs() as i64, after.subsec_nanos() as i64),
            // Before the epoch: negate both fields and let normalization
            // borrow so tv_nsec lands back in [0, NSEC_PER_SEC)
            Err(before) => {
                let d = before.duration();
                TimeSpec::new(-(d.as_secs() as i64), -(d.subsec_nanos() as i64))
            }
        }
    }
}

impl From<TimeSpec> for SystemTime {
    fn from(timespec: TimeSpec) -> Self {
        let ts = timespec.normalized();
        if ts.tv_sec >= 0 {
            UNIX_EPOCH + Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
        } else {
            let magnitude = ts.abs();
            UNIX_EPOCH - Duration::new(magnitude.tv_sec as u64, magnitude.tv_nsec as u32)
        }
    }
}

impl From<SystemTime> for TimeVal {
    #[inline]
    fn from(system_time: SystemTime) -> Self {
        TimeSpec::from(system_time).to_timeval()
    }
}

impl From<TimeVal> for SystemTime {
    #[inline]
    fn from(timeval: TimeVal) -> Self {
        timeval.to_timespec().into()
    }
}

// Duration conversions
impl From<Duration> for TimeSpec {
    #[inline]
    fn from(duration: Duration) -> Self {
        TimeSpec::new(duration.as_secs() as i64, duration.subsec_nanos() as i64)
    }
}

impl TryFrom<TimeSpec> for Duration {
    type Error = TimeConversionError;

    fn try_from(timespec: TimeSpec) -> Result<Self, Self::Error> {
        let total = timespec.total_nanos_i128();
        if total < 0 {
            return Err(TimeConversionError::Negative);
        }
        Ok(Duration::new(
            (total / NSEC_PER_SEC as i128) as u64,
            (total % NSEC_PER_SEC as i128) as u32,
        ))
    }
}

impl From<Duration> for TimeVal {
    #[inline]
    fn from(duration: Duration) -> Self {
        TimeSpec::from(duration).to_timeval()
    }
}

impl TryFrom<TimeVal> for Duration {
    type Error = TimeConversionError;

    fn try_from(timeval: TimeVal) -> Result<Self, Self::Error> {
        let total = timeval.total_micros_i128();
        if total < 0 {
            return Err(TimeConversionError::Negative);
        }
        Ok(Duration::new(
            (total / USEC_PER_SEC as i128) as u64,
            ((total % USEC_PER_SEC as i128) * 1_000) as u32,
        ))
    }
}

// Instant cannot be converted directly since it has no public anchor point,
// but elapsed time and offsets against one are well-defined.
impl TimeSpec {
    /// Create a TimeSpec from the time elapsed since an Instant.
    #[inline]
    pub fn from_instant_elapsed(instant: Instant) -> Self {
        instant.elapsed().into()
    }

    /// Interpret this TimeSpec as a duration and add it to an Instant.
    /// Fails for negative values.
    #[inline]
    pub fn add_to_instant(&self, instant: Instant) -> Result<Instant, TimeConversionError> {
        let duration = Duration::try_from(*self)?;
        Ok(instant + duration)
    }
}

impl TimeVal {
    /// Create a TimeVal from the time elapsed since an Instant.
    #[inline]
    pub fn from_instant_elapsed(instant: Instant) -> Self {
        instant.elapsed().into()
    }

    /// Interpret this TimeVal as a duration and add it to an Instant.
    /// Fails for negative values.
    #[inline]
    pub fn add_to_instant(&self, instant: Instant) -> Result<Instant, TimeConversionError> {
        let duration = Duration::try_from(*self)?;
        Ok(instant + duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_systemtime_to_timespec() {
        let t = UNIX_EPOCH + Duration::new(1_234_567_890, 123_456_789);
        let ts = TimeSpec::from(t);
        assert_eq!(ts.tv_sec, 1_234_567_890);
        assert_eq!(ts.tv_nsec, 123_456_789);
    }

    #[test]
    fn test_pre_epoch_systemtime_normalizes() {
        let t = UNIX_EPOCH - Duration::new(0, 500_000_000);
        let ts = TimeSpec::from(t);
        assert_eq!(ts.tv_sec, -1);
        assert_eq!(ts.tv_nsec, 500_000_000);
    }

    #[test]
    fn test_systemtime_round_trip() {
        for t in [
            UNIX_EPOCH + Duration::new(1_234_567_890, 123_456_789),
            UNIX_EPOCH - Duration::new(3, 250_000_000),
            UNIX_EPOCH,
        ] {
            assert_eq!(SystemTime::from(TimeSpec::from(t)), t);
        }
    }

    #[test]
    fn test_duration_round_trip() {
        let d = Duration::new(123, 456_789_000);
        let ts = TimeSpec::from(d);
        assert_eq!(ts.tv_sec, 123);
        assert_eq!(ts.tv_nsec, 456_789_000);
        assert_eq!(Duration::try_from(ts).unwrap(), d);
    }

    #[test]
    fn test_negative_to_duration_fails() {
        let ts = TimeSpec::from_milliseconds(-1);
        assert_eq!(Duration::try_from(ts), Err(TimeConversionError::Negative));

        let tv = TimeVal::from_milliseconds(-1);
        assert_eq!(Duration::try_from(tv), Err(TimeConversionError::Negative));
    }

    #[test]
    fn test_timeval_duration_conversions() {
        let d = Duration::new(2, 750_000_000);
        let tv = TimeVal::from(d);
        assert_eq!(tv.tv_sec, 2);
        assert_eq!(tv.tv_usec, 750_000);
        assert_eq!(Duration::try_from(tv).unwrap(), d);
    }

    #[test]
    fn test_timeval_systemtime_round_trip() {
        let t = UNIX_EPOCH + Duration::new(1_234_567_890, 500_000_000);
        assert_eq!(SystemTime::from(TimeVal::from(t)), t);
    }

    #[test]
    fn test_add_to_instant() {
        let base = Instant::now();

        let ts = TimeSpec::new(1, 500_000_000);
        let shifted = ts.add_to_instant(base).unwrap();
        assert_eq!(shifted.duration_since(base), Duration::new(1, 500_000_000));

        assert!(TimeSpec::new(-1, 0).add_to_instant(base).is_err());
    }

    #[test]
    fn test_from_instant_elapsed() {
        let instant = Instant::now();
        let ts = TimeSpec::from_instant_elapsed(instant);
        let tv = TimeVal::from_instant_elapsed(instant);
        assert!(ts.tv_sec >= 0);
        assert!(tv.tv_sec >= 0);
    }
}
