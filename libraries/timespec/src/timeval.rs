use crate::{TimeSpec, USEC_PER_SEC};

/// A time value represented as whole seconds plus sub-second microseconds.
///
/// The layout is compatible with the POSIX `timeval` structure. Like
/// [`TimeSpec`], values are kept normalized: `tv_usec` lies in
/// `[0, 1_000_000)` and the sign is carried entirely by `tv_sec`.
///
/// # Examples
///
/// ```
/// use timespec::TimeVal;
///
/// let tv = TimeVal::new(1, 500_000);
/// assert_eq!(tv.total_seconds(), 1.5);
///
/// let sum = tv + TimeVal::new(0, 600_000);
/// assert_eq!(sum, TimeVal::new(2, 100_000));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeVal {
    /// Seconds component of the time
    pub tv_sec: i64,
    /// Microseconds component of the time (0-999,999 when normalized)
    pub tv_usec: i64,
}

impl TimeVal {
    /// Create a new TimeVal, normalizing the microseconds component into
    /// `[0, USEC_PER_SEC)`.
    #[inline]
    pub const fn new(sec: i64, usec: i64) -> TimeVal {
        TimeVal {
            tv_sec: sec + usec.div_euclid(USEC_PER_SEC),
            tv_usec: usec.rem_euclid(USEC_PER_SEC),
        }
    }

    /// Create a new TimeVal from raw field values, without normalizing.
    #[inline]
    pub const fn new_unchecked(sec: i64, usec: i64) -> TimeVal {
        TimeVal {
            tv_sec: sec,
            tv_usec: usec,
        }
    }

    /// The zero time value.
    #[inline]
    pub const fn zero() -> TimeVal {
        TimeVal {
            tv_sec: 0,
            tv_usec: 0,
        }
    }

    /// Return this value in normalized form. Idempotent.
    #[inline]
    pub const fn normalized(self) -> TimeVal {
        TimeVal::new(self.tv_sec, self.tv_usec)
    }

    /// Create a TimeVal from milliseconds, normalizing negative inputs.
    #[inline]
    pub const fn from_milliseconds(milliseconds: i64) -> TimeVal {
        TimeVal::new_unchecked(
            milliseconds.div_euclid(1_000),
            milliseconds.rem_euclid(1_000) * 1_000,
        )
    }

    /// Create a TimeVal from microseconds.
    #[inline]
    pub const fn from_microseconds(microseconds: i64) -> TimeVal {
        TimeVal::new_unchecked(
            microseconds.div_euclid(USEC_PER_SEC),
            microseconds.rem_euclid(USEC_PER_SEC),
        )
    }

    /// Get the total time as floating-point seconds.
    #[inline]
    pub fn total_seconds(&self) -> f64 {
        self.tv_sec as f64 + self.tv_usec as f64 / USEC_PER_SEC as f64
    }

    /// Get the total time in whole milliseconds, truncating.
    #[inline]
    pub const fn total_milliseconds(&self) -> i64 {
        self.tv_sec * 1_000 + self.tv_usec / 1_000
    }

    /// Get the total time in microseconds.
    #[inline]
    pub const fn total_microseconds(&self) -> i64 {
        self.tv_sec * USEC_PER_SEC + self.tv_usec
    }

    /// Get the total time in nanoseconds.
    #[inline]
    pub const fn total_nanoseconds(&self) -> i64 {
        self.tv_sec * 1_000_000_000 + self.tv_usec * 1_000
    }

    /// Convert this TimeVal to a TimeSpec. Exact, since one microsecond is
    /// exactly 1000 nanoseconds.
    ///
    /// # Examples
    /// ```
    /// use timespec::{TimeSpec, TimeVal};
    ///
    /// let tv = TimeVal::new(1, 500_000);
    /// assert_eq!(tv.to_timespec(), TimeSpec::new(1, 500_000_000));
    /// ```
    #[inline]
    pub const fn to_timespec(&self) -> TimeSpec {
        TimeSpec::new(self.tv_sec, self.tv_usec * 1_000)
    }

    /// Check if this TimeVal represents zero time.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_micros_i128() == 0
    }

    /// Check if this TimeVal represents positive time.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.total_micros_i128() > 0
    }

    /// Check if this TimeVal represents negative time.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.total_micros_i128() < 0
    }

    /// Get the absolute value of this TimeVal.
    pub fn abs(&self) -> TimeVal {
        let total = self.total_micros_i128().abs();
        TimeVal {
            tv_sec: (total / USEC_PER_SEC as i128) as i64,
            tv_usec: (total % USEC_PER_SEC as i128) as i64,
        }
    }

    /// Add microseconds to this TimeVal, carrying into seconds as needed.
    pub fn add_micros(&mut self, micros: i64) {
        let total = self.tv_usec + micros;
        self.tv_sec += total.div_euclid(USEC_PER_SEC);
        self.tv_usec = total.rem_euclid(USEC_PER_SEC);
    }

    /// Add milliseconds to this TimeVal.
    #[inline]
    pub fn add_milliseconds(&mut self, milliseconds: i64) {
        self.add_micros(milliseconds * 1_000);
    }

    /// Add seconds to this TimeVal.
    #[inline]
    pub fn add_seconds(&mut self, seconds: i64) {
        self.tv_sec += seconds;
    }

    #[inline]
    pub(crate) const fn total_micros_i128(&self) -> i128 {
        self.tv_sec as i128 * USEC_PER_SEC as i128 + self.tv_usec as i128
    }
}

impl Default for TimeVal {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for TimeVal {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_micros_i128().cmp(&other.total_micros_i128())
    }
}

impl PartialOrd for TimeVal {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TimeVal {
    fn eq(&self, other: &Self) -> bool {
        self.total_micros_i128() == other.total_micros_i128()
    }
}

impl Eq for TimeVal {}

impl core::ops::Add for TimeVal {
    type Output = TimeVal;

    fn add(self, rhs: Self) -> Self::Output {
        let mut time = self;
        time.tv_sec += rhs.tv_sec;
        time.add_micros(rhs.tv_usec);
        time
    }
}

impl core::ops::AddAssign for TimeVal {
    fn add_assign(&mut self, rhs: Self) {
        self.tv_sec += rhs.tv_sec;
        self.add_micros(rhs.tv_usec);
    }
}

impl core::ops::Sub for TimeVal {
    type Output = TimeVal;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut time = self;
        time.tv_sec -= rhs.tv_sec;
        time.add_micros(-rhs.tv_usec);
        time
    }
}

impl core::ops::SubAssign for TimeVal {
    fn sub_assign(&mut self, rhs: Self) {
        self.tv_sec -= rhs.tv_sec;
        self.add_micros(-rhs.tv_usec);
    }
}

impl core::ops::Neg for TimeVal {
    type Output = TimeVal;

    fn neg(self) -> TimeVal {
        TimeVal::new(-self.tv_sec, -self.tv_usec)
    }
}
