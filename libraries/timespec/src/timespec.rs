use crate::{TimeVal, NSEC_PER_SEC};

/// A time value represented as whole seconds plus sub-second nanoseconds.
///
/// The layout is compatible with the POSIX `timespec` structure. Values are
/// kept in normalized form: `tv_nsec` lies in `[0, 1_000_000_000)` and the
/// sign of the value is carried entirely by `tv_sec`, so -0.5 seconds is
/// `{ tv_sec: -1, tv_nsec: 500_000_000 }`.
///
/// # Examples
///
/// ```
/// use timespec::TimeSpec;
///
/// // Constructors normalize their input
/// let ts = TimeSpec::new(5, 1_500_000_000);
/// assert_eq!(ts.tv_sec, 6);
/// assert_eq!(ts.tv_nsec, 500_000_000);
///
/// // Arithmetic operations
/// let earlier = TimeSpec::new(1, 800_000_000);
/// let later = TimeSpec::new(3, 100_000_000);
/// assert_eq!(later - earlier, TimeSpec::new(1, 300_000_000));
/// assert_eq!(earlier - later, TimeSpec::new(-2, 700_000_000));
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSpec {
    /// Seconds component of the time
    pub tv_sec: i64,
    /// Nanoseconds component of the time (0-999,999,999 when normalized)
    pub tv_nsec: i64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds and nanoseconds.
    ///
    /// The nanoseconds component may be negative or larger than one second;
    /// it is brought into `[0, NSEC_PER_SEC)` with a single Euclidean
    /// division, carrying whole seconds into `tv_sec`.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::new(2, -500_000_000);
    /// assert_eq!(ts.tv_sec, 1);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    /// ```
    #[inline]
    pub const fn new(sec: i64, nsec: i64) -> TimeSpec {
        TimeSpec {
            tv_sec: sec + nsec.div_euclid(NSEC_PER_SEC),
            tv_nsec: nsec.rem_euclid(NSEC_PER_SEC),
        }
    }

    /// Create a new TimeSpec from raw field values, without normalizing.
    ///
    /// It is the caller's responsibility to keep the fields in normalized
    /// form; [`TimeSpec::normalized`] restores it for arbitrary pairs.
    #[inline]
    pub const fn new_unchecked(sec: i64, nsec: i64) -> TimeSpec {
        TimeSpec {
            tv_sec: sec,
            tv_nsec: nsec,
        }
    }

    /// The zero time value.
    #[inline]
    pub const fn zero() -> TimeSpec {
        TimeSpec {
            tv_sec: 0,
            tv_nsec: 0,
        }
    }

    /// Return this value in normalized form.
    ///
    /// Idempotent: normalizing an already-normalized value returns it
    /// unchanged. Handles nanosecond magnitudes arbitrarily larger than one
    /// second in O(1).
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let raw = TimeSpec::new_unchecked(0, -3_200_000_000);
    /// let ts = raw.normalized();
    /// assert_eq!(ts.tv_sec, -4);
    /// assert_eq!(ts.tv_nsec, 800_000_000);
    /// assert_eq!(ts.normalized(), ts);
    /// ```
    #[inline]
    pub const fn normalized(self) -> TimeSpec {
        TimeSpec::new(self.tv_sec, self.tv_nsec)
    }

    /// Create a TimeSpec from whole hours.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// const TIMEOUT: TimeSpec = TimeSpec::from_hours(2);
    /// assert_eq!(TIMEOUT.tv_sec, 7_200);
    /// ```
    #[inline]
    pub const fn from_hours(hours: i64) -> TimeSpec {
        TimeSpec::new_unchecked(hours * 3_600, 0)
    }

    /// Create a TimeSpec from milliseconds.
    ///
    /// Negative inputs yield a normalized result rather than a truncated one.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::from_milliseconds(-1500);
    /// assert_eq!(ts.tv_sec, -2);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    /// ```
    #[inline]
    pub const fn from_milliseconds(milliseconds: i64) -> TimeSpec {
        TimeSpec::new_unchecked(
            milliseconds.div_euclid(1_000),
            milliseconds.rem_euclid(1_000) * 1_000_000,
        )
    }

    /// Create a TimeSpec from microseconds.
    #[inline]
    pub const fn from_microseconds(microseconds: i64) -> TimeSpec {
        TimeSpec::new_unchecked(
            microseconds.div_euclid(1_000_000),
            microseconds.rem_euclid(1_000_000) * 1_000,
        )
    }

    /// Create a TimeSpec from nanoseconds.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::from_nanoseconds(-1);
    /// assert_eq!(ts.tv_sec, -1);
    /// assert_eq!(ts.tv_nsec, 999_999_999);
    /// ```
    #[inline]
    pub const fn from_nanoseconds(nanoseconds: i64) -> TimeSpec {
        TimeSpec::new_unchecked(
            nanoseconds.div_euclid(NSEC_PER_SEC),
            nanoseconds.rem_euclid(NSEC_PER_SEC),
        )
    }

    /// Create a TimeSpec from a floating-point seconds value.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::from_seconds_f64(-0.5);
    /// assert_eq!(ts.tv_sec, -1);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    /// ```
    pub fn from_seconds_f64(seconds: f64) -> TimeSpec {
        let sec = seconds as i64;
        let nsec = ((seconds - sec as f64) * NSEC_PER_SEC as f64) as i64;
        TimeSpec::new(sec, nsec)
    }

    /// Create a TimeSpec from clock ticks at a given frequency.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// // 1500 ticks at 1000 Hz = 1.5 seconds
    /// let ts = TimeSpec::from_ticks(1500, 1000);
    /// assert_eq!(ts.tv_sec, 1);
    /// assert_eq!(ts.tv_nsec, 500_000_000);
    /// ```
    pub fn from_ticks(ticks: i64, freq: u64) -> TimeSpec {
        assert!(freq > 0, "tick frequency must be > 0");
        let freq = freq as i64;
        let rem = ticks.rem_euclid(freq);
        TimeSpec {
            tv_sec: ticks.div_euclid(freq),
            tv_nsec: ((rem as i128 * NSEC_PER_SEC as i128) / freq as i128) as i64,
        }
    }

    /// Get the total time as floating-point seconds.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// assert_eq!(TimeSpec::from_milliseconds(-1500).total_seconds(), -1.5);
    /// ```
    #[inline]
    pub fn total_seconds(&self) -> f64 {
        self.tv_sec as f64 + self.tv_nsec as f64 / NSEC_PER_SEC as f64
    }

    /// Get the total time in whole milliseconds, truncating the sub-millisecond
    /// remainder. Both fields are combined before truncation, never rounded
    /// independently.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// assert_eq!(TimeSpec::from_milliseconds(-1500).total_milliseconds(), -1500);
    /// ```
    #[inline]
    pub const fn total_milliseconds(&self) -> i64 {
        self.tv_sec * 1_000 + self.tv_nsec / 1_000_000
    }

    /// Get the total time in whole microseconds, truncating.
    #[inline]
    pub const fn total_microseconds(&self) -> i64 {
        self.tv_sec * 1_000_000 + self.tv_nsec / 1_000
    }

    /// Get the total time in nanoseconds.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::new(1, 500_000_000);
    /// assert_eq!(ts.total_nanoseconds(), 1_500_000_000);
    /// ```
    #[inline]
    pub const fn total_nanoseconds(&self) -> i64 {
        self.tv_sec * NSEC_PER_SEC + self.tv_nsec
    }

    /// Convert this TimeSpec to a TimeVal.
    ///
    /// Truncates nanoseconds to microseconds.
    ///
    /// # Examples
    /// ```
    /// use timespec::{TimeSpec, TimeVal};
    ///
    /// let ts = TimeSpec::new(1, 500_000_999);
    /// assert_eq!(ts.to_timeval(), TimeVal::new(1, 500_000));
    /// ```
    #[inline]
    pub const fn to_timeval(&self) -> TimeVal {
        TimeVal::new(self.tv_sec, self.tv_nsec / 1_000)
    }

    /// Check if this TimeSpec represents zero time.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_nanos_i128() == 0
    }

    /// Check if this TimeSpec represents positive time.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.total_nanos_i128() > 0
    }

    /// Check if this TimeSpec represents negative time.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.total_nanos_i128() < 0
    }

    /// Get the absolute value of this TimeSpec.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let ts = TimeSpec::new(-1, 200_000_000); // -0.8 s
    /// assert_eq!(ts.abs(), TimeSpec::new(0, 800_000_000));
    /// ```
    pub fn abs(&self) -> TimeSpec {
        let total = self.total_nanos_i128().abs();
        TimeSpec {
            tv_sec: (total / NSEC_PER_SEC as i128) as i64,
            tv_nsec: (total % NSEC_PER_SEC as i128) as i64,
        }
    }

    /// Add nanoseconds to this TimeSpec, carrying into seconds as needed.
    ///
    /// # Examples
    /// ```
    /// use timespec::TimeSpec;
    ///
    /// let mut ts = TimeSpec::new(1, 500_000_000);
    /// ts.add_nanos(700_000_000);
    /// assert_eq!(ts, TimeSpec::new(2, 200_000_000));
    /// ```
    pub fn add_nanos(&mut self, nanos: i64) {
        let total = self.tv_nsec + nanos;
        self.tv_sec += total.div_euclid(NSEC_PER_SEC);
        self.tv_nsec = total.rem_euclid(NSEC_PER_SEC);
    }

    /// Add seconds to this TimeSpec.
    #[inline]
    pub fn add_seconds(&mut self, seconds: i64) {
        self.tv_sec += seconds;
    }

    /// Add milliseconds to this TimeSpec.
    #[inline]
    pub fn add_milliseconds(&mut self, milliseconds: i64) {
        self.add_nanos(milliseconds * 1_000_000);
    }

    /// Add microseconds to this TimeSpec.
    #[inline]
    pub fn add_microseconds(&mut self, microseconds: i64) {
        self.add_nanos(microseconds * 1_000);
    }

    /// Exact total nanoseconds, wide enough to never overflow for i64 fields.
    #[inline]
    pub(crate) const fn total_nanos_i128(&self) -> i128 {
        self.tv_sec as i128 * NSEC_PER_SEC as i128 + self.tv_nsec as i128
    }
}

impl Default for TimeSpec {
    fn default() -> Self {
        Self::zero()
    }
}

/// The single three-way comparator all relational operations flow from,
/// including the `Ord`-provided `min`, `max` and `clamp`, which return one
/// of their arguments unchanged. Compares exact total nanoseconds, so it is
/// consistent even for values that bypassed normalization.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use timespec::TimeSpec;
///
/// let a = TimeSpec::from_milliseconds(100);
/// let b = TimeSpec::from_milliseconds(200);
/// assert_eq!(a.cmp(&b), Ordering::Less);
/// assert_eq!(a.min(b), a);
/// assert_eq!(a.max(b), b);
/// assert_eq!(TimeSpec::from_milliseconds(300).clamp(a, b), b);
/// ```
impl Ord for TimeSpec {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.total_nanos_i128().cmp(&other.total_nanos_i128())
    }
}

impl PartialOrd for TimeSpec {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TimeSpec {
    fn eq(&self, other: &Self) -> bool {
        self.total_nanos_i128() == other.total_nanos_i128()
    }
}

impl Eq for TimeSpec {}

impl core::ops::Add<TimeSpec> for TimeSpec {
    type Output = TimeSpec;

    fn add(self, other: TimeSpec) -> TimeSpec {
        let mut time = self;
        time.tv_sec += other.tv_sec;
        time.add_nanos(other.tv_nsec);
        time
    }
}

impl core::ops::AddAssign<TimeSpec> for TimeSpec {
    fn add_assign(&mut self, other: TimeSpec) {
        self.tv_sec += other.tv_sec;
        self.add_nanos(other.tv_nsec);
    }
}

impl core::ops::Sub<TimeSpec> for TimeSpec {
    type Output = TimeSpec;

    fn sub(self, other: TimeSpec) -> TimeSpec {
        let mut time = self;
        time.tv_sec -= other.tv_sec;
        time.add_nanos(-other.tv_nsec);
        time
    }
}

impl core::ops::SubAssign<TimeSpec> for TimeSpec {
    fn sub_assign(&mut self, other: TimeSpec) {
        self.tv_sec -= other.tv_sec;
        self.add_nanos(-other.tv_nsec);
    }
}

impl core::ops::Neg for TimeSpec {
    type Output = TimeSpec;

    fn neg(self) -> TimeSpec {
        TimeSpec::new(-self.tv_sec, -self.tv_nsec)
    }
}

/// Remainder of `self` divided by a positive, nonzero time value.
///
/// The result is normalized and lies in `[0, divisor)`, also when `self`
/// is negative. Computed over exact integer nanoseconds, so very large
/// second counts don't lose precision.
///
/// A zero or negative divisor violates the contract and panics.
///
/// # Examples
/// ```
/// use timespec::TimeSpec;
///
/// let period = TimeSpec::new(3, 0);
/// assert_eq!(TimeSpec::new(7, 0) % period, TimeSpec::new(1, 0));
/// assert_eq!(TimeSpec::from_seconds_f64(-0.5) % period, TimeSpec::new(2, 500_000_000));
/// ```
impl core::ops::Rem<TimeSpec> for TimeSpec {
    type Output = TimeSpec;

    fn rem(self, divisor: TimeSpec) -> TimeSpec {
        assert!(divisor.is_positive(), "modulo divisor must be positive");
        let rem = self
            .total_nanos_i128()
            .rem_euclid(divisor.total_nanos_i128());
        TimeSpec {
            tv_sec: (rem / NSEC_PER_SEC as i128) as i64,
            tv_nsec: (rem % NSEC_PER_SEC as i128) as i64,
        }
    }
}
