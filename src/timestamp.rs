//! Monotonic timestamp values and the arithmetic the frame loop needs.

/// Nanoseconds per second, the carry base for [`Timestamp`] math.
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A monotonic clock reading split into whole seconds and nanoseconds.
///
/// Plain `Copy` record with `timespec` layout. Captures come from
/// [`Platform::now`](crate::Platform::now); a reading is only meaningful
/// relative to another reading from the same process, never as wall-clock
/// time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    /// Whole seconds.
    pub secs: i64,
    /// Nanosecond remainder; captured values keep this in `0..1_000_000_000`.
    pub nanos: i64,
}

/// Units for scaled timestamp differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
}

impl Timestamp {
    pub const fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }

    /// Signed nanosecond delta since `earlier`; negative when `self`
    /// precedes it.
    ///
    /// Plain `i64` arithmetic with no overflow guard; the delta only wraps
    /// past roughly 292 years, which no monotonic session reaches.
    pub fn nanos_since(self, earlier: Timestamp) -> i64 {
        (self.nanos - earlier.nanos) + (self.secs - earlier.secs) * NANOS_PER_SEC
    }

    /// The delta since `earlier` scaled to `unit`, as a float.
    pub fn diff_in(self, earlier: Timestamp, unit: TimeUnit) -> f64 {
        let exact = self.nanos_since(earlier) as f64;
        match unit {
            TimeUnit::Seconds => exact * 1e-9,
            TimeUnit::Milliseconds => exact * 1e-6,
            TimeUnit::Microseconds => exact * 1e-3,
        }
    }

    /// The point `fraction` of the way from `self` toward `later`.
    ///
    /// The scaled delta is computed in nanosecond space and truncated toward
    /// zero; nanosecond overflow carries into the seconds field, so
    /// interpolating between two captured readings never yields
    /// `nanos >= 1_000_000_000`. Callers pass `fraction` in `[0, 1]` with
    /// `self <= later`; values outside that domain keep the truncating
    /// arithmetic but skip any negative-side carry.
    pub fn lerp(self, later: Timestamp, fraction: f32) -> Timestamp {
        let scaled = (later.nanos_since(self) as f64 * f64::from(fraction)) as i64;
        let mut out = Timestamp::new(
            self.secs + scaled / NANOS_PER_SEC,
            self.nanos + scaled % NANOS_PER_SEC,
        );
        if out.nanos >= NANOS_PER_SEC {
            out.nanos -= NANOS_PER_SEC;
            out.secs += 1;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_diff_is_antisymmetric() {
        let a = Timestamp::new(5, 250_000_000);
        let b = Timestamp::new(7, 100_000_000);
        assert_eq!(b.nanos_since(a), 1_850_000_000);
        assert_eq!(a.nanos_since(b), -1_850_000_000);
    }

    #[test]
    fn test_diff_in_units() {
        let a = Timestamp::new(1, 0);
        let b = Timestamp::new(2, 500_000_000);
        assert_eq!(b.diff_in(a, TimeUnit::Seconds), 1.5);
        assert_eq!(b.diff_in(a, TimeUnit::Milliseconds), 1_500.0);
        assert_eq!(b.diff_in(a, TimeUnit::Microseconds), 1_500_000.0);
    }

    #[test]
    fn test_lerp_at_zero_returns_start() {
        let a = Timestamp::new(3, 999_999_999);
        let b = Timestamp::new(10, 0);
        assert_eq!(a.lerp(b, 0.0), a);
    }

    #[test]
    fn test_lerp_at_one_returns_end() {
        let a = Timestamp::new(0, 999_999_999);
        let b = Timestamp::new(1, 0);
        assert_eq!(a.lerp(b, 1.0), b);

        let a = Timestamp::new(0, 1);
        let b = Timestamp::new(2, 0);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_truncates_toward_zero() {
        let a = Timestamp::new(0, 0);
        let b = Timestamp::new(0, 100);
        // 0.333 of 100ns is 33.3ns; the fractional part is dropped.
        assert_eq!(a.lerp(b, 0.333), Timestamp::new(0, 33));
    }

    #[test]
    fn test_lerp_carries_nanosecond_overflow() {
        let a = Timestamp::new(4, 800_000_000);
        let b = Timestamp::new(5, 800_000_000);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Timestamp::new(5, 300_000_000));
    }

    #[test]
    fn test_ordering_follows_seconds_then_nanos() {
        assert!(Timestamp::new(1, 999_999_999) < Timestamp::new(2, 0));
        assert!(Timestamp::new(2, 1) > Timestamp::new(2, 0));
    }

    // Keep deltas well under 2^53 nanoseconds so the f64 scaling in `lerp`
    // stays exact for the endpoint checks.
    fn captured() -> impl Strategy<Value = Timestamp> {
        (0i64..100_000, 0i64..NANOS_PER_SEC).prop_map(|(secs, nanos)| Timestamp::new(secs, nanos))
    }

    proptest! {
        #[test]
        fn prop_diff_antisymmetric(a in captured(), b in captured()) {
            prop_assert_eq!(b.nanos_since(a), -a.nanos_since(b));
        }

        #[test]
        fn prop_lerp_endpoints(a in captured(), b in captured()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert_eq!(lo.lerp(hi, 0.0), lo);
            prop_assert_eq!(lo.lerp(hi, 1.0), hi);
        }

        #[test]
        fn prop_lerp_stays_normalized(a in captured(), b in captured(), f in 0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let out = lo.lerp(hi, f);
            prop_assert!(out.nanos >= 0);
            prop_assert!(out.nanos < NANOS_PER_SEC);
        }

        #[test]
        fn prop_lerp_brackets_inputs(a in captured(), b in captured(), f in 0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let out = lo.lerp(hi, f);
            prop_assert!(lo <= out);
            prop_assert!(out <= hi);
        }
    }
}
