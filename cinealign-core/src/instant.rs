//! Millisecond-precision media time.
//!
//! All timing in this workspace is expressed as an offset from an arbitrary
//! epoch (the start of the film). Milliseconds are fine-grained enough for
//! subtitle work: SRT is millisecond-grained and ASS only centisecond-grained.
//! Offsets are signed because group rescaling shifts members leftwards through
//! transiently negative intermediates.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point on the film's timeline, as milliseconds since an arbitrary epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MediaInstant {
    millis: i64,
}

impl MediaInstant {
    /// The zero instant, used as the sentinel for empty period groups.
    pub const EPOCH: Self = Self { millis: 0 };

    /// Creates an instant from milliseconds since the epoch.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Milliseconds since the epoch.
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Creates an instant from seconds since the epoch, rounded to the
    /// nearest millisecond.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        Self {
            millis: (seconds * 1000.0).round() as i64,
        }
    }

    /// Seconds since the epoch.
    pub fn as_seconds_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// The instant at which `frame` displays, given a frame rate.
    ///
    /// A non-positive frame rate has no meaningful time axis; the epoch is
    /// returned as a sentinel so that transiently unprobed inputs stay
    /// representable. Callers are expected to check validity before doing
    /// arithmetic that matters.
    pub fn from_frame(frame: i64, fps: f64) -> Self {
        if fps <= 0.0 {
            return Self::EPOCH;
        }
        Self::from_seconds_f64(frame as f64 / fps)
    }

    /// The frame displaying at this instant, given a frame rate.
    /// Non-positive frame rates map everything to frame zero.
    pub fn to_frame(&self, fps: f64) -> i64 {
        if fps <= 0.0 {
            return 0;
        }
        (self.as_seconds_f64() * fps).round() as i64
    }

    /// Scales this instant's distance from `origin` by `factor`.
    ///
    /// e.g. 2s scaled about 1s by a factor of 2.0 lands on 3s.
    pub fn scale_from(&self, origin: MediaInstant, factor: f64) -> Self {
        let distance = (self.millis - origin.millis) as f64;
        origin + MediaSpan::from_millis((distance * factor).round() as i64)
    }
}

impl Add<MediaSpan> for MediaInstant {
    type Output = MediaInstant;

    fn add(self, rhs: MediaSpan) -> MediaInstant {
        MediaInstant::from_millis(self.millis + rhs.millis)
    }
}

impl Sub<MediaSpan> for MediaInstant {
    type Output = MediaInstant;

    fn sub(self, rhs: MediaSpan) -> MediaInstant {
        MediaInstant::from_millis(self.millis - rhs.millis)
    }
}

impl Sub<MediaInstant> for MediaInstant {
    type Output = MediaSpan;

    fn sub(self, rhs: MediaInstant) -> MediaSpan {
        MediaSpan::from_millis(self.millis - rhs.millis)
    }
}

impl fmt::Display for MediaInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.millis < 0 { "-" } else { "" };
        let abs = self.millis.unsigned_abs();
        write!(
            f,
            "{}{}:{:02}:{:02}.{:03}",
            sign,
            abs / 3_600_000,
            (abs % 3_600_000) / 60_000,
            (abs % 60_000) / 1000,
            abs % 1000
        )
    }
}

/// A signed length of media time, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MediaSpan {
    millis: i64,
}

impl MediaSpan {
    /// The empty span.
    pub const ZERO: Self = Self { millis: 0 };

    /// Creates a span from milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// The span's length in milliseconds.
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Creates a span from seconds, rounded to the nearest millisecond.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        Self {
            millis: (seconds * 1000.0).round() as i64,
        }
    }

    /// The span's length in seconds.
    pub fn as_seconds_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// True for the empty span.
    pub const fn is_zero(&self) -> bool {
        self.millis == 0
    }
}

impl Add for MediaSpan {
    type Output = MediaSpan;

    fn add(self, rhs: MediaSpan) -> MediaSpan {
        MediaSpan::from_millis(self.millis + rhs.millis)
    }
}

impl Sub for MediaSpan {
    type Output = MediaSpan;

    fn sub(self, rhs: MediaSpan) -> MediaSpan {
        MediaSpan::from_millis(self.millis - rhs.millis)
    }
}

impl Neg for MediaSpan {
    type Output = MediaSpan;

    fn neg(self) -> MediaSpan {
        MediaSpan::from_millis(-self.millis)
    }
}

impl Mul<f64> for MediaSpan {
    type Output = MediaSpan;

    /// Scales the span, rounding to the nearest millisecond.
    fn mul(self, rhs: f64) -> MediaSpan {
        MediaSpan::from_millis((self.millis as f64 * rhs).round() as i64)
    }
}

impl fmt::Display for MediaSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_seconds_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_seconds_conversion() {
        let t = MediaInstant::from_seconds_f64(1.5);
        assert_eq!(t.as_millis(), 1500);
        assert!((t.as_seconds_f64() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_instant_from_frame() {
        assert_eq!(MediaInstant::from_frame(5, 1.0).as_millis(), 5000);
        assert_eq!(MediaInstant::from_frame(12, 24.0).as_millis(), 500);
        // Sentinel for an unprobed frame rate.
        assert_eq!(MediaInstant::from_frame(5, 0.0), MediaInstant::EPOCH);
        assert_eq!(MediaInstant::from_frame(5, -1.0), MediaInstant::EPOCH);
    }

    #[test]
    fn test_frame_roundtrip_at_fractional_fps() {
        let fps = 23.976;
        for frame in [0, 1, 10, 1000, 86_399] {
            let t = MediaInstant::from_frame(frame, fps);
            assert_eq!(t.to_frame(fps), frame);
        }
    }

    #[test]
    fn test_scale_from() {
        let t = MediaInstant::from_seconds_f64(2.0);
        let origin = MediaInstant::from_seconds_f64(1.0);
        assert_eq!(t.scale_from(origin, 2.0).as_millis(), 3000);
        assert_eq!(t.scale_from(origin, 0.5).as_millis(), 1500);
        assert_eq!(t.scale_from(origin, -1.0).as_millis(), 0);
    }

    #[test]
    fn test_instant_arithmetic() {
        let a = MediaInstant::from_millis(4000);
        let b = MediaInstant::from_millis(1000);
        assert_eq!(a - b, MediaSpan::from_millis(3000));
        assert_eq!(b - a, MediaSpan::from_millis(-3000));
        assert_eq!(b + MediaSpan::from_millis(500), MediaInstant::from_millis(1500));
        assert_eq!(a - MediaSpan::from_millis(500), MediaInstant::from_millis(3500));
    }

    #[test]
    fn test_span_scaling() {
        let s = MediaSpan::from_millis(1000);
        assert_eq!((s * 0.25).as_millis(), 250);
        assert_eq!((s * -1.5).as_millis(), -1500);
    }

    #[test]
    fn test_display() {
        assert_eq!(MediaInstant::from_millis(3_725_250).to_string(), "1:02:05.250");
        assert_eq!(MediaInstant::from_millis(-500).to_string(), "-0:00:00.500");
        assert_eq!(MediaSpan::from_millis(1500).to_string(), "1.500s");
    }
}
