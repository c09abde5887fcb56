//! The period contract and stateless interval primitives.
//!
//! A period is anything with a start instant, an end instant, a validity
//! check, and the ability to produce a re-bounded copy of itself. Subtitle
//! cues, intertitle ranges, and whole collections of either all qualify,
//! which is what lets the alignment engine treat a mixed timeline uniformly.

use crate::instant::{MediaInstant, MediaSpan};

/// A span of media time with an attached payload.
///
/// Implementations must uphold `end() >= start()` whenever `valid()` holds,
/// and `with_bounds` must preserve every non-temporal field of the payload.
/// Operating on a `valid()`-false period is a precondition violation, not a
/// recoverable error; invalidity exists as a queryable state so that
/// half-constructed inputs (e.g. a frame rate that has not been probed yet)
/// stay representable.
pub trait Period {
    /// Whether the period is well-formed.
    fn valid(&self) -> bool;

    /// The instant the period begins.
    fn start(&self) -> MediaInstant;

    /// The instant the period ends. Never earlier than `start()` for a
    /// valid period.
    fn end(&self) -> MediaInstant;

    /// A copy of this period spanning `start..end`, payload intact.
    #[must_use]
    fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self;
}

/// True iff the interiors of `a` and `b` intersect.
///
/// Bounds that merely touch do not count; for that, see [`touches`].
pub fn overlaps<A: Period, B: Period>(a: &A, b: &B) -> bool {
    a.start() < b.end() && b.start() < a.end()
}

/// True iff `a` and `b` overlap or their bounds coincide.
pub fn touches<A: Period, B: Period>(a: &A, b: &B) -> bool {
    b.end() >= a.start() && a.end() >= b.start()
}

/// The length of the section shared by `a` and `b`, or zero if they do not
/// overlap.
pub fn overlap_span<A: Period, B: Period>(a: &A, b: &B) -> MediaSpan {
    let latest_start = a.start().max(b.start());
    let earliest_end = a.end().min(b.end());
    if earliest_end < latest_start {
        return MediaSpan::ZERO;
    }
    earliest_end - latest_start
}

/// A copy of `period` moved by `amount`.
pub fn shift<P: Period>(period: &P, amount: MediaSpan) -> P {
    period.with_bounds(period.start() + amount, period.end() + amount)
}

/// A copy of `period` scaled by `factor` about `origin`.
///
/// A negative factor reflects the period through the origin; the computed
/// bounds are swapped in that case so the result still runs start-to-end.
pub fn scale<P: Period>(period: &P, origin: MediaInstant, factor: f64) -> P {
    let mut new_start = period.start().scale_from(origin, factor);
    let mut new_end = period.end().scale_from(origin, factor);
    if factor < 0.0 {
        std::mem::swap(&mut new_start, &mut new_end);
    }
    period.with_bounds(new_start, new_end)
}

/// The length of time `period` covers.
pub fn span<P: Period>(period: &P) -> MediaSpan {
    period.end() - period.start()
}
