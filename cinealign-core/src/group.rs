//! Ordered collections of periods, treated as periods themselves.
//!
//! A `Vec<P>` of periods is a period: its bounds are the min-start/max-end
//! of its members, and re-bounding it rescales every member so that the
//! collection's internal topology (which members overlap, and by what
//! proportion) is preserved. The repair operations here (overlap
//! separation, touching-run merging, gap covering) are what the alignment
//! engine is built from.

use crate::instant::MediaInstant;
use crate::period::{overlaps, scale, shift, span, touches, Period};

impl<P: Period + Clone> Period for Vec<P> {
    /// An empty collection is invalid; a non-empty one is valid iff every
    /// member is.
    fn valid(&self) -> bool {
        !self.is_empty() && self.iter().all(Period::valid)
    }

    /// The earliest member start, or the epoch sentinel when empty.
    fn start(&self) -> MediaInstant {
        self.iter()
            .map(Period::start)
            .min()
            .unwrap_or(MediaInstant::EPOCH)
    }

    /// The latest member end, or the epoch sentinel when empty.
    fn end(&self) -> MediaInstant {
        self.iter()
            .map(Period::end)
            .max()
            .unwrap_or(MediaInstant::EPOCH)
    }

    /// Rescales the whole collection onto `start..end`.
    ///
    /// Every member is shifted so the collection's minimum lands on `start`,
    /// then scaled about `start` by the ratio of the desired span to the
    /// current span. The transform is affine and order-preserving: members
    /// that overlapped by some proportion of the old span overlap by the
    /// same proportion of the new one.
    fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self {
        let current_start = self.start();
        let current_span = self.end() - current_start;
        let desired_span = end - start;

        let delta = start - current_start;
        let shifted: Vec<P> = self.iter().map(|p| shift(p, delta)).collect();

        if current_span.is_zero() {
            // A zero-width collection cannot be stretched; placing it at
            // the new start is the whole transform.
            return shifted;
        }
        let factor = desired_span.as_millis() as f64 / current_span.as_millis() as f64;
        shifted.iter().map(|p| scale(p, start, factor)).collect()
    }
}

/// Sorts periods ascending by start, ties broken by ascending end. Stable.
pub fn sort_periods<P: Period>(periods: &mut [P]) {
    periods.sort_by(|a, b| a.start().cmp(&b.start()).then(a.end().cmp(&b.end())));
}

/// Separates overlapping periods so that no two overlap afterwards.
///
/// The input is sorted, then grouped into maximal runs in which each period
/// overlaps the running union of its run. Each run is laid out back-to-back
/// across its original span, every member given a width proportional to its
/// own original duration, so overlapping time is redistributed rather than
/// clipped.
/// Periods that overlap nothing pass through unchanged.
///
/// When every member of a run has zero duration the proportional formula
/// has no answer; the run's span is divided equally instead.
pub fn fix_overlaps<P: Period + Clone>(periods: &[P]) -> Vec<P> {
    let mut sorted = periods.to_vec();
    sort_periods(&mut sorted);

    let mut result = Vec::with_capacity(sorted.len());
    let mut run: Vec<P> = Vec::new();
    for item in sorted {
        if run.is_empty() || overlaps(&item, &run) {
            run.push(item);
        } else {
            result.extend(separate(std::mem::replace(&mut run, vec![item])));
        }
    }
    result.extend(separate(run));
    result
}

/// Lays the members of one overlapping run out contiguously across the
/// run's span, in order, with proportional widths.
fn separate<P: Period + Clone>(run: Vec<P>) -> Vec<P> {
    if run.is_empty() {
        return run;
    }
    let run_start = run.start();
    let run_span = span(&run);
    let summed: i64 = run.iter().map(|p| span(p).as_millis()).sum();

    // Boundaries come from cumulative fractions of the run span, so the
    // final member always ends exactly on the run's end and the widths sum
    // to the span despite millisecond rounding.
    let mut result = Vec::with_capacity(run.len());
    let mut cursor = run_start;
    let mut cumulative: i64 = 0;
    for (index, period) in run.iter().enumerate() {
        let fraction = if summed == 0 {
            (index + 1) as f64 / run.len() as f64
        } else {
            cumulative += span(period).as_millis();
            cumulative as f64 / summed as f64
        };
        let next = run_start + run_span * fraction;
        result.push(period.with_bounds(cursor, next));
        cursor = next;
    }
    result
}

/// Merges every maximal touching run into a single period via `merge_fn`.
///
/// Run detection matches [`fix_overlaps`] but uses [`touches`], so
/// boundary-adjacent periods merge too. Each run is folded left-to-right.
/// `merge_fn(a, b)` must return a period spanning `a.start()..b.end()`;
/// that obligation sits with the caller and is not re-checked here.
pub fn merge_touching<P, F>(periods: &[P], merge_fn: F) -> Vec<P>
where
    P: Period + Clone,
    F: Fn(&P, &P) -> P,
{
    let mut sorted = periods.to_vec();
    sort_periods(&mut sorted);

    let mut result = Vec::new();
    let mut run: Vec<P> = Vec::new();
    for item in sorted {
        if run.is_empty() || touches(&item, &run) {
            run.push(item);
        } else {
            let finished = std::mem::replace(&mut run, vec![item]);
            result.push(fold_run(finished, &merge_fn));
        }
    }
    if !run.is_empty() {
        result.push(fold_run(run, &merge_fn));
    }
    result
}

fn fold_run<P, F>(run: Vec<P>, merge_fn: &F) -> P
where
    P: Period + Clone,
    F: Fn(&P, &P) -> P,
{
    let mut members = run.into_iter();
    let first = members.next().expect("touching runs hold at least one period");
    members.fold(first, |merged, next| merge_fn(&merged, &next))
}

/// Stretches adjacent periods toward each other until every gap is closed.
///
/// Works over a sorted copy, pair by pair, left to right. Each gap is split
/// between the two periods in proportion to their original durations and
/// both are re-bounded to meet at the resulting instant. A pair of
/// zero-duration periods splits the gap down the middle.
pub fn cover_gaps<P: Period + Clone>(periods: &[P]) -> Vec<P> {
    let mut result = periods.to_vec();
    sort_periods(&mut result);

    for i in 0..result.len().saturating_sub(1) {
        let before = &result[i];
        let after = &result[i + 1];
        if touches(before, after) {
            continue;
        }

        let gap = after.start() - before.end();
        let before_span = span(before);
        let after_span = span(after);
        let total = before_span + after_span;
        let share_after = if total.is_zero() {
            0.5
        } else {
            after_span.as_millis() as f64 / total.as_millis() as f64
        };
        let meeting = after.start() - gap * share_after;

        let stretched_before = before.with_bounds(before.start(), meeting);
        let stretched_after = after.with_bounds(meeting, after.end());
        result[i] = stretched_before;
        result[i + 1] = stretched_after;
    }
    result
}
