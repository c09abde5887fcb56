//! Intertitle ranges and their extraction from the detection signal.

use serde::{Deserialize, Serialize};

use cinealign_core::{MediaInstant, Period};

use crate::error::Result;
use crate::style::{StyleSampler, TitleStyle};

/// A contiguous span of frames showing one intertitle card.
///
/// Frames are inclusive on both ends. A range is a [`Period`]: its instants
/// are derived from the frame indices through the frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TitleRange {
    pub start_frame: i64,
    pub end_frame: i64,
    pub fps: f64,
    pub style: TitleStyle,
}

impl TitleRange {
    /// Creates a range over `start_frame..=end_frame` with the default
    /// style.
    pub fn new(start_frame: i64, end_frame: i64, fps: f64) -> Self {
        Self {
            start_frame,
            end_frame,
            fps,
            style: TitleStyle::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: TitleStyle) -> Self {
        self.style = style;
        self
    }

    /// The frame halfway through the range, where the card is most likely
    /// to be fully faded in.
    pub fn midpoint_frame(&self) -> i64 {
        (self.start_frame + self.end_frame) / 2
    }
}

impl Period for TitleRange {
    fn valid(&self) -> bool {
        self.fps > 0.0 && self.start_frame >= 0 && self.start_frame <= self.end_frame
    }

    fn start(&self) -> MediaInstant {
        MediaInstant::from_frame(self.start_frame, self.fps)
    }

    fn end(&self) -> MediaInstant {
        MediaInstant::from_frame(self.end_frame, self.fps)
    }

    fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self {
        Self {
            start_frame: start.to_frame(self.fps),
            end_frame: end.to_frame(self.fps),
            fps: self.fps,
            style: self.style,
        }
    }
}

/// Reduces a per-frame detection signal to the ranges of `true` frames.
///
/// Each maximal run of `true` becomes one range; a run still open when the
/// signal ends is closed at the final frame. The style of each range is
/// sampled at its midpoint frame. Empty and all-`false` signals produce no
/// ranges.
pub fn map_ranges<S: StyleSampler>(
    flags: &[bool],
    fps: f64,
    sampler: &S,
) -> Result<Vec<TitleRange>> {
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut last = false;
    for (frame, &on) in flags.iter().enumerate() {
        if on && !last {
            run_start = Some(frame);
        }
        if last && !on {
            if let Some(start) = run_start.take() {
                ranges.push(close_run(start, frame - 1, fps, sampler)?);
            }
        }
        last = on;
    }
    if let Some(start) = run_start {
        ranges.push(close_run(start, flags.len() - 1, fps, sampler)?);
    }
    Ok(ranges)
}

fn close_run<S: StyleSampler>(
    start: usize,
    end: usize,
    fps: f64,
    sampler: &S,
) -> Result<TitleRange> {
    let range = TitleRange::new(start as i64, end as i64, fps);
    let style = sampler.sample(range.midpoint_frame())?;
    Ok(range.with_style(style))
}

/// Merges ranges whose frame spans overlap, touch, or sit exactly one
/// frame apart.
///
/// The one-frame allowance is specific to the frame domain: two ranges
/// covering frames ..=5 and 6.. have no frame between them, so the cards
/// they describe are one continuous segment on screen. This is deliberately
/// laxer than the instant-domain [`cinealign_core::touches`]. Each merged
/// range spans the union of its run and keeps the first member's style.
pub fn join_touching_ranges(ranges: &[TitleRange]) -> Vec<TitleRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| {
        a.start_frame
            .cmp(&b.start_frame)
            .then(a.end_frame.cmp(&b.end_frame))
    });

    let mut result: Vec<TitleRange> = Vec::new();
    let mut run: Option<TitleRange> = None;
    for range in sorted {
        match run {
            Some(mut union) if frames_touch(&union, &range) => {
                union.start_frame = union.start_frame.min(range.start_frame);
                union.end_frame = union.end_frame.max(range.end_frame);
                run = Some(union);
            }
            Some(union) => {
                result.push(union);
                run = Some(range);
            }
            None => run = Some(range),
        }
    }
    if let Some(union) = run {
        result.push(union);
    }
    result
}

/// Frame-domain touching: overlapping, adjacent, or one frame apart.
fn frames_touch(a: &TitleRange, b: &TitleRange) -> bool {
    if b.end_frame >= a.start_frame && a.end_frame >= b.start_frame {
        return true;
    }
    b.start_frame - a.end_frame == 1 || a.start_frame - b.end_frame == 1
}
