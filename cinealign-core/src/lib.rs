//! # cinealign-core
//!
//! Core interval algebra for the cinealign workspace.
//!
//! This crate provides the fundamental building blocks the rest of the
//! workspace aligns subtitles with:
//! - Millisecond-precision instants and spans on the film's timeline
//! - The [`Period`] contract: anything with a start, an end, a validity
//!   check, and a payload-preserving re-bound operation
//! - Stateless primitives over one or two periods (overlap and touching
//!   tests, shifting, affine scaling)
//! - Operations over collections of periods: topology-preserving group
//!   rescaling, proportional overlap separation, touching-run merging, and
//!   gap covering
//!
//! Everything here is pure: no I/O, no shared state, no serialization.
//! Operations take borrowed inputs and build new values.
//!
//! # Example
//!
//! ```
//! use cinealign_core::{fix_overlaps, MediaInstant, Period};
//!
//! #[derive(Clone)]
//! struct Beat(MediaInstant, MediaInstant);
//!
//! impl Period for Beat {
//!     fn valid(&self) -> bool { self.1 >= self.0 }
//!     fn start(&self) -> MediaInstant { self.0 }
//!     fn end(&self) -> MediaInstant { self.1 }
//!     fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self {
//!         Beat(start, end)
//!     }
//! }
//!
//! let beats = vec![
//!     Beat(MediaInstant::from_millis(1000), MediaInstant::from_millis(3000)),
//!     Beat(MediaInstant::from_millis(2000), MediaInstant::from_millis(4000)),
//! ];
//! let separated = fix_overlaps(&beats);
//! assert_eq!(separated[0].end(), MediaInstant::from_millis(2500));
//! ```

pub mod group;
pub mod instant;
pub mod period;

pub use group::{cover_gaps, fix_overlaps, merge_touching, sort_periods};
pub use instant::{MediaInstant, MediaSpan};
pub use period::{overlap_span, overlaps, scale, shift, span, touches, Period};
