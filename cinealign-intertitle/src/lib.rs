//! # cinealign-intertitle
//!
//! Intertitle detection plumbing for the cinealign workspace: turning a
//! per-frame boolean detection signal into typed, styled time ranges.
//!
//! ## Features
//!
//! - Morphological smoothing of the raw detection signal ([`smooth`])
//! - Extraction of contiguous `true` runs into [`TitleRange`] values with
//!   a style sampled at each run's midpoint frame ([`map_ranges`])
//! - Merging of ranges separated by at most one frame
//!   ([`join_touching_ranges`])
//! - The [`StyleSampler`] boundary behind which the color-extraction
//!   collaborator lives
//!
//! What this crate deliberately does not do: decide whether a frame is an
//! intertitle (that is the classifier's job, upstream) or extract colors
//! from pixels (that is the sampler implementation's job, also upstream).
//!
//! ## Quick Start
//!
//! ```
//! use cinealign_intertitle::{map_ranges, FixedStyleSampler};
//!
//! let detections = [true, true, true, false, false, true, true];
//! let sampler = FixedStyleSampler::default();
//! let ranges = map_ranges(&detections, 24.0, &sampler).unwrap();
//!
//! assert_eq!(ranges.len(), 2);
//! assert_eq!((ranges[0].start_frame, ranges[0].end_frame), (0, 2));
//! ```

pub mod error;
pub mod range;
pub mod smooth;
pub mod style;

pub use error::{Error, Result};
pub use range::{join_touching_ranges, map_ranges, TitleRange};
pub use style::{FixedStyleSampler, Rgb, StyleSampler, TitleStyle};
