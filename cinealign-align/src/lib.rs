//! # cinealign-align
//!
//! The alignment engine of the cinealign workspace: takes subtitle cues
//! whose timings are only approximately right and the intertitle ranges
//! detected in the film, and re-times the cues so they sit exactly on the
//! title cards.
//!
//! ## Quick Start
//!
//! ```
//! use cinealign_align::align;
//! use cinealign_core::MediaInstant;
//! use cinealign_intertitle::TitleRange;
//! use cinealign_subtitle::SubtitleCue;
//!
//! // A cue that runs 1s..3s, against a title card on frames 0..=48 at
//! // 24 fps (0s..2s).
//! let cues = vec![SubtitleCue::new(
//!     MediaInstant::from_seconds_f64(1.0),
//!     MediaInstant::from_seconds_f64(3.0),
//!     "Der Nosferatu!",
//! )];
//! let ranges = vec![TitleRange::new(0, 48, 24.0)];
//!
//! let film = align(cues, ranges);
//! assert_eq!(film.cues[0].start, MediaInstant::from_seconds_f64(0.0));
//! assert_eq!(film.cues[0].end, MediaInstant::from_seconds_f64(2.0));
//! ```

pub mod engine;

pub use engine::{align, AlignedFilm};
