//! # cinealign-subtitle
//!
//! Subtitle I/O for the cinealign workspace.
//!
//! ## Features
//!
//! - The [`SubtitleCue`] value type, a [`cinealign_core::Period`] the
//!   alignment engine can re-time
//! - SRT (SubRip) reading, with inline markup stripped ([`srt`])
//! - ASS (Advanced SubStation Alpha) writing, styled from the film's
//!   intertitle colors ([`ass`])
//!
//! ## Quick Start
//!
//! ```
//! use cinealign_subtitle::{ass, srt, VideoInfo};
//! use cinealign_intertitle::TitleStyle;
//!
//! let cues = srt::parse("1\n00:00:01,000 --> 00:00:04,000\nHello!\n\n").unwrap();
//! assert_eq!(cues.len(), 1);
//!
//! let out = ass::write(&cues, &TitleStyle::default(), &VideoInfo::new("Film", 1920, 1080));
//! assert!(out.contains("Hello!"));
//! ```

pub mod ass;
pub mod cue;
pub mod error;
pub mod srt;

pub use ass::VideoInfo;
pub use cue::SubtitleCue;
pub use error::{SubtitleError, SubtitleResult};
