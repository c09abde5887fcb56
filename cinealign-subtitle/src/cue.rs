//! The subtitle cue value type.

use cinealign_core::{MediaInstant, MediaSpan, Period};
use cinealign_intertitle::TitleStyle;

/// One displayed subtitle: when it appears, when it disappears, and what it
/// says.
///
/// A cue is a [`Period`]; the alignment engine never mutates one in place,
/// it only derives re-bounded copies.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    pub start: MediaInstant,
    pub end: MediaInstant,
    pub text: String,
    pub style: TitleStyle,
}

impl SubtitleCue {
    /// Creates a cue with the default style.
    pub fn new(start: MediaInstant, end: MediaInstant, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            style: TitleStyle::default(),
        }
    }

    /// Sets the style.
    pub fn with_style(mut self, style: TitleStyle) -> Self {
        self.style = style;
        self
    }

    /// How long the cue stays on screen.
    pub fn duration(&self) -> MediaSpan {
        self.end - self.start
    }
}

impl Period for SubtitleCue {
    fn valid(&self) -> bool {
        self.end >= self.start
    }

    fn start(&self) -> MediaInstant {
        self.start
    }

    fn end(&self) -> MediaInstant {
        self.end
    }

    fn with_bounds(&self, start: MediaInstant, end: MediaInstant) -> Self {
        Self {
            start,
            end,
            text: self.text.clone(),
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinealign_intertitle::Rgb;

    fn at(seconds: f64) -> MediaInstant {
        MediaInstant::from_seconds_f64(seconds)
    }

    #[test]
    fn test_cue_validity() {
        assert!(SubtitleCue::new(at(1.0), at(2.0), "a").valid());
        assert!(SubtitleCue::new(at(1.0), at(1.0), "a").valid());
        assert!(!SubtitleCue::new(at(2.0), at(1.0), "a").valid());
    }

    #[test]
    fn test_cue_duration() {
        let cue = SubtitleCue::new(at(1.0), at(3.5), "a");
        assert_eq!(cue.duration(), MediaSpan::from_millis(2500));
    }

    #[test]
    fn test_rebound_preserves_text_and_style() {
        let style = TitleStyle::new(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        let cue = SubtitleCue::new(at(1.0), at(2.0), "Sieh her!").with_style(style);
        let moved = cue.with_bounds(at(10.0), at(12.0));
        assert_eq!(moved.start, at(10.0));
        assert_eq!(moved.end, at(12.0));
        assert_eq!(moved.text, "Sieh her!");
        assert_eq!(moved.style, style);
    }
}
