//! ASS (Advanced SubStation Alpha) writing.
//!
//! The output carries one named style derived from the film's intertitle
//! aesthetics: lettering in the sampled foreground color on an opaque box
//! in the background color, centered like a title card.

use std::fmt::Write;

use cinealign_intertitle::TitleStyle;

use crate::cue::SubtitleCue;

/// The video facts an ASS header needs.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl VideoInfo {
    /// Creates video info.
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }
}

/// The style name every dialogue line references.
const STYLE_NAME: &str = "cinealign";

/// Renders cues as a complete ASS file.
pub fn write(cues: &[SubtitleCue], style: &TitleStyle, video: &VideoInfo) -> String {
    let mut out = String::new();
    out.push_str(&script_info(video));
    out.push_str(&styles_block(style));
    out.push_str(&events_block(cues));
    out
}

fn script_info(video: &VideoInfo) -> String {
    format!(
        "[Script Info]\n\
         Title: {}\n\
         ScriptType: v4.00+\n\
         WrapStyle: 0\n\
         PlayResX: {}\n\
         PlayResY: {}\n\
         Collisions: Normal\n\
         \n",
        video.title, video.width, video.height
    )
}

fn styles_block(style: &TitleStyle) -> String {
    format!(
        "[V4+ Styles]\n\
         Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding\n\
         Style: {},Georgia,28,{},{},{},{},0,0,0,0,100,100,0,0,3,2,0,5,10,10,10,1\n\
         \n",
        STYLE_NAME,
        style.foreground.to_ass(),
        style.foreground.to_ass(),
        style.background.to_ass(),
        style.background.to_ass(),
    )
}

fn events_block(cues: &[SubtitleCue]) -> String {
    let mut out = String::from(
        "[Events]\n\
         Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\n",
    );
    for cue in cues {
        let _ = writeln!(
            out,
            "Dialogue: 0,{},{},{},,0000,0000,0000,,{}",
            timecode(cue.start),
            timecode(cue.end),
            STYLE_NAME,
            escape_text(&cue.text)
        );
    }
    out
}

/// Formats an instant as an ASS timecode (`H:MM:SS.cc`, centiseconds).
/// Instants before the epoch clamp to zero; ASS cannot express them.
pub fn timecode(t: cinealign_core::MediaInstant) -> String {
    let ms = t.as_millis().max(0);
    format!(
        "{}:{:02}:{:02}.{:02}",
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1000,
        (ms % 1000) / 10
    )
}

/// ASS dialogue text is single-line; embedded newlines become `\N`.
fn escape_text(text: &str) -> String {
    text.replace('\n', "\\N")
}
