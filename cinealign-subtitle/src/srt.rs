//! SRT (SubRip) reading.
//!
//! SRT blocks are a numeric index, a `HH:MM:SS,mmm --> HH:MM:SS,mmm`
//! timing line, text lines, and a blank separator. Inline markup is
//! stripped: the styling of the output comes from the film's own
//! intertitles, never from tags in the input subtitle.

use cinealign_core::MediaInstant;

use crate::cue::SubtitleCue;
use crate::error::{SubtitleError, SubtitleResult};

/// Parses SRT content into cues.
pub fn parse(content: &str) -> SubtitleResult<Vec<SubtitleCue>> {
    let mut cues = Vec::new();
    let mut lines = content.lines().peekable();

    while lines.peek().is_some() {
        // Skip blank separators.
        while lines.peek().is_some_and(|l| l.trim().is_empty()) {
            lines.next();
        }
        if lines.peek().is_none() {
            break;
        }

        // The index line; we don't require it to actually be numeric.
        let _index_line = lines.next();

        let timing_line = lines.next().ok_or_else(|| {
            SubtitleError::ParseError("Subtitle block ends before its timing line".into())
        })?;
        let (start, end) = parse_timing_line(timing_line)?;

        let mut text_lines = Vec::new();
        while let Some(line) = lines.peek() {
            if line.trim().is_empty() {
                break;
            }
            text_lines.push(strip_markup(line));
            lines.next();
        }

        if !text_lines.is_empty() {
            cues.push(SubtitleCue::new(start, end, text_lines.join("\n")));
        }
    }

    Ok(cues)
}

/// Writes cues as SRT content.
pub fn write(cues: &[SubtitleCue]) -> String {
    let mut out = String::new();
    for (index, cue) in cues.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            timecode(cue.start),
            timecode(cue.end),
            cue.text
        ));
    }
    out
}

fn parse_timing_line(line: &str) -> SubtitleResult<(MediaInstant, MediaInstant)> {
    let parts: Vec<&str> = line.split("-->").collect();
    if parts.len() != 2 {
        return Err(SubtitleError::ParseError(format!(
            "Invalid timing line: {}",
            line
        )));
    }
    let start = parse_timecode(parts[0].trim())?;
    // Tolerate position hints after the end timestamp.
    let end_field = parts[1].split_whitespace().next().unwrap_or("");
    let end = parse_timecode(end_field)?;
    Ok((start, end))
}

/// Parses a `HH:MM:SS,mmm` timecode. A period is accepted in place of the
/// comma, as in the wild both appear.
pub fn parse_timecode(s: &str) -> SubtitleResult<MediaInstant> {
    let invalid = || SubtitleError::InvalidTimestamp(s.to_string());

    let fields: Vec<&str> = s.trim().split(':').collect();
    if fields.len() != 3 {
        return Err(invalid());
    }
    let hours: i64 = fields[0].parse().map_err(|_| invalid())?;
    let minutes: i64 = fields[1].parse().map_err(|_| invalid())?;

    let seconds_fields: Vec<&str> = fields[2].split([',', '.']).collect();
    if seconds_fields.len() != 2 {
        return Err(invalid());
    }
    let seconds: i64 = seconds_fields[0].parse().map_err(|_| invalid())?;
    let millis: i64 = seconds_fields[1].parse().map_err(|_| invalid())?;

    Ok(MediaInstant::from_millis(
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
    ))
}

/// Formats an instant as an SRT timecode.
pub fn timecode(t: MediaInstant) -> String {
    let ms = t.as_millis().max(0);
    format!(
        "{:02}:{:02}:{:02},{:03}",
        ms / 3_600_000,
        (ms % 3_600_000) / 60_000,
        (ms % 60_000) / 1000,
        ms % 1000
    )
}

/// Drops `<...>` tags and `{...}` override blocks, keeping the text.
fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut in_brace = false;
    for c in text.chars() {
        match c {
            '<' if !in_brace => in_tag = true,
            '>' if in_tag => in_tag = false,
            '{' if !in_tag => in_brace = true,
            '}' if in_brace => in_brace = false,
            _ if !in_tag && !in_brace => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_file() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:01:05,500 --> 00:01:08,250\nSecond card.\n";
        let cues = parse(content).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "Hello, world!");
        assert_eq!(cues[0].start.as_millis(), 1000);
        assert_eq!(cues[0].end.as_millis(), 4000);
        assert_eq!(cues[1].start.as_millis(), 65_500);
        assert_eq!(cues[1].end.as_millis(), 68_250);
    }

    #[test]
    fn test_parse_multiline_text() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nLine one\nLine two\n\n";
        let cues = parse(content).unwrap();
        assert_eq!(cues[0].text, "Line one\nLine two");
    }

    #[test]
    fn test_parse_strips_markup() {
        let content =
            "1\n00:00:01,000 --> 00:00:04,000\n<i>Emphatic</i> {\\an8}words\n\n";
        let cues = parse(content).unwrap();
        assert_eq!(cues[0].text, "Emphatic words");
    }

    #[test]
    fn test_parse_accepts_period_separator() {
        let t = parse_timecode("01:02:03.456").unwrap();
        assert_eq!(t.as_millis(), 3_723_456);
    }

    #[test]
    fn test_parse_rejects_bad_timing_line() {
        assert!(parse("1\n00:00:01,000 -> 00:00:04,000\nText\n\n").is_err());
        assert!(parse("1\nnot a timing line\nText\n\n").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_timecode() {
        assert!(parse_timecode("00:00:01").is_err());
        assert!(parse_timecode("aa:bb:cc,ddd").is_err());
        assert!(parse_timecode("00:00:01,000,5").is_err());
    }

    #[test]
    fn test_parse_skips_textless_blocks() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\n\n2\n00:00:03,000 --> 00:00:04,000\nKept.\n\n";
        let cues = parse(content).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Kept.");
    }

    #[test]
    fn test_roundtrip() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello!\n\n";
        let cues = parse(content).unwrap();
        assert_eq!(write(&cues), content);
    }

    #[test]
    fn test_timecode_formatting() {
        assert_eq!(timecode(MediaInstant::from_millis(3_723_456)), "01:02:03,456");
        assert_eq!(timecode(MediaInstant::from_millis(0)), "00:00:00,000");
    }
}
