//! The intertitle detection file.
//!
//! This file is the boundary to the upstream frame classifier and color
//! extractor: one boolean per frame in frame order, the frame rate they
//! were sampled at, and optionally the color pair the extractor reported.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use cinealign_intertitle::{Rgb, TitleStyle};

#[derive(Debug, Deserialize)]
pub struct DetectionFile {
    /// Frame rate the detections were sampled at.
    pub fps: f64,
    /// One flag per frame, true where the classifier saw an intertitle.
    pub frames: Vec<bool>,
    /// Lettering color reported by the color extractor, as #RRGGBB.
    #[serde(default)]
    pub foreground: Option<String>,
    /// Card color reported by the color extractor, as #RRGGBB.
    #[serde(default)]
    pub background: Option<String>,
}

impl DetectionFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading detection file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing detection file {}", path.display()))
    }

    /// The style carried by the file; defaults fill in whatever the
    /// extractor did not report.
    pub fn style(&self) -> anyhow::Result<TitleStyle> {
        let fallback = TitleStyle::default();
        let foreground = match &self.foreground {
            Some(hex) => Rgb::from_hex(hex)?,
            None => fallback.foreground,
        };
        let background = match &self.background {
            Some(hex) => Rgb::from_hex(hex)?,
            None => fallback.background,
        };
        Ok(TitleStyle::new(foreground, background))
    }
}
