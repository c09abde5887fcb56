//! The `generate` subcommand: SRT in, aligned ASS out.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::{debug, info};

use cinealign_align::align;
use cinealign_intertitle::{map_ranges, smooth, FixedStyleSampler};
use cinealign_subtitle::{ass, srt, VideoInfo};

use crate::detections::DetectionFile;

#[derive(Debug, Args)]
pub struct CmdGenerate {
    /// Input subtitles (SRT).
    #[arg(short, long)]
    subs: PathBuf,

    /// Intertitle detection file (JSON).
    #[arg(short, long)]
    detections: PathBuf,

    /// Output subtitles (ASS).
    #[arg(short, long)]
    output: PathBuf,

    /// Smoothing window in frames; 0 disables smoothing.
    #[arg(long, default_value_t = 5)]
    smooth_window: usize,

    /// Title for the ASS script info block. Defaults to the output
    /// file name.
    #[arg(long)]
    title: Option<String>,

    /// Playback resolution width.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Playback resolution height.
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

impl CmdGenerate {
    pub fn run(&self) -> anyhow::Result<()> {
        let srt_text = fs::read_to_string(&self.subs)
            .with_context(|| format!("reading subtitles {}", self.subs.display()))?;
        let cues = srt::parse(&srt_text)?;
        info!(cues = cues.len(), "read subtitles");

        let detection = DetectionFile::load(&self.detections)?;
        let style = detection.style()?;
        debug!(
            frames = detection.frames.len(),
            fps = detection.fps,
            "read detection signal"
        );

        // Knock out single-frame speckle, then bridge short dropouts.
        let flags = smooth::open(
            &smooth::close(&detection.frames, self.smooth_window),
            self.smooth_window,
        );
        let ranges = map_ranges(&flags, detection.fps, &FixedStyleSampler(style))?;
        info!(ranges = ranges.len(), "extracted intertitle ranges");

        let film = align(cues, ranges);
        info!(cues = film.cues.len(), ranges = film.ranges.len(), "aligned");

        let title = self.title.clone().unwrap_or_else(|| {
            self.output
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "cinealign".to_string())
        });
        let video = VideoInfo::new(title, self.width, self.height);
        let rendered = ass::write(&film.cues, &style, &video);

        fs::write(&self.output, rendered)
            .with_context(|| format!("writing {}", self.output.display()))?;
        info!(path = %self.output.display(), "wrote aligned subtitles");
        Ok(())
    }
}
