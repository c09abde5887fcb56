//! The `inspect` subcommand: show what the detection file contains.

use std::path::PathBuf;

use clap::Args;
use console::style;

use cinealign_core::{span, Period};
use cinealign_intertitle::{map_ranges, smooth, FixedStyleSampler};

use crate::detections::DetectionFile;

#[derive(Debug, Args)]
pub struct CmdInspect {
    /// Intertitle detection file (JSON).
    #[arg(short, long)]
    detections: PathBuf,

    /// Smoothing window in frames; 0 shows the raw signal's ranges.
    #[arg(long, default_value_t = 0)]
    smooth_window: usize,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

impl CmdInspect {
    pub fn run(&self) -> anyhow::Result<()> {
        let detection = DetectionFile::load(&self.detections)?;
        let sampler = FixedStyleSampler(detection.style()?);

        let flags = smooth::open(
            &smooth::close(&detection.frames, self.smooth_window),
            self.smooth_window,
        );
        let ranges = map_ranges(&flags, detection.fps, &sampler)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&ranges)?);
            return Ok(());
        }

        println!(
            "{} intertitle range(s) at {} fps",
            style(ranges.len()).cyan().bold(),
            detection.fps
        );
        for (index, range) in ranges.iter().enumerate() {
            println!(
                "  {:>3}  frames {:>6}..={:<6}  {} -> {}  ({})",
                index + 1,
                range.start_frame,
                range.end_frame,
                range.start(),
                range.end(),
                span(range)
            );
        }
        Ok(())
    }
}
