//! Command line arguments for crossprod

use clap::Parser;
use crossprod::config::{Config, Schedule};
use crossprod::{LabelStyle, Result, RotationPolicy};

#[derive(Parser, Debug)]
#[command(name = "crossprod")]
#[command(about = "Animate two rotating vectors and their cross product")]
#[command(version)]
pub struct Cli {
    /// Magnitude of the first vector
    #[arg(default_value_t = crossprod::config::DEFAULT_MAG1, allow_negative_numbers = true)]
    pub mag1: f64,

    /// Magnitude of the second vector
    #[arg(default_value_t = crossprod::config::DEFAULT_MAG2, allow_negative_numbers = true)]
    pub mag2: f64,

    /// Label θ axis ticks at multiples of π / DENOMINATOR
    #[arg(long, default_value_t = crossprod::config::DEFAULT_DENOMINATOR, allow_negative_numbers = true)]
    pub denominator: i64,

    /// Number of frames in the half turn
    #[arg(long, default_value_t = crossprod::config::DEFAULT_FRAMES)]
    pub frames: usize,

    /// Frames per second; 0 runs without pacing
    #[arg(long, default_value_t = crossprod::config::DEFAULT_FPS)]
    pub fps: f64,

    /// Skip the cross product trace
    #[arg(long)]
    pub no_trace: bool,

    /// Advance the second vector by STEP radians per frame instead of mirroring the first
    #[arg(long, value_name = "STEP", allow_negative_numbers = true)]
    pub independent: Option<f64>,

    /// Write tick labels as TeX markup
    #[arg(long)]
    pub tex: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<Config> {
        let mut config = Config::mature().with_magnitudes(self.mag1, self.mag2);
        config.labeler_denominator = self.denominator;
        config.schedule = Schedule::half_turn(self.frames);
        config.second_plot_enabled = !self.no_trace;
        if let Some(step2) = self.independent {
            config.rotation = RotationPolicy::Independent { step2 };
        }
        if self.tex {
            config.label_style = LabelStyle::Tex;
        }
        if self.fps == 0.0 {
            config.interval = std::time::Duration::from_secs(0);
        } else {
            config = config.with_fps(self.fps)?;
        }
        config.validate()?;
        Ok(config)
    }
}
