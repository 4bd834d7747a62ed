//! Frame-by-frame state of one animation run, and the driver that steps it.
//!
//! A run owns an `AnimationState`. Each frame moves the state into `step`,
//! which returns the next state along with everything a renderer needs to
//! redraw. Nothing is shared between runs.

use crate::config::Config;
use crate::error::Result;
use crate::kinematics::{Frame, RotationState};
use crate::vec2::Vec2;
use log::{debug, info, warn};
use std::thread;
use std::time::Instant;

/// One point of the cross product trace.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrossProductSample {
    pub theta: f64,
    pub cross: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub rotation: RotationState,

    /// Number of frames stepped so far.
    pub frame: usize,

    /// Append-only; ordered by non-decreasing θ for schedules that pass
    /// `Config::validate`.
    pub samples: Vec<CrossProductSample>,
}

impl AnimationState {
    /// Both vectors at angle zero, no samples.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[CrossProductSample] {
        &self.samples
    }
}

/// Everything that changed in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// Zero-based index of this frame.
    pub frame: usize,
    /// Driving angle from the schedule.
    pub theta: f64,
    pub rotation: RotationState,
    pub kinematics: Frame,
    pub readout: String,
}

pub fn readout(cross: f64) -> String {
    // keep values that round to zero from printing as "-0.00"
    let cross = if cross.abs() < 0.005 { 0.0 } else { cross };
    format!("Cross product: {:>6.2}", cross)
}

/// Advances `state` to the driving angle `theta`.
pub fn step(state: AnimationState, theta: f64, config: &Config) -> (AnimationState, FrameOutput) {
    let AnimationState {
        rotation,
        frame,
        mut samples,
    } = state;

    let rotation = config.rotation.advance(rotation, theta, frame == 0);
    let kinematics = rotation.compute_frame(config.mag1, config.mag2);

    if config.second_plot_enabled {
        samples.push(CrossProductSample {
            theta,
            cross: kinematics.cross,
        });
    }

    let output = FrameOutput {
        frame,
        theta,
        rotation,
        kinematics,
        readout: readout(kinematics.cross),
    };
    let next = AnimationState {
        rotation,
        frame: frame + 1,
        samples,
    };
    (next, output)
}

/// What a renderer draws before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialEntities {
    pub mag1: f64,
    pub mag2: f64,
    /// Both arrows, at angle zero.
    pub arrows: [Vec2<f64>; 2],
    pub readout: String,
    /// Whether to draw the (initially empty) cross product trace.
    pub trace: bool,
}

pub fn initial_entities(config: &Config) -> InitialEntities {
    let frame = RotationState::default().compute_frame(config.mag1, config.mag2);
    InitialEntities {
        mag1: config.mag1,
        mag2: config.mag2,
        arrows: [frame.v1, frame.v2],
        readout: "Cross product: 0".to_string(),
        trace: config.second_plot_enabled,
    }
}

/// A labeled tick on the trace's θ axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    pub index: usize,
    pub value: f64,
    pub text: String,
}

/// Labels every major tick on the trace's θ axis.
pub fn trace_axis_ticks(config: &Config) -> Result<Vec<TickLabel>> {
    let labeler = config.labeler()?;
    let (lo, hi) = config.trace_axis_range();
    labeler
        .ticks(lo, hi)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Ok(TickLabel {
                index,
                value,
                text: labeler.format_tick(value, index)?,
            })
        })
        .collect()
}

/// The drawing side of the animation.
pub trait Renderer {
    /// Called once, before any frame.
    fn init(&mut self, entities: &InitialEntities) -> Result<()>;

    /// Called once after `init` when the trace is enabled.
    fn axis_ticks(&mut self, _ticks: &[TickLabel]) -> Result<()> {
        Ok(())
    }

    /// Called once per frame, in order. `samples` is the trace so far, including
    /// this frame's sample.
    fn draw_frame(&mut self, output: &FrameOutput, samples: &[CrossProductSample]) -> Result<()>;

    /// Called once after the last frame.
    fn finish(&mut self, _state: &AnimationState) -> Result<()> {
        Ok(())
    }
}

/// Runs one animation from a fresh state to the end of the schedule, pacing
/// frames at `config.interval`. Does not repeat.
pub fn run<R: Renderer + ?Sized>(config: &Config, renderer: &mut R) -> Result<AnimationState> {
    config.validate()?;
    if config.mag1 <= 0.0 || config.mag2 <= 0.0 {
        warn!(
            "non-positive magnitude ({}, {}); vectors point away from their angle or vanish",
            config.mag1, config.mag2
        );
    }

    let thetas = config.schedule.thetas();
    info!(
        "running {} frames, magnitudes {} and {}, {:?} rotation",
        thetas.len(),
        config.mag1,
        config.mag2,
        config.rotation
    );

    renderer.init(&initial_entities(config))?;
    if config.second_plot_enabled {
        let ticks = trace_axis_ticks(config)?;
        debug!("trace axis ticks: {:?}", ticks);
        renderer.axis_ticks(&ticks)?;
    }

    let mut state = AnimationState::new();
    let mut deadline = Instant::now();
    for theta in thetas {
        let (next, output) = step(state, theta, config);
        state = next;
        debug!(
            "frame {}: theta {:.4}, v1 {:?}, v2 {:?}, cross {:.4}",
            output.frame, output.theta, output.kinematics.v1, output.kinematics.v2, output.kinematics.cross
        );
        renderer.draw_frame(&output, state.samples())?;

        if !config.interval.is_zero() {
            deadline += config.interval;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            }
        }
    }

    renderer.finish(&state)?;
    info!("animation finished after {} frames", state.frame);
    Ok(state)
}
