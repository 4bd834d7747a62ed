use crate::error::{Error, Result};
use crate::kinematics::RotationPolicy;
use crate::labeler::{LabelStyle, MultipleOf};
use crate::math::{linspace, M_PI};
use std::time::Duration;

pub const DEFAULT_MAG1: f64 = 4.0;
pub const DEFAULT_MAG2: f64 = 3.0;
pub const DEFAULT_FRAMES: usize = 128;
pub const DEFAULT_FPS: f64 = 30.0;
pub const DEFAULT_DENOMINATOR: i64 = 4;

/// The sequence of driving angles, one per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Schedule {
    /// `frames` evenly spaced angles from `start` to `end` inclusive.
    Linspace { start: f64, end: f64, frames: usize },
    /// `0, step, 2 * step, ...` for `frames` frames.
    FixedStep { step: f64, frames: usize },
}

impl Schedule {
    /// A half turn, `[0, π]`, over `frames` frames.
    pub fn half_turn(frames: usize) -> Self {
        Schedule::Linspace {
            start: 0.0,
            end: M_PI,
            frames,
        }
    }

    pub fn frames(&self) -> usize {
        match *self {
            Schedule::Linspace { frames, .. } => frames,
            Schedule::FixedStep { frames, .. } => frames,
        }
    }

    /// First and last driving angle.
    pub fn span(&self) -> (f64, f64) {
        match *self {
            Schedule::Linspace { start, end, frames } => {
                if frames > 1 {
                    (start, end)
                } else {
                    (start, start)
                }
            }
            Schedule::FixedStep { step, frames } => (0.0, frames.saturating_sub(1) as f64 * step),
        }
    }

    pub fn thetas(&self) -> Vec<f64> {
        match *self {
            Schedule::Linspace { start, end, frames } => linspace(start, end, frames),
            Schedule::FixedStep { step, frames } => (0..frames).map(|i| i as f64 * step).collect(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.frames() == 0 {
            return Err(Error::InvalidConfig("schedule has no frames".to_string()));
        }
        match *self {
            Schedule::Linspace { start, end, .. } => {
                if !(start.is_finite() && end.is_finite()) {
                    return Err(Error::InvalidConfig(format!(
                        "schedule bounds must be finite, got [{}, {}]",
                        start, end
                    )));
                }
                if end < start {
                    return Err(Error::InvalidConfig(format!(
                        "schedule must not run backwards, got [{}, {}]",
                        start, end
                    )));
                }
            }
            Schedule::FixedStep { step, .. } => {
                if !step.is_finite() || step < 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "schedule step must be finite and non-negative, got {}",
                        step
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Everything that differed between the program variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub mag1: f64,
    pub mag2: f64,

    /// Draw the cross product trace against θ, and record samples for it.
    pub second_plot_enabled: bool,

    /// Ticks on the trace's θ axis fall on multiples of π / labeler_denominator.
    pub labeler_denominator: i64,
    pub label_style: LabelStyle,

    pub rotation: RotationPolicy,
    pub schedule: Schedule,

    /// Time between frames. Zero runs as fast as possible.
    pub interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::mature()
    }
}

impl Config {
    /// Two subplots, π/4 ticks, mirrored rotation over a half turn in 128 frames
    /// at 30 fps.
    pub fn mature() -> Self {
        Self {
            mag1: DEFAULT_MAG1,
            mag2: DEFAULT_MAG2,
            second_plot_enabled: true,
            labeler_denominator: DEFAULT_DENOMINATOR,
            label_style: LabelStyle::Plain,
            rotation: RotationPolicy::Mirrored,
            schedule: Schedule::half_turn(DEFAULT_FRAMES),
            interval: default_interval(),
        }
    }

    /// Single plot, equal magnitudes, both vectors stepping on their own.
    pub fn earliest() -> Self {
        let step = M_PI / 64.0;
        Self {
            mag1: 4.0,
            mag2: 4.0,
            second_plot_enabled: false,
            labeler_denominator: DEFAULT_DENOMINATOR,
            label_style: LabelStyle::Plain,
            rotation: RotationPolicy::Independent { step2: -step },
            schedule: Schedule::FixedStep {
                step,
                frames: DEFAULT_FRAMES,
            },
            interval: default_interval(),
        }
    }

    pub fn with_magnitudes(mut self, mag1: f64, mag2: f64) -> Self {
        self.mag1 = mag1;
        self.mag2 = mag2;
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Result<Self> {
        self.interval = interval_for_fps(fps)?;
        Ok(self)
    }

    /// The tick formatter for the trace's θ axis.
    pub fn labeler(&self) -> Result<MultipleOf> {
        let labeler = match self.label_style {
            LabelStyle::Plain => MultipleOf::new(self.labeler_denominator)?,
            LabelStyle::Tex => MultipleOf::tex(self.labeler_denominator)?,
        };
        Ok(labeler)
    }

    /// θ axis range of the trace plot: the schedule's span with an eighth of a
    /// turn's margin on each side.
    pub fn trace_axis_range(&self) -> (f64, f64) {
        let (lo, hi) = self.schedule.span();
        let margin = M_PI / 8.0;
        (lo - margin, hi + margin)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.mag1.is_finite() && self.mag2.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "magnitudes must be finite, got {} and {}",
                self.mag1, self.mag2
            )));
        }
        if self.labeler_denominator <= 0 {
            return Err(Error::InvalidDenominator(self.labeler_denominator));
        }
        if let RotationPolicy::Independent { step2 } = self.rotation {
            if !step2.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "rotation step must be finite, got {}",
                    step2
                )));
            }
        }
        self.schedule.validate()?;
        if self.second_plot_enabled {
            // fails when the axis would carry too many ticks
            let (lo, hi) = self.trace_axis_range();
            self.labeler()?.ticks(lo, hi)?;
        }
        Ok(())
    }
}

fn default_interval() -> Duration {
    Duration::from_secs_f64(1.0 / DEFAULT_FPS)
}

fn interval_for_fps(fps: f64) -> Result<Duration> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "frame rate must be positive, got {}",
            fps
        )));
    }
    Duration::try_from_secs_f64(1.0 / fps).map_err(|_| {
        Error::InvalidConfig(format!("frame rate {} is too low to pace frames", fps))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        Config::mature().validate().unwrap();
        Config::earliest().validate().unwrap();

        let m = Config::mature();
        assert_eq!((m.mag1, m.mag2), (4.0, 3.0));
        assert_eq!(m.schedule.frames(), 128);
        assert_eq!(m.rotation, RotationPolicy::Mirrored);
        assert!(m.second_plot_enabled);
        assert_eq!(m.interval, Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn validate_rejects() {
        fn case(description: &str, config: Config) {
            assert!(config.validate().is_err(), "{}", description);
        }

        let mut c = Config::mature();
        c.labeler_denominator = 0;
        case("zero denominator", c);

        let mut c = Config::mature();
        c.labeler_denominator = -1;
        case("negative denominator", c);

        case("nan magnitude", Config::mature().with_magnitudes(f64::NAN, 3.0));

        let mut c = Config::mature();
        c.schedule = Schedule::half_turn(0);
        case("no frames", c);

        let mut c = Config::mature();
        c.schedule = Schedule::Linspace {
            start: 1.0,
            end: 0.0,
            frames: 4,
        };
        case("backwards", c);

        let mut c = Config::earliest();
        c.schedule = Schedule::FixedStep {
            step: -0.1,
            frames: 4,
        };
        case("negative step", c);

        let mut c = Config::mature();
        c.labeler_denominator = 1_000_000;
        case("too many ticks", c);

        let mut c = Config::mature();
        c.labeler_denominator = 1_000_000_000_000;
        case("far too many ticks", c);

        assert!(Config::mature().with_fps(0.0).is_err());
        assert!(Config::mature().with_fps(-30.0).is_err());
        assert!(Config::mature().with_fps(f64::NAN).is_err());
        match Config::mature().with_fps(1e-300) {
            Err(Error::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig for a tiny frame rate, got {:?}", other),
        }
        Config::mature().with_fps(0.5).unwrap();
    }

    #[test]
    fn negative_magnitudes_are_valid() {
        Config::mature().with_magnitudes(-4.0, 0.0).validate().unwrap();
    }

    #[test]
    fn schedule_thetas() {
        let s = Schedule::FixedStep {
            step: 0.5,
            frames: 4,
        };
        assert_eq!(s.thetas(), vec![0.0, 0.5, 1.0, 1.5]);

        let t = Schedule::half_turn(128).thetas();
        assert_eq!(t.len(), 128);
        assert_eq!(t[127], M_PI);
    }

    #[test]
    fn trace_axis_range_test() {
        let (lo, hi) = Config::mature().trace_axis_range();
        assert_eq!(lo, -M_PI / 8.0);
        assert_eq!(hi, M_PI + M_PI / 8.0);

        let (lo, hi) = Config::earliest().trace_axis_range();
        assert_eq!(lo, -M_PI / 8.0);
        assert_eq!(hi, 127.0 * (M_PI / 64.0) + M_PI / 8.0);
    }

    #[test]
    fn span_matches_thetas() {
        fn case(schedule: Schedule) {
            let thetas = schedule.thetas();
            let span = (thetas[0], *thetas.last().unwrap());
            assert_eq!(schedule.span(), span, "{:?}", schedule);
        }
        case(Schedule::half_turn(128));
        case(Schedule::half_turn(1));
        case(Schedule::Linspace {
            start: -1.0,
            end: 2.0,
            frames: 7,
        });
        case(Schedule::FixedStep {
            step: 0.25,
            frames: 9,
        });
        case(Schedule::FixedStep {
            step: 0.25,
            frames: 1,
        });
    }
}
