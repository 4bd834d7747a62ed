use crate::animation::{AnimationState, CrossProductSample, FrameOutput, InitialEntities, Renderer, TickLabel};
use crate::error::Result;
use std::io::Write;

/// Writes the animation as lines of text: the setup, the θ axis ticks, one
/// line per frame with both vectors and the cross product readout, and a
/// summary of the trace.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn init(&mut self, entities: &InitialEntities) -> Result<()> {
        writeln!(
            self.out,
            "v = {:?} (|v| = {}), w = {:?} (|w| = {})",
            entities.arrows[0], entities.mag1, entities.arrows[1], entities.mag2
        )?;
        writeln!(self.out, "{}", entities.readout)?;
        Ok(())
    }

    fn axis_ticks(&mut self, ticks: &[TickLabel]) -> Result<()> {
        let labels: Vec<&str> = ticks.iter().map(|t| t.text.as_str()).collect();
        writeln!(self.out, "theta axis: {}", labels.join("  "))?;
        Ok(())
    }

    fn draw_frame(&mut self, output: &FrameOutput, _samples: &[CrossProductSample]) -> Result<()> {
        let k = &output.kinematics;
        writeln!(
            self.out,
            "{:>4}  theta {:>7.4}  v ({:>6.2}, {:>6.2})  w ({:>6.2}, {:>6.2})  {}",
            output.frame, output.theta, k.v1.x, k.v1.y, k.v2.x, k.v2.y, output.readout
        )?;
        Ok(())
    }

    fn finish(&mut self, state: &AnimationState) -> Result<()> {
        let samples = state.samples();
        if let (Some(lo), Some(hi)) = (
            samples.iter().map(|s| s.cross).fold(None, min_of),
            samples.iter().map(|s| s.cross).fold(None, max_of),
        ) {
            writeln!(
                self.out,
                "trace: {} samples, cross product from {:.2} to {:.2}",
                samples.len(),
                lo,
                hi
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn min_of(acc: Option<f64>, x: f64) -> Option<f64> {
    Some(acc.map_or(x, |a| a.min(x)))
}

fn max_of(acc: Option<f64>, x: f64) -> Option<f64> {
    Some(acc.map_or(x, |a| a.max(x)))
}
