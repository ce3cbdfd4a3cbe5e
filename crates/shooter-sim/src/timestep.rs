//! Fixed-step accumulator that turns variable wall-clock frame times into a
//! whole number of simulation steps.

use log::warn;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step_secs: f64,
    max_frame_secs: f64,
    max_steps: u32,
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(tick_rate: u32, max_frame_secs: f32, max_steps: u32) -> Self {
        Self {
            step_secs: 1.0 / f64::from(tick_rate),
            max_frame_secs: f64::from(max_frame_secs),
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time and return how many steps to run.
    ///
    /// Frame times above the cap are clamped. If the step budget runs out
    /// with a full step still pending, the backlog is dropped rather than
    /// carried into the next frame.
    pub fn accumulate(&mut self, frame_secs: f32) -> u32 {
        let mut frame = f64::from(frame_secs.max(0.0));
        if frame > self.max_frame_secs {
            warn!(
                "frame took {:.1} ms, clamping to {:.1} ms",
                frame * 1000.0,
                self.max_frame_secs * 1000.0
            );
            frame = self.max_frame_secs;
        }
        self.accumulator += frame;

        let mut steps = 0;
        while self.accumulator >= self.step_secs && steps < self.max_steps {
            self.accumulator -= self.step_secs;
            steps += 1;
        }
        if self.accumulator >= self.step_secs {
            warn!("simulation fell behind, dropping {:.1} ms", self.accumulator * 1000.0);
            self.accumulator %= self.step_secs;
        }
        steps
    }

    /// Time carried into the next frame, as a fraction of one step.
    pub fn pending_fraction(&self) -> f32 {
        (self.accumulator / self.step_secs) as f32
    }
}
