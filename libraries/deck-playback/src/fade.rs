//! Timed linear volume ramps
//!
//! A fade divides the gain delta into a fixed number of discrete steps
//! spaced evenly across the ramp duration. The engine holds at most one
//! ramp at a time; replacing or clearing it is the cancellation path, so
//! a stray tick after cancellation has nothing left to mutate.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of discrete steps in a ramp
pub const FADE_STEPS: u32 = 20;

/// Interval between ramp steps
pub const FADE_STEP_INTERVAL: Duration = Duration::from_millis(50);

/// Total ramp duration (`FADE_STEPS` steps of `FADE_STEP_INTERVAL`)
pub const FADE_DURATION: Duration = Duration::from_millis(1000);

/// Ramp direction, which decides what happens on completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadeDirection {
    /// Ramp up from silence toward the volume target
    In,

    /// Ramp down to silence, then pause
    Out,
}

/// Result of advancing a ramp by one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeStep {
    /// Intermediate gain value to apply
    Ramping(f32),

    /// Final gain value; the ramp is finished
    Complete(f32),
}

/// A linear gain ramp between two bounds
#[derive(Debug, Clone)]
pub struct FadeRamp {
    from: f32,
    to: f32,
    step: u32,
}

impl FadeRamp {
    /// Create a ramp from one gain to another, both clamped to [0, 1]
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            step: 0,
        }
    }

    /// Advance by one step and return the gain to apply
    ///
    /// Intermediate steps interpolate linearly; the final step lands
    /// exactly on the target.
    pub fn advance(&mut self) -> FadeStep {
        self.step += 1;
        if self.step < FADE_STEPS {
            let progress = self.step as f32 / FADE_STEPS as f32;
            let gain = self.from + (self.to - self.from) * progress;
            FadeStep::Ramping(gain.clamp(0.0, 1.0))
        } else {
            FadeStep::Complete(self.to)
        }
    }

    /// The gain this ramp lands on
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Steps taken so far
    pub fn steps_taken(&self) -> u32 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_timing_adds_up() {
        assert_eq!(FADE_STEP_INTERVAL * FADE_STEPS, FADE_DURATION);
    }

    #[test]
    fn completes_on_the_final_step() {
        let mut ramp = FadeRamp::new(0.0, 1.0);
        for _ in 0..FADE_STEPS - 1 {
            assert!(matches!(ramp.advance(), FadeStep::Ramping(_)));
        }
        assert_eq!(ramp.advance(), FadeStep::Complete(1.0));
    }

    #[test]
    fn ramps_linearly() {
        let mut ramp = FadeRamp::new(0.0, 0.8);

        let FadeStep::Ramping(first) = ramp.advance() else {
            panic!("expected intermediate step");
        };
        assert!((first - 0.04).abs() < 0.001);

        // Advance to the halfway point (step 10 of 20)
        for _ in 0..9 {
            ramp.advance();
        }
        assert_eq!(ramp.steps_taken(), 10);
    }

    #[test]
    fn ramps_downward() {
        let mut ramp = FadeRamp::new(0.8, 0.0);

        let FadeStep::Ramping(first) = ramp.advance() else {
            panic!("expected intermediate step");
        };
        assert!((first - 0.76).abs() < 0.001);

        for _ in 0..FADE_STEPS - 2 {
            ramp.advance();
        }
        assert_eq!(ramp.advance(), FadeStep::Complete(0.0));
    }

    #[test]
    fn bounds_are_clamped() {
        let ramp = FadeRamp::new(-0.5, 1.5);
        assert_eq!(ramp.target(), 1.0);

        let mut ramp = FadeRamp::new(2.0, 0.0);
        let FadeStep::Ramping(gain) = ramp.advance() else {
            panic!("expected intermediate step");
        };
        assert!((0.0..=1.0).contains(&gain));
    }
}
