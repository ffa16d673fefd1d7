//! Movement domain: per-frame tasks advanced by the locomotion tick.

/// Gradual speed decay after input release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Braking {
    pub steps: u32,
}

impl Braking {
    /// Remove `decrement` from `speed`, clamped at zero.
    /// Returns true once the speed has reached zero.
    pub fn step(&mut self, speed: &mut f32, decrement: f32) -> bool {
        *speed = (*speed - decrement).max(0.0);
        self.steps += 1;
        *speed <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashStep {
    /// Linear ease-out factor for this frame, in `(0, 1]`.
    Moving(f32),
    Finished,
}

/// Fixed-duration forward burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    elapsed: f32,
    duration: f32,
}

impl Dash {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    pub fn step(&mut self, dt: f32) -> DashStep {
        if self.elapsed >= self.duration {
            return DashStep::Finished;
        }
        let interpolation = 1.0 - self.elapsed / self.duration;
        self.elapsed += dt;
        DashStep::Moving(interpolation)
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}

/// Post-jump window during which landing is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpRecovery {
    elapsed: f32,
    window: f32,
}

impl JumpRecovery {
    pub fn new(window: f32) -> Self {
        Self {
            elapsed: 0.0,
            window,
        }
    }

    /// Returns false once the window has run out.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed < self.window
    }
}
