use log::debug;

/// FramePacer turns elapsed wall-clock time into a number of ticks.
///
/// Time accumulates across frames until at least one tick duration has
/// passed. The frame then runs every whole tick that fits, and whatever
/// is left over is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePacer {
    tick_duration: f32,
    accumulated: f32,
}

impl FramePacer {
    /// Pacer for ticks `tick_duration` seconds apart
    pub fn new(tick_duration: f32) -> Self {
        Self {
            tick_duration,
            accumulated: 0.0,
        }
    }

    pub const fn tick_duration(&self) -> f32 {
        self.tick_duration
    }

    /// Seconds banked toward the next tick
    pub const fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Add `elapsed` seconds and return how many ticks are due
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulated += elapsed.max(0.0);
        if self.accumulated < self.tick_duration {
            return 0;
        }

        let ticks = (self.accumulated / self.tick_duration) as u32;
        if ticks > 1 {
            debug!(
                "Frame took {:.1}ms, running {} ticks",
                self.accumulated * 1000.0,
                ticks
            );
        }
        self.accumulated = 0.0;
        ticks
    }
}
