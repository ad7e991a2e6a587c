//! Render timing.
//!
//! Each `Renderer` keeps counters for the frames it painted. Durations cover
//! composing and flushing one frame.
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames: u64,
    pub last: Duration,
    pub slowest: Duration,
    pub total: Duration,
}

impl RenderStats {
    pub fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        self.last = elapsed;
        self.slowest = self.slowest.max(elapsed);
        self.total += elapsed;
    }

    /// Mean frame time, zero before the first frame.
    pub fn mean(&self) -> Duration {
        match u32::try_from(self.frames) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total / n,
        }
    }
}
