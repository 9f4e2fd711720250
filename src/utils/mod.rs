pub(crate) mod array_helper;

pub use array_helper::argsort;
use std::time::Instant;

/// Wall-time timer of a run.
pub struct Timer {
    time: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Timer {
            time: Instant::now(),
        }
    }

    /// Seconds since the timer was started.
    pub fn elapsed(&self) -> f32 {
        self.time.elapsed().as_secs_f32()
    }
}
