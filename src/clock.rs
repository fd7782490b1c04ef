//! Frame clock for the host loop
//!
//! The simulation never reads time itself. The host asks the clock for the
//! elapsed time once per frame and passes it to `sim::tick`.

use std::time::{Duration, Instant};

/// Supplies `dt` for each frame
#[derive(Debug, Clone)]
pub enum FrameClock {
    /// Wall-clock time, sleeping to hold the target frame rate
    Realtime { last: Instant },
    /// Constant step, for deterministic headless runs
    Fixed { dt: f32 },
}

impl FrameClock {
    pub fn realtime() -> Self {
        FrameClock::Realtime {
            last: Instant::now(),
        }
    }

    pub fn fixed(dt: f32) -> Self {
        FrameClock::Fixed { dt }
    }

    /// Wait for the next frame and return the seconds since the previous one.
    ///
    /// A realtime clock sleeps until at least `1 / fps` has passed since the
    /// last tick; if the frame already took longer, it returns immediately
    /// with the real (larger) elapsed time.
    pub fn tick(&mut self, fps: u32) -> f32 {
        match self {
            FrameClock::Fixed { dt } => *dt,
            FrameClock::Realtime { last } => {
                let target = Duration::from_secs_f32(1.0 / fps.max(1) as f32);
                let elapsed = last.elapsed();
                if elapsed < target {
                    std::thread::sleep(target - elapsed);
                }
                let now = Instant::now();
                let dt = now.duration_since(*last).as_secs_f32();
                *last = now;
                dt
            }
        }
    }
}
