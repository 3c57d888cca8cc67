use std::time::Duration;

use log::Level;

use crate::controller::effects::ConfettiBurst;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose timer logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Burst fired on every like.
pub const LIKE_CONFETTI: ConfettiBurst = ConfettiBurst {
    particle_count: 100,
    spread: 70.0,
    origin_y: 0.6,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTimings {
    pub fact_reveal_delay: Duration,
    pub fact_rotation: Duration,
    pub progress_tick: Duration,
    pub toast_lifetime: Duration,
}

impl Default for PageTimings {
    fn default() -> Self {
        Self {
            fact_reveal_delay: Duration::from_secs(2),
            fact_rotation: Duration::from_secs(5),
            progress_tick: Duration::from_millis(100),
            toast_lifetime: Duration::from_secs(3),
        }
    }
}
