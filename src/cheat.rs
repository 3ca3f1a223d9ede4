use tracing::debug;

use crate::birds::{Bird, SwiftBird};

/// Racers that can tamper with their own speed.
pub trait Cheat {
    /// Adds `power` to the racer's speed multiplier. Negative power slows it
    /// down; nothing is clamped.
    fn boost(&mut self, power: f64);
}

impl Cheat for SwiftBird {
    fn boost(&mut self, power: f64) {
        self.add_to_speed_factor(power);
        debug!(
            bird = %self.name(),
            power,
            speed_factor = self.speed_factor(),
            "boosted"
        );
    }
}
