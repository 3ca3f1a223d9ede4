//! # Protocol Racers
//!
//! Capability-oriented design with traits:
//!
//! - `birds`: the `Bird` and `Flyable` capabilities, with default
//!   behaviour provided by trait methods
//! - `vehicle`: a type that knows nothing about racing
//! - `racer`: the `Racer` capability, retrofitted onto birds and vehicles,
//!   plus top-speed ranking over any collection of racers
//! - `cheat`: the mutating `boost` capability
//! - `roster`: race line-ups loaded from TOML
//!
//! Run the walkthrough with: `cargo run --bin racers [roster.toml]`

pub mod birds;
pub mod cheat;
pub mod error;
pub mod racer;
pub mod roster;
pub mod vehicle;

pub use birds::{Bird, Dove, Flyable, Ostrich, Parrot, Penguin, Swallow, SwiftBird};
pub use cheat::Cheat;
pub use error::{RaceError, Result};
pub use racer::{top_speed, Racer, RacerSliceExt};
pub use roster::{RacerEntry, Roster};
pub use vehicle::Motorcycle;
