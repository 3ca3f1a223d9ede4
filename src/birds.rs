//! Birds and the flight capability.
//!
//! `Bird` carries default behaviour: a bird can fly exactly when it exposes
//! itself as `Flyable`, and its description follows from that. Types with a
//! better answer (a parrot with a stored flag, swallows keyed on the variant)
//! override the default.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;

use crate::error::{RaceError, Result};

pub trait Bird {
    fn name(&self) -> Cow<'_, str>;

    /// Returns `Some(self)` for birds that also implement [`Flyable`].
    fn as_flyable(&self) -> Option<&dyn Flyable> {
        None
    }

    fn can_fly(&self) -> bool {
        self.as_flyable().is_some()
    }

    fn description(&self) -> &'static str {
        if self.can_fly() {
            "Can fly"
        } else {
            "Cannot fly"
        }
    }
}

pub trait Flyable {
    /// Top flight speed in km/h.
    fn maximum_speed(&self) -> f64;
}

// Every bird prints as its description.
macro_rules! display_as_description {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.description())
                }
            }
        )+
    };
}

display_as_description!(Parrot, Penguin, Dove, Ostrich, Swallow, SwiftBird);

fn wing_speed(amplitude: f64, frequency: f64) -> f64 {
    3.0 * amplitude * frequency
}

// =============================================================================
// Birds with stored flight flags
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Parrot {
    pub name: String,
    pub amplitude: f64,
    pub frequency: f64,
    pub can_fly: bool,
}

impl Parrot {
    pub fn new(name: impl Into<String>, amplitude: f64, frequency: f64) -> Self {
        Self {
            name: name.into(),
            amplitude,
            frequency,
            can_fly: true,
        }
    }
}

impl Bird for Parrot {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }

    fn can_fly(&self) -> bool {
        self.can_fly
    }
}

impl Flyable for Parrot {
    fn maximum_speed(&self) -> f64 {
        wing_speed(self.amplitude, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Penguin {
    pub name: String,
    pub can_fly: bool,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            can_fly: false,
        }
    }
}

impl Bird for Penguin {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn can_fly(&self) -> bool {
        self.can_fly
    }
}

// =============================================================================
// Birds relying on the default `can_fly`
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Dove {
    pub name: String,
    pub amplitude: f64,
    pub frequency: f64,
}

impl Dove {
    pub fn new(name: impl Into<String>, amplitude: f64, frequency: f64) -> Self {
        Self {
            name: name.into(),
            amplitude,
            frequency,
        }
    }
}

impl Bird for Dove {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

impl Flyable for Dove {
    fn maximum_speed(&self) -> f64 {
        wing_speed(self.amplitude, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ostrich {
    pub name: String,
}

impl Ostrich {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bird for Ostrich {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

// =============================================================================
// Swallows: one type, per-variant behaviour
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swallow {
    African,
    European,
    American,
    Unknown,
}

impl Swallow {
    pub const ALL: [Swallow; 4] = [
        Swallow::African,
        Swallow::European,
        Swallow::American,
        Swallow::Unknown,
    ];

    /// Like [`Flyable::maximum_speed`], but reports the unknown swallow as
    /// an error instead of aborting.
    pub fn try_maximum_speed(&self) -> Result<f64> {
        match self {
            Swallow::African => Ok(11.0),
            Swallow::European => Ok(10.0),
            Swallow::American => Ok(12.0),
            Swallow::Unknown => Err(RaceError::unknown_speed(self.name())),
        }
    }
}

impl Bird for Swallow {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Swallow::African => "African swallow",
            Swallow::European => "European swallow",
            Swallow::American => "American swallow",
            Swallow::Unknown => "Swallow",
        })
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }

    fn can_fly(&self) -> bool {
        *self != Swallow::Unknown
    }
}

impl Flyable for Swallow {
    /// # Panics
    ///
    /// Panics for [`Swallow::Unknown`], whose speed is undefined. Use
    /// [`Swallow::try_maximum_speed`] to handle that case.
    fn maximum_speed(&self) -> f64 {
        self.try_maximum_speed().unwrap_or_else(|err| panic!("{err}"))
    }
}

// =============================================================================
// SwiftBird: the one bird whose speed can change
// =============================================================================

pub const BASE_SPEED_FACTOR: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SwiftBird {
    pub version: f64,
    speed_factor: f64,
}

impl SwiftBird {
    pub fn new(version: f64) -> Self {
        Self {
            version,
            speed_factor: BASE_SPEED_FACTOR,
        }
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    pub(crate) fn add_to_speed_factor(&mut self, power: f64) {
        self.speed_factor += power;
    }
}

impl Bird for SwiftBird {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("Swift Bird {}", self.version))
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

impl Flyable for SwiftBird {
    fn maximum_speed(&self) -> f64 {
        self.version * self.speed_factor
    }
}
