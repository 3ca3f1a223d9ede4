//! Race line-ups loaded from TOML.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::birds::{Bird, Parrot, Penguin, Swallow, SwiftBird};
use crate::cheat::Cheat;
use crate::error::{RaceError, Result};
use crate::racer::{top_speed, Racer};
use crate::vehicle::{Motorcycle, DEFAULT_MOTORCYCLE_SPEED};

fn default_true() -> bool {
    true
}

fn default_motorcycle_speed() -> f64 {
    DEFAULT_MOTORCYCLE_SPEED
}

/// One `[[racer]]` table, tagged by its `kind` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RacerEntry {
    Parrot {
        name: String,
        amplitude: f64,
        frequency: f64,
        #[serde(default = "default_true")]
        can_fly: bool,
    },
    Penguin {
        name: String,
    },
    Swallow {
        variety: Swallow,
    },
    Motorcycle {
        name: String,
        #[serde(default = "default_motorcycle_speed")]
        speed: f64,
    },
    SwiftBird {
        version: f64,
        #[serde(default)]
        boosts: Vec<f64>,
    },
}

impl RacerEntry {
    pub fn build(&self) -> Box<dyn Racer> {
        match self {
            RacerEntry::Parrot {
                name,
                amplitude,
                frequency,
                can_fly,
            } => Box::new(Parrot {
                can_fly: *can_fly,
                ..Parrot::new(name.as_str(), *amplitude, *frequency)
            }),
            RacerEntry::Penguin { name } => Box::new(Penguin::new(name.as_str())),
            RacerEntry::Swallow { variety } => Box::new(*variety),
            RacerEntry::Motorcycle { name, speed } => {
                Box::new(Motorcycle::with_speed(name.as_str(), *speed))
            }
            RacerEntry::SwiftBird { version, boosts } => {
                let mut bird = SwiftBird::new(*version);
                for &power in boosts {
                    bird.boost(power);
                }
                Box::new(bird)
            }
        }
    }

    fn label(&self) -> String {
        match self {
            RacerEntry::Parrot { name, .. }
            | RacerEntry::Penguin { name }
            | RacerEntry::Motorcycle { name, .. } => name.clone(),
            RacerEntry::Swallow { variety } => variety.name().into_owned(),
            RacerEntry::SwiftBird { version, .. } => format!("Swift Bird {version}"),
        }
    }

    fn validate(&self, index: usize, errors: &mut Vec<RaceError>) {
        let before = errors.len();
        self.validate_inputs(index, errors);
        if errors.len() > before {
            return;
        }

        // Finite inputs can still multiply out to an infinite speed.
        let speed = self.build().speed();
        if !speed.is_finite() {
            errors.push(RaceError::invalid_field(index, "speed", speed, "must be finite"));
        }
    }

    fn validate_inputs(&self, index: usize, errors: &mut Vec<RaceError>) {
        match self {
            RacerEntry::Parrot {
                amplitude,
                frequency,
                ..
            } => {
                check_measure(errors, index, "amplitude", *amplitude);
                check_measure(errors, index, "frequency", *frequency);
            }
            RacerEntry::Motorcycle { speed, .. } => check_measure(errors, index, "speed", *speed),
            RacerEntry::SwiftBird { version, boosts } => {
                check_measure(errors, index, "version", *version);
                // Boosts may be negative; they only have to be numbers.
                for &power in boosts {
                    if !power.is_finite() {
                        errors.push(RaceError::invalid_field(
                            index,
                            "boosts",
                            power,
                            "must be finite",
                        ));
                    }
                }
            }
            RacerEntry::Penguin { .. } | RacerEntry::Swallow { .. } => {}
        }
    }
}

fn check_measure(errors: &mut Vec<RaceError>, index: usize, field: &'static str, value: f64) {
    if !value.is_finite() {
        errors.push(RaceError::invalid_field(index, field, value, "must be finite"));
    } else if value < 0.0 {
        errors.push(RaceError::invalid_field(
            index,
            field,
            value,
            "must not be negative",
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Roster {
    #[serde(rename = "racer", default)]
    pub entries: Vec<RacerEntry>,
}

impl Default for Roster {
    /// Every swallow, a penguin, a parrot and a motorcycle.
    fn default() -> Self {
        let mut entries: Vec<RacerEntry> = [
            Swallow::African,
            Swallow::American,
            Swallow::European,
            Swallow::Unknown,
        ]
        .into_iter()
        .map(|variety| RacerEntry::Swallow { variety })
        .collect();
        entries.push(RacerEntry::Penguin {
            name: "Penguin".into(),
        });
        entries.push(RacerEntry::Parrot {
            name: "Parrot".into(),
            amplitude: 2.5,
            frequency: 3.6,
            can_fly: true,
        });
        entries.push(RacerEntry::Motorcycle {
            name: "Chablau".into(),
            speed: DEFAULT_MOTORCYCLE_SPEED,
        });
        Self { entries }
    }
}

impl Roster {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let roster: Roster = toml::from_str(content)?;
        roster.validate()?;
        debug!(racers = roster.entries.len(), "roster loaded");
        Ok(roster)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RaceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks every numeric field, reporting all violations at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            entry.validate(index, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RaceError::Invalid(errors))
        }
    }

    pub fn racers(&self) -> Vec<Box<dyn Racer>> {
        self.entries
            .iter()
            .map(|entry| {
                let racer = entry.build();
                if racer.speed() == 0.0 {
                    warn!(racer = %entry.label(), "racer has no speed");
                }
                racer
            })
            .collect()
    }

    pub fn top_speed(&self) -> f64 {
        top_speed(self.racers())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
