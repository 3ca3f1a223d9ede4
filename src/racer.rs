//! The `Racer` capability and ranking racers by speed.
//!
//! Unrelated types join the race by implementing `Racer`, including
//! [`Motorcycle`], which lives in another module and already stores a speed.

use crate::birds::{Bird, Flyable, Parrot, Penguin, Swallow, SwiftBird};
use crate::vehicle::Motorcycle;

pub const PENGUIN_SPEED: f64 = 35.0;

pub trait Racer {
    fn speed(&self) -> f64;
}

impl Racer for Parrot {
    fn speed(&self) -> f64 {
        self.maximum_speed()
    }
}

impl Racer for Penguin {
    fn speed(&self) -> f64 {
        PENGUIN_SPEED
    }
}

impl Racer for Swallow {
    fn speed(&self) -> f64 {
        if self.can_fly() {
            self.maximum_speed()
        } else {
            0.0
        }
    }
}

impl Racer for SwiftBird {
    fn speed(&self) -> f64 {
        self.maximum_speed()
    }
}

// Retrofit: the stored field is the answer.
impl Racer for Motorcycle {
    fn speed(&self) -> f64 {
        self.speed
    }
}

impl<R: Racer + ?Sized> Racer for &R {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for &mut R {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for Box<R> {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

// =============================================================================
// Ranking
// =============================================================================

/// Highest speed among `racers`, or `0.0` when there are none.
pub fn top_speed<I>(racers: I) -> f64
where
    I: IntoIterator,
    I::Item: Racer,
{
    racers
        .into_iter()
        .map(|racer| racer.speed())
        .reduce(|best, speed| if best < speed { speed } else { best })
        .unwrap_or(0.0)
}

/// Ranking methods on any slice of racers, including sub-ranges such as
/// `racers[1..=3]`.
pub trait RacerSliceExt<R> {
    fn top_speed(&self) -> f64;

    /// First racer holding the top speed.
    fn fastest(&self) -> Option<&R>;
}

impl<R: Racer> RacerSliceExt<R> for [R] {
    fn top_speed(&self) -> f64 {
        self.fastest().map_or(0.0, |racer| racer.speed())
    }

    fn fastest(&self) -> Option<&R> {
        let mut iter = self.iter();
        let mut best = iter.next()?;
        let mut best_speed = best.speed();
        for racer in iter {
            let speed = racer.speed();
            if best_speed < speed {
                best = racer;
                best_speed = speed;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn sample_racers() -> Vec<Box<dyn Racer>> {
        vec![
            Box::new(Parrot::new("Parrot", 2.0, 3.0)),
            Box::new(Parrot::new("Papagaio", 2.5, 3.6)),
            Box::new(Penguin::new("Penguin")),
            Box::new(Motorcycle::new("Chablau")),
        ]
    }

    #[test]
    fn test_individual_speeds() {
        let speeds: Vec<f64> = sample_racers().iter().map(|r| r.speed()).collect();
        let expected = [18.0, 27.0, 35.0, 200.0];
        for (speed, want) in speeds.iter().zip(expected) {
            assert!((speed - want).abs() < EPSILON, "{speed} != {want}");
        }
    }

    #[test]
    fn test_top_speed_free_function() {
        assert_eq!(top_speed(&sample_racers()), 200.0);
    }

    #[test]
    fn test_top_speed_method_and_sub_range() {
        let racers = sample_racers();
        assert_eq!(racers.top_speed(), 200.0);
        assert_eq!(racers[..=2].top_speed(), 35.0);
        assert!((racers[..2].top_speed() - 27.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_collections() {
        let none: Vec<Box<dyn Racer>> = Vec::new();
        assert_eq!(top_speed(&none), 0.0);
        assert_eq!(none.top_speed(), 0.0);
        assert!(none.fastest().is_none());
    }

    #[test]
    fn test_grounded_swallow_races_at_zero() {
        assert_eq!(Swallow::Unknown.speed(), 0.0);
        assert_eq!(top_speed(Swallow::ALL), 12.0);
    }

    #[test]
    fn test_fastest_prefers_first_on_tie() {
        let bikes = [
            Motorcycle::with_speed("first", 90.0),
            Motorcycle::with_speed("second", 90.0),
            Motorcycle::with_speed("slow", 10.0),
        ];
        assert_eq!(bikes.fastest().map(|b| b.name.as_str()), Some("first"));
    }

    #[test]
    fn test_works_through_references() {
        let parrot = Parrot::new("Parrot", 6.8, 3.0);
        let bike = Motorcycle::new("Chablau");
        let racers: [&dyn Racer; 2] = [&parrot, &bike];
        assert_eq!(racers.top_speed(), 200.0);
    }

    proptest! {
        #[test]
        fn prop_top_speed_bounds_every_racer(speeds in prop::collection::vec(0.0f64..1_000.0, 1..50)) {
            let bikes: Vec<Motorcycle> = speeds
                .iter()
                .map(|&speed| Motorcycle::with_speed("bike", speed))
                .collect();
            let top = top_speed(&bikes);

            for bike in &bikes {
                prop_assert!(top >= bike.speed);
            }
            prop_assert!(speeds.contains(&top));
            prop_assert_eq!(top, bikes.top_speed());
        }

        #[test]
        fn prop_wing_speed_is_non_negative(amplitude in 0.0f64..100.0, frequency in 0.0f64..100.0) {
            let speed = Parrot::new("p", amplitude, frequency).speed();
            prop_assert!(speed.is_finite());
            prop_assert!(speed >= 0.0);
        }
    }
}
