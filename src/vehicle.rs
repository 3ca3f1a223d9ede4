//! Vehicles. Nothing here knows about racing; `racer` retrofits the
//! capability onto these types from outside.

pub const DEFAULT_MOTORCYCLE_SPEED: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    pub name: String,
    pub speed: f64,
}

impl Motorcycle {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_speed(name, DEFAULT_MOTORCYCLE_SPEED)
    }

    pub fn with_speed(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: name.into(),
            speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_speed() {
        let bike = Motorcycle::new("Chablau");
        assert_eq!(bike.name, "Chablau");
        assert_eq!(bike.speed, 200.0);
    }
}
