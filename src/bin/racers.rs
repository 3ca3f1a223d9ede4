use std::process::ExitCode;

use colored::Colorize;
use protocol_racers::{
    Bird, Cheat, Dove, Flyable, Ostrich, Parrot, Penguin, RaceError, RacerSliceExt, Roster,
    Swallow, SwiftBird,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn yes_no(flag: bool) -> colored::ColoredString {
    if flag {
        "yes".green()
    } else {
        "no".red()
    }
}

// =============================================================================
// Birds and default behaviour
// =============================================================================

fn flight_line(bird: &dyn Bird) -> String {
    if !bird.can_fly() {
        return format!("Does {} fly? {}", bird.name(), yes_no(false));
    }

    match bird.as_flyable() {
        Some(flyer) => format!(
            "Does {} fly? {}, at {:.1} km/h",
            bird.name(),
            yes_no(true),
            flyer.maximum_speed()
        ),
        None => format!("Does {} fly? {}", bird.name(), yes_no(true)),
    }
}

fn show_birds() {
    println!("{}", "=== Birds ===".bold());

    let parrot = Parrot::new("Parrot", 6.8, 3.0);
    println!("{} flies at {:.1} km/h", parrot.name(), parrot.maximum_speed());

    let penguin = Penguin::new("Penguin BR");
    println!("{}", flight_line(&penguin));

    let dove = Dove::new("Bompo", 3.5, 4.0);
    println!("{}", flight_line(&dove));

    let ostrich = Ostrich::new("Ostrich");
    println!("{}", flight_line(&ostrich));

    println!("\n{}", "=== Swallows ===".bold());
    for swallow in Swallow::ALL {
        let speed = match swallow.try_maximum_speed() {
            Ok(speed) => format!("{speed:.1} km/h"),
            Err(err) => err.to_string().yellow().to_string(),
        };
        println!("{:<18} {:<11} {}", swallow.name(), swallow.to_string(), speed);
    }
}

// =============================================================================
// Racing
// =============================================================================

fn show_race(roster: &Roster) {
    println!("\n{}", "=== Race ===".bold());

    let racers = roster.racers();
    println!("Top speed among our racers: {}", format!("{:.1}", racers.top_speed()).cyan());
    if racers.len() > 3 {
        println!(
            "Top speed among racers 1 to 3: {}",
            format!("{:.1}", racers[1..=3].top_speed()).cyan()
        );
    }
}

fn show_boosts() {
    println!("\n{}", "=== Cheating ===".bold());

    let mut bird = SwiftBird::new(5.0);
    println!("{} speed: {:.1}", bird.name(), bird.maximum_speed());
    for power in [5.0, 5.0, -5.0] {
        bird.boost(power);
        println!("after boost({power:+}): {:.1}", bird.maximum_speed());
    }
}

fn load_roster() -> Result<Roster, RaceError> {
    match std::env::args().nth(1) {
        Some(path) => Roster::from_path(path),
        None => Ok(Roster::default()),
    }
}

fn report(err: &RaceError) {
    eprintln!("{} {}", "error:".red().bold(), err);
    if let RaceError::Invalid(errors) = err {
        for (number, inner) in errors.iter().enumerate() {
            eprintln!("  {}. {}", number + 1, inner);
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let roster = match load_roster() {
        Ok(roster) => roster,
        Err(err) => {
            error!(%err, "could not load roster");
            report(&err);
            return ExitCode::FAILURE;
        }
    };

    show_birds();
    show_race(&roster);
    show_boosts();

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_line_for_flyer() {
        let line = flight_line(&Dove::new("Bompo", 3.5, 4.0));
        assert!(line.starts_with("Does Bompo fly?"));
        assert!(line.contains("yes"));
        assert!(line.ends_with("at 42.0 km/h"));
    }

    #[test]
    fn test_flight_line_for_grounded_birds() {
        let grounded = Parrot {
            can_fly: false,
            ..Parrot::new("Clipped", 2.0, 3.0)
        };
        let ostrich = Ostrich::new("Ostrich");
        let penguin = Penguin::new("Penguin BR");
        let birds: [&dyn Bird; 3] = [&grounded, &ostrich, &penguin];
        for bird in birds {
            let line = flight_line(bird);
            assert!(line.contains("no"), "{line}");
            assert!(!line.contains("km/h"), "{line}");
        }
    }
}
