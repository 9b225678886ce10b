//! Runs a collision check on a scenario file, or on the built-in scenario
//! if no file is given.
//!
//! Usage: `path-collision [SCENARIO.json]`

use log::info;
use path_collision::Scenario;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading scenario from {}", path);
            Scenario::from_file(path)?
        }
        None => Scenario::default(),
    };

    let checker = scenario.into_checker()?;
    info!(
        "Checking {} surrounding agents",
        checker.iter_agents().count()
    );

    if checker.check_collision() {
        println!("collision");
    } else {
        println!("No collision");
    }
    Ok(())
}
