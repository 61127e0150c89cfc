pub mod config;
pub use config::Config;

pub mod hill_climber;
pub use hill_climber::{HillClimber, Outcome, Step, Termination};
