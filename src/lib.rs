pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{file_exists, load_roster, save_roster, JsonRosterStore, LocalStorage};
pub use app::{Console, Session, SessionOutcome};
pub use config::RosterConfig;
pub use domain::model::{Employee, PositionSummary, Removal};
pub use domain::ports::{RosterStore, Storage};
pub use domain::roster::Roster;
pub use domain::stats::{average_tenure_by_position, position_with_minimum_average};
pub use utils::error::{Result, RosterError};
