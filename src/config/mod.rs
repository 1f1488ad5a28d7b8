pub mod toml_config;

pub use toml_config::{OnExisting, RosterConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "staff-roster", version)]
#[command(about = "Interactive employee roster manager")]
pub struct CliConfig {
    /// Roster file, overrides storage.path from the config file
    #[arg(short, long)]
    pub file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Load an existing roster file without asking
    #[arg(long, conflicts_with = "fresh")]
    pub load: bool,

    /// Delete an existing roster file and start empty without asking
    #[arg(long)]
    pub fresh: bool,

    /// Save the roster after every sort by name
    #[arg(long)]
    pub save_on_sort: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file (if any), applies command line overrides and validates.
    pub fn resolve(&self) -> Result<RosterConfig> {
        let mut config = match &self.config {
            Some(path) => RosterConfig::from_file(path)?,
            None => RosterConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut RosterConfig) {
        if let Some(file) = &self.file {
            config.storage.path = file.clone();
        }
        if self.compact {
            config.storage.pretty = false;
        }
        if self.save_on_sort {
            config.session.save_after_name_sort = true;
        }
        if self.load {
            config.session.on_existing = OnExisting::Load;
        } else if self.fresh {
            config.session.on_existing = OnExisting::Clear;
        }
    }
}
