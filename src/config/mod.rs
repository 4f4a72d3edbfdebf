//! Application configuration

mod app_config;
mod migration;

pub use app_config::AppConfig;
pub use migration::Migrate;

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Default data directory for CFP data
pub fn default_data_dir() -> Result<PathBuf> {
	dirs::data_dir()
		.map(|dir| dir.join("cfp"))
		.ok_or_else(|| anyhow!("Could not determine platform data directory"))
}
