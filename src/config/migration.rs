//! Config schema versioning

use anyhow::Result;

/// Versioned configuration that can be upgraded in place
pub trait Migrate {
	/// Schema version currently stored on disk
	fn current_version(&self) -> u32;

	/// Schema version this build writes
	fn target_version() -> u32;

	/// Upgrade the config to the target version
	fn migrate(&mut self) -> Result<()>;
}
