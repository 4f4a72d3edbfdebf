//! CFP Core
//!
//! Admin-facing core of a call-for-papers system: listing and reviewing
//! submitted talks, favoriting and selecting talks, and removing speakers
//! together with their dependent records.
//!
//! HTTP routing and template rendering live outside this crate; callers
//! inject an [`auth::AuthGate`] and drive the services in [`admin`].

pub mod admin;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use admin::error::{AdminError, DeletionError};
pub use auth::{AuthGate, StaticGate};
pub use config::AppConfig;
pub use domain::{Page, SpeakerProfile, TalkDetail, TalkOverview};
pub use infrastructure::database::Database;

use std::path::PathBuf;
use tracing::info;

/// The main context for admin operations: configuration plus the open
/// database.
pub struct CfpCore {
	config: AppConfig,
	db: Database,
}

impl CfpCore {
	/// Open (or initialize) a CFP data directory: load or create the
	/// config, open or create the database, and run migrations.
	pub async fn open(data_dir: PathBuf) -> anyhow::Result<Self> {
		info!("Initializing CFP core at {:?}", data_dir);

		let config = AppConfig::load_or_create(&data_dir)?;
		config.ensure_directories()?;

		let db_path = config.db_path();
		let db = if db_path.exists() {
			Database::open(&db_path).await?
		} else {
			Database::create(&db_path).await?
		};
		db.migrate().await?;

		Ok(Self { config, db })
	}

	/// Application configuration.
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// The open database.
	pub fn db(&self) -> &Database {
		&self.db
	}
}
