//! Talk views handed to the admin UI

use crate::infrastructure::database::entities::{talk, user};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the admin talk listing, formatted for the pager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkOverview {
	pub id: i32,
	pub title: String,
	pub category: String,
	pub level: String,

	/// Chosen for the conference program
	pub selected: bool,

	/// Whether the acting admin has favorited this talk
	pub favorited: bool,

	/// Favorites across all admins
	pub favorite_count: u64,

	pub speaker_id: i32,
	pub speaker_name: String,

	pub submitted_at: DateTime<Utc>,
}

/// Speaker details shown alongside a talk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerProfile {
	pub id: i32,
	pub name: String,
	pub email: String,
	pub company: Option<String>,
	pub twitter: Option<String>,
	pub bio: Option<String>,
}

impl SpeakerProfile {
	pub fn from_user(user: &user::Model) -> Self {
		Self {
			id: user.id,
			name: user.full_name(),
			email: user.email.clone(),
			company: user.company.clone(),
			twitter: user.twitter.clone(),
			bio: user.bio.clone(),
		}
	}
}

/// A single talk with its speaker and the speaker's other submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkDetail {
	pub talk: talk::Model,
	pub speaker: SpeakerProfile,
	pub other_talks: Vec<talk::Model>,
}
