//! User entity: speakers and admin reviewers

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(unique)]
	pub email: String,

	pub password_hash: String,
	pub first_name: String,
	pub last_name: String,
	pub company: Option<String>,
	pub twitter: Option<String>,
	pub bio: Option<String>,

	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::talk::Entity")]
	Talks,
	#[sea_orm(has_many = "super::talk_comment::Entity")]
	Comments,
	#[sea_orm(has_many = "super::persistence::Entity")]
	Persistences,
	#[sea_orm(has_many = "super::reminder::Entity")]
	Reminders,
	#[sea_orm(has_many = "super::throttle::Entity")]
	Throttles,
}

impl Related<super::talk::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Talks.def()
	}
}

impl Related<super::persistence::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Persistences.def()
	}
}

impl Related<super::reminder::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Reminders.def()
	}
}

impl Related<super::throttle::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Throttles.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			created_at: Set(chrono::Utc::now()),
			updated_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}

impl Model {
	/// Display name as shown in admin listings
	pub fn full_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}
