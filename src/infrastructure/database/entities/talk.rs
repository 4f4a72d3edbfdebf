//! Talk entity: a submitted conference talk

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "talks")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub user_id: i32,

	pub title: String,
	pub description: String,
	pub category: String,
	pub level: String,

	/// Chosen for the conference program
	pub selected: bool,

	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::user::Entity",
		from = "Column::UserId",
		to = "super::user::Column::Id"
	)]
	User,
	#[sea_orm(has_many = "super::favorite::Entity")]
	Favorites,
	#[sea_orm(has_many = "super::talk_comment::Entity")]
	Comments,
}

impl Related<super::user::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::User.def()
	}
}

impl Related<super::favorite::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Favorites.def()
	}
}

impl Related<super::talk_comment::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Comments.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			selected: Set(false),
			created_at: Set(chrono::Utc::now()),
			updated_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}
