//! Favorite entity: an admin's flag on a talk of interest
//!
//! Unique per (admin_user_id, talk_id); the toggle service never writes a
//! second row for the same pair.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,

	#[sea_orm(indexed)]
	pub admin_user_id: i32,

	#[sea_orm(indexed)]
	pub talk_id: i32,

	pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::user::Entity",
		from = "Column::AdminUserId",
		to = "super::user::Column::Id"
	)]
	Admin,
	#[sea_orm(
		belongs_to = "super::talk::Entity",
		from = "Column::TalkId",
		to = "super::talk::Column::Id"
	)]
	Talk,
}

impl Related<super::talk::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Talk.def()
	}
}

impl ActiveModelBehavior for ActiveModel {
	fn new() -> Self {
		Self {
			created_at: Set(chrono::Utc::now()),
			..ActiveModelTrait::default()
		}
	}
}
