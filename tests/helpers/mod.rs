//! Shared seeding helpers for integration tests

use cfp_core::infrastructure::database::entities::{
	self, favorite, persistence, reminder, talk, talk_comment, throttle, user,
};
use cfp_core::Database;
use chrono::{DateTime, Utc};
use sea_orm::{
	ActiveModelBehavior, ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait,
	PaginatorTrait, QueryFilter,
};

pub async fn seed_user(db: &Database, email: &str, first: &str, last: &str) -> user::Model {
	let mut user = user::ActiveModel::new();
	user.email = Set(email.to_string());
	user.password_hash = Set("$argon2$test".to_string());
	user.first_name = Set(first.to_string());
	user.last_name = Set(last.to_string());
	user.insert(db.conn()).await.unwrap()
}

pub async fn seed_talk(db: &Database, user_id: i32, title: &str) -> talk::Model {
	seed_talk_at(db, user_id, title, Utc::now()).await
}

pub async fn seed_talk_at(
	db: &Database,
	user_id: i32,
	title: &str,
	created_at: DateTime<Utc>,
) -> talk::Model {
	let mut talk = talk::ActiveModel::new();
	talk.user_id = Set(user_id);
	talk.title = Set(title.to_string());
	talk.description = Set(format!("About {title}"));
	talk.category = Set("general".to_string());
	talk.level = Set("intermediate".to_string());
	talk.created_at = Set(created_at);
	talk.updated_at = Set(created_at);
	talk.insert(db.conn()).await.unwrap()
}

pub async fn seed_persistence(db: &Database, user_id: i32) -> persistence::Model {
	let mut item = persistence::ActiveModel::new();
	item.user_id = Set(user_id);
	item.insert(db.conn()).await.unwrap()
}

pub async fn seed_reminder(db: &Database, user_id: i32, email: &str) -> reminder::Model {
	let mut item = reminder::ActiveModel::new();
	item.user_id = Set(user_id);
	item.email = Set(email.to_string());
	item.insert(db.conn()).await.unwrap()
}

pub async fn seed_throttle(db: &Database, user_id: i32) -> throttle::Model {
	let mut item = throttle::ActiveModel::new();
	item.user_id = Set(user_id);
	item.ip_address = Set(Some("127.0.0.1".to_string()));
	item.insert(db.conn()).await.unwrap()
}

pub async fn seed_comment(
	db: &Database,
	user_id: i32,
	talk_id: i32,
	message: &str,
) -> talk_comment::Model {
	let mut item = talk_comment::ActiveModel::new();
	item.user_id = Set(user_id);
	item.talk_id = Set(talk_id);
	item.message = Set(message.to_string());
	item.insert(db.conn()).await.unwrap()
}

/// Favorite rows for one (admin, talk) pair
pub async fn favorite_rows(db: &Database, admin_id: i32, talk_id: i32) -> u64 {
	entities::Favorite::find()
		.filter(favorite::Column::AdminUserId.eq(admin_id))
		.filter(favorite::Column::TalkId.eq(talk_id))
		.count(db.conn())
		.await
		.unwrap()
}

/// Rows of a user's dependent collections: (talks, persistences, reminders,
/// throttles, comments)
pub async fn dependent_rows(db: &Database, user_id: i32) -> (u64, u64, u64, u64, u64) {
	let conn = db.conn();
	(
		entities::Talk::find()
			.filter(talk::Column::UserId.eq(user_id))
			.count(conn)
			.await
			.unwrap(),
		entities::Persistence::find()
			.filter(persistence::Column::UserId.eq(user_id))
			.count(conn)
			.await
			.unwrap(),
		entities::Reminder::find()
			.filter(reminder::Column::UserId.eq(user_id))
			.count(conn)
			.await
			.unwrap(),
		entities::Throttle::find()
			.filter(throttle::Column::UserId.eq(user_id))
			.count(conn)
			.await
			.unwrap(),
		entities::TalkComment::find()
			.filter(talk_comment::Column::UserId.eq(user_id))
			.count(conn)
			.await
			.unwrap(),
	)
}
