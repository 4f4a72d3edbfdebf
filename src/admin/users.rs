//! Speaker account management: search and cascading delete

use crate::{
	admin::error::{DeletionError, Result},
	auth::{require_admin, AuthGate},
	infrastructure::database::{
		entities::{self, favorite, talk, user},
		Database,
	},
};

use sea_orm::{
	ColumnTrait, Condition, EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::info;

/// Ordering for user search results
#[derive(Debug, Clone, Copy)]
pub struct UserOrder {
	pub column: UserOrderColumn,
	pub descending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserOrderColumn {
	FirstName,
	LastName,
	CreatedAt,
}

impl Default for UserOrder {
	fn default() -> Self {
		Self {
			column: UserOrderColumn::FirstName,
			descending: false,
		}
	}
}

/// Search users by first or last name.
///
/// An empty (or absent) search term returns all users in the requested
/// order; otherwise the term is matched as a substring against either
/// name.
pub async fn search_users(
	db: &Database,
	gate: &dyn AuthGate,
	search: Option<&str>,
	order: UserOrder,
) -> Result<Vec<user::Model>> {
	require_admin(gate)?;

	let mut query = entities::User::find();
	if let Some(term) = search.filter(|s| !s.is_empty()) {
		query = query.filter(
			Condition::any()
				.add(user::Column::FirstName.contains(term))
				.add(user::Column::LastName.contains(term)),
		);
	}

	let column = match order.column {
		UserOrderColumn::FirstName => user::Column::FirstName,
		UserOrderColumn::LastName => user::Column::LastName,
		UserOrderColumn::CreatedAt => user::Column::CreatedAt,
	};
	let query = if order.descending {
		query.order_by_desc(column)
	} else {
		query.order_by_asc(column)
	};

	Ok(query.all(db.conn()).await?)
}

/// All talks of a user except the given one.
///
/// Passing `0` as `except_talk_id` excludes nothing and returns every talk
/// of that user.
pub async fn other_talks(
	db: &Database,
	user_id: i32,
	except_talk_id: i32,
) -> Result<Vec<talk::Model>> {
	let mut query = entities::Talk::find()
		.filter(talk::Column::UserId.eq(user_id))
		.order_by_desc(talk::Column::CreatedAt);
	if except_talk_id != 0 {
		query = query.filter(talk::Column::Id.ne(except_talk_id));
	}
	Ok(query.all(db.conn()).await?)
}

/// Delete a user together with their talks (and the favorites pointing at
/// them), persistence tokens, reminders, throttle records and any favorites
/// the user holds as an admin, then the user row itself.
///
/// The steps run in order, each fully completing before the next, and the
/// first failure aborts the rest with a step-specific [`DeletionError`].
/// The whole sequence runs inside one transaction, so a failed step rolls
/// every prior deletion back and leaves no orphaned rows.
///
/// Talk comments are deliberately retained: the original behavior keeps a
/// deleted speaker's comments for the review audit trail.
pub async fn delete_user(db: &Database, user_id: i32) -> std::result::Result<(), DeletionError> {
	let txn = db
		.conn()
		.begin()
		.await
		.map_err(DeletionError::Transaction)?;

	let user = entities::User::find_by_id(user_id)
		.one(&txn)
		.await
		.map_err(DeletionError::Transaction)?
		.ok_or(DeletionError::UserNotFound(user_id))?;

	// Dropping the transaction on an early return rolls every completed
	// step back.
	let talks = user
		.find_related(entities::Talk)
		.all(&txn)
		.await
		.map_err(DeletionError::TalksUndeletable)?;
	let talk_count = talks.len();

	// Favorites hold a foreign key onto talks, so they go first.
	let talk_ids: Vec<i32> = talks.iter().map(|talk| talk.id).collect();
	if !talk_ids.is_empty() {
		entities::Favorite::delete_many()
			.filter(favorite::Column::TalkId.is_in(talk_ids))
			.exec(&txn)
			.await
			.map_err(DeletionError::TalksUndeletable)?;
	}
	for talk in talks {
		talk.delete(&txn)
			.await
			.map_err(DeletionError::TalksUndeletable)?;
	}

	let persistences = user
		.find_related(entities::Persistence)
		.all(&txn)
		.await
		.map_err(DeletionError::PersistenceUndeletable)?;
	let persistence_count = persistences.len();
	for item in persistences {
		item.delete(&txn)
			.await
			.map_err(DeletionError::PersistenceUndeletable)?;
	}

	let reminders = user
		.find_related(entities::Reminder)
		.all(&txn)
		.await
		.map_err(DeletionError::RemindersUndeletable)?;
	let reminder_count = reminders.len();
	for item in reminders {
		item.delete(&txn)
			.await
			.map_err(DeletionError::RemindersUndeletable)?;
	}

	let throttles = user
		.find_related(entities::Throttle)
		.all(&txn)
		.await
		.map_err(DeletionError::ThrottleUndeletable)?;
	let throttle_count = throttles.len();
	for item in throttles {
		item.delete(&txn)
			.await
			.map_err(DeletionError::ThrottleUndeletable)?;
	}

	// Favorites the user placed as an admin reference their user id.
	entities::Favorite::delete_many()
		.filter(favorite::Column::AdminUserId.eq(user_id))
		.exec(&txn)
		.await
		.map_err(DeletionError::UserUndeletable)?;

	user.delete(&txn)
		.await
		.map_err(DeletionError::UserUndeletable)?;

	txn.commit().await.map_err(DeletionError::Transaction)?;

	info!(
		"Deleted user {} ({} talks, {} persistences, {} reminders, {} throttles)",
		user_id, talk_count, persistence_count, reminder_count, throttle_count
	);

	Ok(())
}
