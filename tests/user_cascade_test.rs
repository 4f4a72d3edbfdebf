//! User cascade delete: completeness, comment retention, missing users

mod helpers;

use cfp_core::{
	admin::{talks, users, DeletionError},
	auth::StaticGate,
	infrastructure::database::entities::{self, persistence, talk, throttle},
	Database,
};
use helpers::{
	dependent_rows, favorite_rows, seed_comment, seed_persistence, seed_reminder, seed_talk,
	seed_throttle, seed_user,
};
use pretty_assertions::assert_eq;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter};

#[tokio::test]
async fn test_cascade_removes_all_dependents() {
	let db = Database::create_in_memory().await.unwrap();
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;

	let talk_a = seed_talk(&db, speaker.id, "Error Handling").await;
	seed_talk(&db, speaker.id, "Trait Objects").await;
	seed_persistence(&db, speaker.id).await;
	seed_reminder(&db, speaker.id, "speaker@cfp.test").await;
	seed_reminder(&db, speaker.id, "speaker@cfp.test").await;
	seed_throttle(&db, speaker.id).await;
	seed_comment(&db, speaker.id, talk_a.id, "Looking forward to feedback").await;

	users::delete_user(&db, speaker.id).await.unwrap();

	let (talks, persistences, reminders, throttles, comments) =
		dependent_rows(&db, speaker.id).await;
	assert_eq!(talks, 0);
	assert_eq!(persistences, 0);
	assert_eq!(reminders, 0);
	assert_eq!(throttles, 0);
	// Comments are retained for the audit trail
	assert_eq!(comments, 1);

	let user = entities::User::find_by_id(speaker.id)
		.one(db.conn())
		.await
		.unwrap();
	assert!(user.is_none());
}

#[tokio::test]
async fn test_cascade_with_empty_collections() {
	let db = Database::create_in_memory().await.unwrap();
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;

	// No talks, tokens, reminders or throttles at all
	users::delete_user(&db, speaker.id).await.unwrap();

	let user = entities::User::find_by_id(speaker.id)
		.one(db.conn())
		.await
		.unwrap();
	assert!(user.is_none());
}

#[tokio::test]
async fn test_cascade_missing_user() {
	let db = Database::create_in_memory().await.unwrap();

	let err = users::delete_user(&db, 424242).await.unwrap_err();
	assert!(matches!(err, DeletionError::UserNotFound(424242)));
}

#[tokio::test]
async fn test_cascade_leaves_other_users_untouched() {
	let db = Database::create_in_memory().await.unwrap();
	let doomed = seed_user(&db, "doomed@cfp.test", "Dora", "Doomed").await;
	let bystander = seed_user(&db, "bystander@cfp.test", "Ben", "Bystander").await;

	seed_talk(&db, doomed.id, "Going Away").await;
	seed_talk(&db, bystander.id, "Staying Put").await;
	seed_persistence(&db, bystander.id).await;
	seed_throttle(&db, bystander.id).await;

	users::delete_user(&db, doomed.id).await.unwrap();

	let (talks, persistences, _, throttles, _) = dependent_rows(&db, bystander.id).await;
	assert_eq!(talks, 1);
	assert_eq!(persistences, 1);
	assert_eq!(throttles, 1);

	let survivor = entities::User::find_by_id(bystander.id)
		.one(db.conn())
		.await
		.unwrap();
	assert!(survivor.is_some());
}

#[tokio::test]
async fn test_cascade_full_account_teardown() {
	// A user owning two talks, one persistence token, no reminders and
	// one throttle record disappears entirely; their comments stay.
	let db = Database::create_in_memory().await.unwrap();
	let speaker = seed_user(&db, "seven@cfp.test", "Seven", "Speaker").await;
	let reviewer = seed_user(&db, "reviewer@cfp.test", "Rita", "Reviewer").await;

	let talk_a = seed_talk(&db, speaker.id, "Talk 101").await;
	seed_talk(&db, speaker.id, "Talk 102").await;
	seed_persistence(&db, speaker.id).await;
	seed_throttle(&db, speaker.id).await;
	seed_comment(&db, speaker.id, talk_a.id, "Author note").await;
	seed_comment(&db, reviewer.id, talk_a.id, "Reviewer note").await;

	users::delete_user(&db, speaker.id).await.unwrap();

	let (talks, persistences, reminders, throttles, comments) =
		dependent_rows(&db, speaker.id).await;
	assert_eq!((talks, persistences, reminders, throttles), (0, 0, 0, 0));
	assert_eq!(comments, 1);

	// The reviewer's comment is also untouched
	let (_, _, _, _, reviewer_comments) = dependent_rows(&db, reviewer.id).await;
	assert_eq!(reviewer_comments, 1);
}

#[tokio::test]
async fn test_cascade_with_favorited_talks() {
	// Another admin's favorite on the speaker's talk must not block the
	// delete, and the favorite row goes with the talk.
	let db = Database::create_in_memory().await.unwrap();
	let admin = seed_user(&db, "admin@cfp.test", "Ada", "Admin").await;
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;
	let talk = seed_talk(&db, speaker.id, "Soon Gone").await;

	talks::set_favorite(&db, &StaticGate::admin(admin.id), talk.id, true)
		.await
		.unwrap();
	assert_eq!(favorite_rows(&db, admin.id, talk.id).await, 1);

	users::delete_user(&db, speaker.id).await.unwrap();

	assert_eq!(favorite_rows(&db, admin.id, talk.id).await, 0);
	let survivor = entities::User::find_by_id(admin.id)
		.one(db.conn())
		.await
		.unwrap();
	assert!(survivor.is_some());
}

#[tokio::test]
async fn test_cascade_with_own_favorites() {
	// An admin who holds favorites on other speakers' talks can still be
	// deleted; their favorites vanish while the talks stay.
	let db = Database::create_in_memory().await.unwrap();
	let admin = seed_user(&db, "admin@cfp.test", "Ada", "Admin").await;
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;
	let talk = seed_talk(&db, speaker.id, "Staying Put").await;

	talks::set_favorite(&db, &StaticGate::admin(admin.id), talk.id, true)
		.await
		.unwrap();

	users::delete_user(&db, admin.id).await.unwrap();

	assert_eq!(favorite_rows(&db, admin.id, talk.id).await, 0);
	let (talks_left, ..) = dependent_rows(&db, speaker.id).await;
	assert_eq!(talks_left, 1);
}

#[tokio::test]
async fn test_cascade_failed_step_rolls_back() {
	// Breaking the reminders step mid-sequence must surface that step's
	// error and leave every earlier deletion undone.
	let db = Database::create_in_memory().await.unwrap();
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;
	seed_talk(&db, speaker.id, "Still Here").await;
	seed_persistence(&db, speaker.id).await;
	seed_throttle(&db, speaker.id).await;

	db.conn()
		.execute_unprepared("DROP TABLE reminders")
		.await
		.unwrap();

	let err = users::delete_user(&db, speaker.id).await.unwrap_err();
	assert!(matches!(err, DeletionError::RemindersUndeletable(_)));

	let conn = db.conn();
	let talks_left = entities::Talk::find()
		.filter(talk::Column::UserId.eq(speaker.id))
		.count(conn)
		.await
		.unwrap();
	let persistences_left = entities::Persistence::find()
		.filter(persistence::Column::UserId.eq(speaker.id))
		.count(conn)
		.await
		.unwrap();
	let throttles_left = entities::Throttle::find()
		.filter(throttle::Column::UserId.eq(speaker.id))
		.count(conn)
		.await
		.unwrap();
	assert_eq!((talks_left, persistences_left, throttles_left), (1, 1, 1));

	let user = entities::User::find_by_id(speaker.id)
		.one(conn)
		.await
		.unwrap();
	assert!(user.is_some());
}

#[tokio::test]
async fn test_comments_reachable_through_talk_relation() {
	let db = Database::create_in_memory().await.unwrap();
	let speaker = seed_user(&db, "speaker@cfp.test", "Sam", "Speaker").await;
	let reviewer = seed_user(&db, "reviewer@cfp.test", "Rita", "Reviewer").await;
	let talk = seed_talk(&db, speaker.id, "With Feedback").await;
	seed_comment(&db, reviewer.id, talk.id, "Tighten the abstract").await;

	let comments = talk
		.find_related(entities::TalkComment)
		.all(db.conn())
		.await
		.unwrap();
	assert_eq!(comments.len(), 1);
	assert_eq!(comments[0].message, "Tighten the abstract");
}
