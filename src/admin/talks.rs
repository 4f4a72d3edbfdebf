//! Admin talk review: listing, viewing, favoriting, selecting

use crate::{
	admin::{error::Result, users, AdminError},
	auth::{require_admin, AuthGate},
	domain::{Page, SpeakerProfile, TalkDetail, TalkOverview},
	infrastructure::database::{
		entities::{self, favorite, talk},
		Database,
	},
};

use sea_orm::{
	ActiveModelBehavior, ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait,
	ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// List all submitted talks for the admin overview, newest first.
///
/// Each row carries the selection flag, the total favorite count, and
/// whether the acting admin has favorited that talk.
pub async fn list_talks(
	db: &Database,
	gate: &dyn AuthGate,
	page: u64,
	per_page: u64,
) -> Result<Page<TalkOverview>> {
	let admin_id = require_admin(gate)?;
	let conn = db.conn();
	let per_page = per_page.max(1);

	let paginator = entities::Talk::find()
		.find_also_related(entities::User)
		.order_by_desc(talk::Column::CreatedAt)
		.paginate(conn, per_page);

	let total_items = paginator.num_items().await?;
	let page = Page::<TalkOverview>::clamp_page(page, per_page, total_items);
	let rows = paginator.fetch_page(page - 1).await?;

	// Favorite flags and counts for the talks on this page
	let talk_ids: Vec<i32> = rows.iter().map(|(t, _)| t.id).collect();
	let favorites = if talk_ids.is_empty() {
		Vec::new()
	} else {
		entities::Favorite::find()
			.filter(favorite::Column::TalkId.is_in(talk_ids))
			.all(conn)
			.await?
	};

	let mut counts: HashMap<i32, u64> = HashMap::new();
	let mut mine: HashSet<i32> = HashSet::new();
	for fav in &favorites {
		*counts.entry(fav.talk_id).or_insert(0) += 1;
		if fav.admin_user_id == admin_id {
			mine.insert(fav.talk_id);
		}
	}

	let items = rows
		.into_iter()
		.map(|(talk, speaker)| TalkOverview {
			id: talk.id,
			title: talk.title,
			category: talk.category,
			level: talk.level,
			selected: talk.selected,
			favorited: mine.contains(&talk.id),
			favorite_count: counts.get(&talk.id).copied().unwrap_or(0),
			speaker_id: talk.user_id,
			speaker_name: speaker
				.map(|u| u.full_name())
				.unwrap_or_else(|| "Unknown".to_string()),
			submitted_at: talk.created_at,
		})
		.collect();

	debug!(
		"Listed talks page {} ({} total) for admin {}",
		page, total_items, admin_id
	);

	Ok(Page::new(items, page, per_page, total_items))
}

/// View a single talk with its speaker and the speaker's other talks.
pub async fn view_talk(db: &Database, gate: &dyn AuthGate, talk_id: i32) -> Result<TalkDetail> {
	require_admin(gate)?;
	let conn = db.conn();

	let talk = entities::Talk::find_by_id(talk_id)
		.one(conn)
		.await?
		.ok_or(AdminError::TalkNotFound(talk_id))?;

	let speaker = entities::User::find_by_id(talk.user_id)
		.one(conn)
		.await?
		.ok_or(AdminError::UserNotFound(talk.user_id))?;

	let other_talks = users::other_talks(db, talk.user_id, talk.id).await?;

	Ok(TalkDetail {
		speaker: SpeakerProfile::from_user(&speaker),
		talk,
		other_talks,
	})
}

/// Set or clear the acting admin's favorite on a talk.
///
/// Idempotent in both directions: favoriting an already-favorited talk and
/// unfavoriting a non-favorited one are no-ops. At most one favorite row
/// ever exists per (admin, talk) pair; the whole toggle runs in one
/// transaction so concurrent toggles cannot race it into duplicates.
pub async fn set_favorite(
	db: &Database,
	gate: &dyn AuthGate,
	talk_id: i32,
	desired: bool,
) -> Result<()> {
	let admin_id = require_admin(gate)?;
	let txn = db.conn().begin().await?;

	let talk_exists = entities::Talk::find_by_id(talk_id).one(&txn).await?.is_some();
	if !talk_exists {
		return Err(AdminError::TalkNotFound(talk_id));
	}

	let existing = entities::Favorite::find()
		.filter(favorite::Column::AdminUserId.eq(admin_id))
		.filter(favorite::Column::TalkId.eq(talk_id))
		.one(&txn)
		.await?;

	match (existing, desired) {
		(None, true) => {
			let mut fav = favorite::ActiveModel::new();
			fav.admin_user_id = Set(admin_id);
			fav.talk_id = Set(talk_id);
			fav.insert(&txn).await?;
			info!("Admin {} favorited talk {}", admin_id, talk_id);
		}
		(Some(row), false) => {
			row.delete(&txn).await?;
			info!("Admin {} unfavorited talk {}", admin_id, talk_id);
		}
		// Already in the desired state
		_ => {}
	}

	txn.commit().await?;
	Ok(())
}

/// Set or clear a talk's selection for the conference program.
pub async fn set_select(
	db: &Database,
	gate: &dyn AuthGate,
	talk_id: i32,
	selected: bool,
) -> Result<()> {
	let admin_id = require_admin(gate)?;
	let conn = db.conn();

	let talk = entities::Talk::find_by_id(talk_id)
		.one(conn)
		.await?
		.ok_or(AdminError::TalkNotFound(talk_id))?;

	let mut active: talk::ActiveModel = talk.into();
	active.selected = Set(selected);
	active.updated_at = Set(chrono::Utc::now());
	active.update(conn).await?;

	info!(
		"Admin {} {} talk {}",
		admin_id,
		if selected { "selected" } else { "deselected" },
		talk_id
	);
	Ok(())
}
