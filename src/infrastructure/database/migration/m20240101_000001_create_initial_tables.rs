//! Initial migration to create all tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		// Create users table
		manager
			.create_table(
				Table::create()
					.table(Users::Table)
					.if_not_exists()
					.col(ColumnDef::new(Users::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Users::Email).string().not_null().unique_key())
					.col(ColumnDef::new(Users::PasswordHash).string().not_null())
					.col(ColumnDef::new(Users::FirstName).string().not_null())
					.col(ColumnDef::new(Users::LastName).string().not_null())
					.col(ColumnDef::new(Users::Company).string())
					.col(ColumnDef::new(Users::Twitter).string())
					.col(ColumnDef::new(Users::Bio).text())
					.col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Users::UpdatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create talks table
		manager
			.create_table(
				Table::create()
					.table(Talks::Table)
					.if_not_exists()
					.col(ColumnDef::new(Talks::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Talks::UserId).integer().not_null())
					.col(ColumnDef::new(Talks::Title).string().not_null())
					.col(ColumnDef::new(Talks::Description).text().not_null())
					.col(ColumnDef::new(Talks::Category).string().not_null())
					.col(ColumnDef::new(Talks::Level).string().not_null())
					.col(ColumnDef::new(Talks::Selected).boolean().not_null().default(false))
					.col(ColumnDef::new(Talks::CreatedAt).timestamp_with_time_zone().not_null())
					.col(ColumnDef::new(Talks::UpdatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(Talks::Table, Talks::UserId)
							.to(Users::Table, Users::Id),
					)
					.to_owned(),
			)
			.await?;

		// Create favorites table
		manager
			.create_table(
				Table::create()
					.table(Favorites::Table)
					.if_not_exists()
					.col(ColumnDef::new(Favorites::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Favorites::AdminUserId).integer().not_null())
					.col(ColumnDef::new(Favorites::TalkId).integer().not_null())
					.col(ColumnDef::new(Favorites::CreatedAt).timestamp_with_time_zone().not_null())
					.foreign_key(
						ForeignKey::create()
							.from(Favorites::Table, Favorites::AdminUserId)
							.to(Users::Table, Users::Id),
					)
					.foreign_key(
						ForeignKey::create()
							.from(Favorites::Table, Favorites::TalkId)
							.to(Talks::Table, Talks::Id),
					)
					.to_owned(),
			)
			.await?;

		// Create talk_comments table
		manager
			.create_table(
				Table::create()
					.table(TalkComments::Table)
					.if_not_exists()
					.col(ColumnDef::new(TalkComments::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(TalkComments::UserId).integer().not_null())
					.col(ColumnDef::new(TalkComments::TalkId).integer().not_null())
					.col(ColumnDef::new(TalkComments::Message).text().not_null())
					.col(ColumnDef::new(TalkComments::CreatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create persistences table
		manager
			.create_table(
				Table::create()
					.table(Persistences::Table)
					.if_not_exists()
					.col(ColumnDef::new(Persistences::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Persistences::UserId).integer().not_null())
					.col(ColumnDef::new(Persistences::Code).string().not_null().unique_key())
					.col(ColumnDef::new(Persistences::CreatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create reminders table
		manager
			.create_table(
				Table::create()
					.table(Reminders::Table)
					.if_not_exists()
					.col(ColumnDef::new(Reminders::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Reminders::UserId).integer().not_null())
					.col(ColumnDef::new(Reminders::Email).string().not_null())
					.col(ColumnDef::new(Reminders::CreatedAt).timestamp_with_time_zone().not_null())
					.to_owned(),
			)
			.await?;

		// Create throttles table
		manager
			.create_table(
				Table::create()
					.table(Throttles::Table)
					.if_not_exists()
					.col(ColumnDef::new(Throttles::Id).integer().not_null().auto_increment().primary_key())
					.col(ColumnDef::new(Throttles::UserId).integer().not_null())
					.col(ColumnDef::new(Throttles::IpAddress).string())
					.col(ColumnDef::new(Throttles::Attempts).integer().not_null().default(0))
					.col(ColumnDef::new(Throttles::Suspended).boolean().not_null().default(false))
					.col(ColumnDef::new(Throttles::Banned).boolean().not_null().default(false))
					.col(ColumnDef::new(Throttles::LastAttemptAt).timestamp_with_time_zone())
					.to_owned(),
			)
			.await?;

		// One favorite per (admin, talk) pair
		manager
			.create_index(
				Index::create()
					.name("idx_favorites_admin_talk")
					.table(Favorites::Table)
					.col(Favorites::AdminUserId)
					.col(Favorites::TalkId)
					.unique()
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_talks_user_id")
					.table(Talks::Table)
					.col(Talks::UserId)
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		// Drop tables in reverse order of creation
		manager
			.drop_table(Table::drop().table(Throttles::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Reminders::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Persistences::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(TalkComments::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Favorites::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Talks::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Users::Table).to_owned())
			.await?;

		Ok(())
	}
}

// Table identifiers

#[derive(Iden)]
enum Users {
	Table,
	Id,
	Email,
	PasswordHash,
	FirstName,
	LastName,
	Company,
	Twitter,
	Bio,
	CreatedAt,
	UpdatedAt,
}

#[derive(Iden)]
enum Talks {
	Table,
	Id,
	UserId,
	Title,
	Description,
	Category,
	Level,
	Selected,
	CreatedAt,
	UpdatedAt,
}

#[derive(Iden)]
enum Favorites {
	Table,
	Id,
	AdminUserId,
	TalkId,
	CreatedAt,
}

#[derive(Iden)]
enum TalkComments {
	Table,
	Id,
	UserId,
	TalkId,
	Message,
	CreatedAt,
}

#[derive(Iden)]
enum Persistences {
	Table,
	Id,
	UserId,
	Code,
	CreatedAt,
}

#[derive(Iden)]
enum Reminders {
	Table,
	Id,
	UserId,
	Email,
	CreatedAt,
}

#[derive(Iden)]
enum Throttles {
	Table,
	Id,
	UserId,
	IpAddress,
	Attempts,
	Suspended,
	Banned,
	LastAttemptAt,
}
