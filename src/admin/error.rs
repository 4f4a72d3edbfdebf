//! Admin service error types

use sea_orm::DbErr;
use thiserror::Error;

/// Errors from admin talk operations
#[derive(Error, Debug)]
pub enum AdminError {
	/// Caller is not logged in or lacks the admin permission
	#[error("Permission denied")]
	PermissionDenied,

	/// Referenced talk does not exist
	#[error("Talk not found: {0}")]
	TalkNotFound(i32),

	/// Referenced user does not exist
	#[error("User not found: {0}")]
	UserNotFound(i32),

	/// Store-level failure, passed through uncategorized
	#[error("Database error: {0}")]
	Database(#[from] DbErr),
}

/// Failures of the user cascade delete, categorized per step
#[derive(Error, Debug)]
pub enum DeletionError {
	#[error("User not found: {0}")]
	UserNotFound(i32),

	#[error("Unable to delete talks of user: {0}")]
	TalksUndeletable(#[source] DbErr),

	#[error("Unable to delete persistence records of user: {0}")]
	PersistenceUndeletable(#[source] DbErr),

	#[error("Unable to delete reminder records of user: {0}")]
	RemindersUndeletable(#[source] DbErr),

	#[error("Unable to delete throttle records of user: {0}")]
	ThrottleUndeletable(#[source] DbErr),

	#[error("Unable to delete user: {0}")]
	UserUndeletable(#[source] DbErr),

	/// Failure opening or committing the surrounding transaction
	#[error("Transaction error: {0}")]
	Transaction(#[source] DbErr),
}

/// Result type for admin operations
pub type Result<T> = std::result::Result<T, AdminError>;
