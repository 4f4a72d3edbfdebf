//! Authentication seam
//!
//! The surrounding web layer owns sessions and login state; this crate only
//! sees an [`AuthGate`] passed into each admin operation. Keeping the gate
//! explicit (instead of an ambient session singleton) makes every
//! permission check visible at the call site and trivial to fake in tests.

use crate::admin::error::AdminError;
use std::collections::HashSet;

/// Permission required for all admin talk operations
pub const ADMIN_PERMISSION: &str = "admin";

/// View of the current request's authentication state
pub trait AuthGate: Send + Sync {
	/// Whether a user is logged in at all
	fn is_authenticated(&self) -> bool;

	/// Whether the current user holds the named permission
	fn has_permission(&self, name: &str) -> bool;

	/// Id of the current user, if any
	fn current_user_id(&self) -> Option<i32>;
}

/// Check that the gate represents a logged-in admin and return their id.
///
/// Every admin operation calls this before touching the database.
pub fn require_admin(gate: &dyn AuthGate) -> Result<i32, AdminError> {
	if !gate.is_authenticated() || !gate.has_permission(ADMIN_PERMISSION) {
		return Err(AdminError::PermissionDenied);
	}

	gate.current_user_id().ok_or(AdminError::PermissionDenied)
}

/// Fixed-identity gate for embedding and tests
#[derive(Debug, Clone)]
pub struct StaticGate {
	user_id: Option<i32>,
	permissions: HashSet<String>,
}

impl StaticGate {
	/// Gate for a logged-in user holding the given permissions
	pub fn new(user_id: i32, permissions: &[&str]) -> Self {
		Self {
			user_id: Some(user_id),
			permissions: permissions.iter().map(|p| (*p).to_string()).collect(),
		}
	}

	/// Gate for a logged-in admin
	pub fn admin(user_id: i32) -> Self {
		Self::new(user_id, &[ADMIN_PERMISSION])
	}

	/// Gate with nobody logged in
	pub fn anonymous() -> Self {
		Self {
			user_id: None,
			permissions: HashSet::new(),
		}
	}
}

impl AuthGate for StaticGate {
	fn is_authenticated(&self) -> bool {
		self.user_id.is_some()
	}

	fn has_permission(&self, name: &str) -> bool {
		self.permissions.contains(name)
	}

	fn current_user_id(&self) -> Option<i32> {
		self.user_id
	}
}
