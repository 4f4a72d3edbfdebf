//! Pagination metadata

use serde::{Deserialize, Serialize};

/// One page of an ordered listing, plus the navigation metadata the
/// rendering layer needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
	/// Items on this page
	pub items: Vec<T>,

	/// Current page, 1-based
	pub page: u64,

	/// Page size used for the query
	pub per_page: u64,

	/// Total items across all pages
	pub total_items: u64,

	/// Total number of pages (at least 1)
	pub total_pages: u64,
}

impl<T> Page<T> {
	pub fn new(items: Vec<T>, page: u64, per_page: u64, total_items: u64) -> Self {
		let total_pages = if total_items == 0 {
			1
		} else {
			total_items.div_ceil(per_page)
		};

		Self {
			items,
			page,
			per_page,
			total_items,
			total_pages,
		}
	}

	/// Clamp a requested page number into the valid range for the given
	/// totals. Page 0 is treated as page 1.
	pub fn clamp_page(requested: u64, per_page: u64, total_items: u64) -> u64 {
		let last = if total_items == 0 {
			1
		} else {
			total_items.div_ceil(per_page)
		};
		requested.max(1).min(last)
	}

	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}

	pub fn has_prev(&self) -> bool {
		self.page > 1
	}
}
