//! Admin review services
//!
//! Everything here is gated on the `admin` permission via an injected
//! [`crate::auth::AuthGate`].

pub mod error;
pub mod talks;
pub mod users;

pub use error::{AdminError, DeletionError};
