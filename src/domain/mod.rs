//! Domain types
//!
//! Plain data structs handed to the rendering layer; no persistence
//! behavior lives here.

mod page;
mod talk;

pub use page::Page;
pub use talk::{SpeakerProfile, TalkDetail, TalkOverview};
