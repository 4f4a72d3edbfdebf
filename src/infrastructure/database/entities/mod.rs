//! SeaORM entity definitions
//!
//! These map the CFP domain to database tables.

pub mod favorite;
pub mod persistence;
pub mod reminder;
pub mod talk;
pub mod talk_comment;
pub mod throttle;
pub mod user;

// Re-export all entities
pub use favorite::Entity as Favorite;
pub use persistence::Entity as Persistence;
pub use reminder::Entity as Reminder;
pub use talk::Entity as Talk;
pub use talk_comment::Entity as TalkComment;
pub use throttle::Entity as Throttle;
pub use user::Entity as User;

// Re-export active models for easy access
pub use favorite::ActiveModel as FavoriteActive;
pub use persistence::ActiveModel as PersistenceActive;
pub use reminder::ActiveModel as ReminderActive;
pub use talk::ActiveModel as TalkActive;
pub use talk_comment::ActiveModel as TalkCommentActive;
pub use throttle::ActiveModel as ThrottleActive;
pub use user::ActiveModel as UserActive;
