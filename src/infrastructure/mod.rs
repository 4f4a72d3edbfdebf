//! Infrastructure layer

pub mod database;
