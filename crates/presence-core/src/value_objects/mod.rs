//! Value objects for the presence domain

mod user_id;

pub use user_id::{UserId, UserIdParseError};
