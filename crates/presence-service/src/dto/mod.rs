//! Request and response DTOs

mod requests;
mod responses;

pub use requests::StatusChangeRequest;
pub use responses::StatusResponse;
