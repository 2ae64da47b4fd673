//! Request and response envelopes

pub mod json;
pub mod response;

pub use json::ApiJson;
pub use response::{Created, DataResponse, NoContent};
