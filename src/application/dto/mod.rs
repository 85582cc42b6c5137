//! Data Transfer Objects
//!
//! Request and response shapes exchanged with callers.

pub mod request;
pub mod response;

pub use request::{CountryAddRequest, PersonAddRequest, PersonUpdateRequest};
pub use response::{CountryResponse, PersonResponse};
