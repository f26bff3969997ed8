/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod assets;
pub mod client;
pub mod error;
pub mod groups;
pub mod locations;
pub mod orders;
pub mod status;
pub mod users;

pub use client::{ClientConfig, EzRentOutClient};
pub use error::{EzRentOutError, Result};
