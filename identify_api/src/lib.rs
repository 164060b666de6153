//! Client for the IDentify user API.
//!
//! Every call goes through [`normalize`], which folds the outcome of one
//! request into a [`CallResult`]: the payload and status on success, a
//! best-effort message and the status (when a response arrived) on failure.

mod client;
mod errors;
mod outcome;
pub mod types;
pub use self::client::{Client, AVAILABLE_STATUS, BASE_URL_ENV};
pub use self::errors::Error;
pub use self::outcome::{normalize, CallResult};
