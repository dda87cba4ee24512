pub mod catalog;
pub mod config;
pub mod download;
pub mod error;
pub mod paths;
pub mod transfer;

pub use error::{FetchError, Result};
