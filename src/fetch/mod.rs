//! Remote trace acquisition.

pub mod client;

pub use client::{validate_url, TraceFetcher};
