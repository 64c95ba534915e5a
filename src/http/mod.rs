//! HTTP protocol layer module
//!
//! Content types and response builders, decoupled from routing.

pub mod mime;
pub mod response;

pub use response::{build_404_response, build_asset_response};
