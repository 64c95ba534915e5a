//! Viewer bundle compiled into the binary
//!
//! The index page is a template: `{{path}}` is replaced by the mount prefix
//! and `{{spec}}` by the name of the specification document.

/// HTML shell of the documentation viewer
pub const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

pub const STYLESHEET: &[u8] = include_bytes!("../assets/styles.css");

pub const SCRIPT: &[u8] = include_bytes!("../assets/script.js");

pub const FAVICON: &[u8] = include_bytes!("../assets/favicon.png");
