//! Documentation middleware
//!
//! Configuration, request dispatch and service composition.
//! Currently serves the viewer bundle and one specification document.

mod docs;
pub mod router;
mod service;
mod template;

pub use docs::DocsMiddleware;
pub use router::{Dispatch, Route};
pub use service::DocsService;
pub use template::render_index;
