//! Serves a bundled API documentation viewer and an OpenAPI specification
//! below a URL prefix, in front of any `hyper` service.
//!
//! ```no_run
//! use elements_docs::{DocsMiddleware, SpecFormat};
//! use std::sync::Arc;
//!
//! let mut docs = DocsMiddleware::new("/docs");
//! docs.use_content("openapi: 3.0.3", SpecFormat::Yaml);
//! let docs = Arc::new(docs);
//! ```

pub mod assets;
pub mod error;
pub mod http;
pub mod middleware;
pub mod spec;

pub use error::DocsError;
pub use middleware::{Dispatch, DocsMiddleware, DocsService};
pub use spec::{DirectorySpec, ReloadPolicy, SpecDocument, SpecFormat, SpecProvider, StaticSpec};
