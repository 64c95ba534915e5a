//! OpenAPI specification sources
//!
//! Format inference and the providers the middleware reads documents from.

mod format;
mod provider;

pub use format::SpecFormat;
pub use provider::{
    DirectorySpec, ReloadPolicy, SpecDocument, SpecProvider, StaticSpec, SPEC_FILE_NAME,
};
