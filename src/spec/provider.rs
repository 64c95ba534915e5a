//! Specification sources
//!
//! Two strategies sit behind [`SpecProvider`]: [`StaticSpec`] holds a
//! document loaded once at setup, [`DirectorySpec`] reads the fixed
//! `swagger.yaml` from a directory, either once (with explicit reload) or on
//! every request.

use crate::error::DocsError;
use crate::spec::SpecFormat;
use async_trait::async_trait;
use hyper::body::Bytes;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tokio::fs;

/// File name looked up inside a specification directory
pub const SPEC_FILE_NAME: &str = "swagger.yaml";

/// Specification bytes plus the format they were declared with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDocument {
    pub content: Bytes,
    pub format: Option<SpecFormat>,
}

/// Capability that yields the specification document served to the viewer
#[async_trait]
pub trait SpecProvider: fmt::Debug + Send + Sync {
    /// Format of the document, known without reading it
    fn format(&self) -> Option<SpecFormat>;

    /// Current document content
    async fn get(&self) -> Result<SpecDocument, DocsError>;

    /// Refresh any cached content from its source
    async fn reload(&self) -> Result<(), DocsError> {
        Ok(())
    }
}

/// Document held in memory for the lifetime of the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSpec {
    document: SpecDocument,
}

impl StaticSpec {
    pub fn new(content: impl Into<Bytes>, format: Option<SpecFormat>) -> Self {
        Self {
            document: SpecDocument {
                content: content.into(),
                format,
            },
        }
    }

    /// Read a specification file once, inferring the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocsError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| DocsError::io(path, e))?;
        Ok(Self::new(content, SpecFormat::from_path(path)))
    }

    /// Read a specification out of a `rust-embed` bundle
    pub fn from_embedded<E: RustEmbed>(path: &str) -> Result<Self, DocsError> {
        let file = E::get(path).ok_or_else(|| DocsError::EmbeddedNotFound {
            path: path.to_string(),
        })?;
        let content = match file.data {
            Cow::Borrowed(data) => Bytes::from_static(data),
            Cow::Owned(data) => Bytes::from(data),
        };
        Ok(Self::new(content, SpecFormat::from_path(path)))
    }

    pub const fn document(&self) -> &SpecDocument {
        &self.document
    }
}

#[async_trait]
impl SpecProvider for StaticSpec {
    fn format(&self) -> Option<SpecFormat> {
        self.document.format
    }

    async fn get(&self) -> Result<SpecDocument, DocsError> {
        Ok(self.document.clone())
    }
}

/// When a directory-backed specification is read from disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadPolicy {
    /// Read at setup, refreshed only by [`SpecProvider::reload`]
    #[default]
    Once,
    /// Read on every request; blocks the request on disk I/O and
    /// read failures make the request fall through
    EveryRequest,
}

#[derive(Debug)]
enum DirectoryState {
    Cached(RwLock<Bytes>),
    EveryRequest,
}

/// `swagger.yaml` inside a directory, always served as YAML
#[derive(Debug)]
pub struct DirectorySpec {
    file: PathBuf,
    state: DirectoryState,
}

impl DirectorySpec {
    /// Open `root/swagger.yaml` with the given policy
    ///
    /// With [`ReloadPolicy::Once`] the file is read immediately and a read
    /// failure is returned here. With [`ReloadPolicy::EveryRequest`] nothing
    /// is read until the first request.
    pub fn new(root: impl AsRef<Path>, policy: ReloadPolicy) -> Result<Self, DocsError> {
        let file = root.as_ref().join(SPEC_FILE_NAME);
        let state = match policy {
            ReloadPolicy::Once => {
                let content = std::fs::read(&file).map_err(|e| DocsError::io(&file, e))?;
                DirectoryState::Cached(RwLock::new(Bytes::from(content)))
            }
            ReloadPolicy::EveryRequest => DirectoryState::EveryRequest,
        };
        Ok(Self { file, state })
    }

    /// Full path of the specification file
    pub fn path(&self) -> &Path {
        &self.file
    }

    pub const fn policy(&self) -> ReloadPolicy {
        match self.state {
            DirectoryState::Cached(_) => ReloadPolicy::Once,
            DirectoryState::EveryRequest => ReloadPolicy::EveryRequest,
        }
    }
}

#[async_trait]
impl SpecProvider for DirectorySpec {
    fn format(&self) -> Option<SpecFormat> {
        Some(SpecFormat::Yaml)
    }

    async fn get(&self) -> Result<SpecDocument, DocsError> {
        let content = match &self.state {
            DirectoryState::Cached(cache) => read_cached(cache),
            DirectoryState::EveryRequest => fs::read(&self.file)
                .await
                .map(Bytes::from)
                .map_err(|e| DocsError::io(&self.file, e))?,
        };
        Ok(SpecDocument {
            content,
            format: Some(SpecFormat::Yaml),
        })
    }

    /// Re-read the file into the cache
    ///
    /// On failure the previously cached content keeps being served.
    /// A no-op for [`ReloadPolicy::EveryRequest`].
    async fn reload(&self) -> Result<(), DocsError> {
        let DirectoryState::Cached(cache) = &self.state else {
            return Ok(());
        };
        let content = fs::read(&self.file)
            .await
            .map_err(|e| DocsError::io(&self.file, e))?;
        *cache.write().unwrap_or_else(PoisonError::into_inner) = Bytes::from(content);
        tracing::debug!(path = %self.file.display(), "specification reloaded");
        Ok(())
    }
}

fn read_cached(cache: &RwLock<Bytes>) -> Bytes {
    cache.read().unwrap_or_else(PoisonError::into_inner).clone()
}
