//! Documentation middleware configuration
//!
//! A [`DocsMiddleware`] is built once at startup, optionally given a
//! specification source, then shared read-only behind an `Arc`.

use crate::assets::INDEX_TEMPLATE;
use crate::error::DocsError;
use crate::middleware::template;
use crate::spec::{DirectorySpec, ReloadPolicy, SpecFormat, SpecProvider, StaticSpec};
use hyper::body::Bytes;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

/// Serves the API documentation viewer and its specification under a prefix
#[derive(Debug)]
pub struct DocsMiddleware {
    pub(crate) url_prefix: String,
    template: Cow<'static, str>,
    pub(crate) spec: Option<Arc<dyn SpecProvider>>,
    /// `None` when the template failed to render
    pub(crate) index: Option<Bytes>,
}

impl DocsMiddleware {
    /// Create a middleware mounted at `url_prefix` with no specification
    pub fn new(url_prefix: impl Into<String>) -> Self {
        Self::with_template(url_prefix, INDEX_TEMPLATE)
    }

    /// Create a middleware rendering a custom index template
    ///
    /// The template must contain `{{path}}`; `{{spec}}` is optional.
    /// A template without `{{path}}` disables only the index routes: the
    /// stylesheet, script, icon and specification are still served.
    pub fn with_template(
        url_prefix: impl Into<String>,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        let mut docs = Self {
            url_prefix: url_prefix.into(),
            template: template.into(),
            spec: None,
            index: None,
        };
        docs.render();
        docs
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Format of the configured specification, if any
    pub fn spec_format(&self) -> Option<SpecFormat> {
        self.spec.as_ref().and_then(|spec| spec.format())
    }

    /// Serve the specification file at `path`, read once now
    ///
    /// The format is inferred from the extension; on failure the previous
    /// configuration is kept.
    pub fn use_spec_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, DocsError> {
        let spec = StaticSpec::from_file(path)?;
        Ok(self.use_spec_provider(Arc::new(spec)))
    }

    /// Serve a specification packaged in a `rust-embed` bundle
    pub fn use_embedded<E: RustEmbed>(&mut self, path: &str) -> Result<&mut Self, DocsError> {
        let spec = StaticSpec::from_embedded::<E>(path)?;
        Ok(self.use_spec_provider(Arc::new(spec)))
    }

    /// Serve in-memory specification content with a declared format
    pub fn use_content(&mut self, content: impl Into<Bytes>, format: SpecFormat) -> &mut Self {
        self.use_spec_provider(Arc::new(StaticSpec::new(content, Some(format))))
    }

    /// Serve `swagger.yaml` from a directory
    pub fn use_spec_dir(
        &mut self,
        root: impl AsRef<Path>,
        policy: ReloadPolicy,
    ) -> Result<&mut Self, DocsError> {
        let spec = DirectorySpec::new(root, policy)?;
        Ok(self.use_spec_provider(Arc::new(spec)))
    }

    /// Serve documents from any provider, replacing the current one
    pub fn use_spec_provider(&mut self, provider: Arc<dyn SpecProvider>) -> &mut Self {
        self.spec = Some(provider);
        self.render();
        self
    }

    /// Refresh the configured specification from its source
    pub async fn reload_spec(&self) -> Result<(), DocsError> {
        match &self.spec {
            Some(spec) => spec.reload().await,
            None => Ok(()),
        }
    }

    /// Wrap a downstream service
    pub fn handle<S>(self: Arc<Self>, inner: S) -> super::DocsService<S> {
        super::DocsService::new(self, inner)
    }

    fn render(&mut self) {
        let document = self
            .spec_format()
            .map_or(SpecFormat::Yaml.document_name(), SpecFormat::document_name);
        self.index = match template::render_index(&self.template, &self.url_prefix, document) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::debug!(error = %e, "index page disabled");
                None
            }
        };
    }
}
