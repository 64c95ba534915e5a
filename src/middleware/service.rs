//! Middleware composition over `hyper` services
//!
//! [`DocsService`] offers every request to the [`DocsMiddleware`] first and
//! only calls the wrapped service when the middleware declines.

use crate::middleware::{Dispatch, DocsMiddleware};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::Service;
use hyper::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Documentation middleware in front of a downstream service
#[derive(Debug, Clone)]
pub struct DocsService<S> {
    docs: Arc<DocsMiddleware>,
    inner: S,
}

impl<S> DocsService<S> {
    pub const fn new(docs: Arc<DocsMiddleware>, inner: S) -> Self {
        Self { docs, inner }
    }

    pub const fn docs(&self) -> &Arc<DocsMiddleware> {
        &self.docs
    }
}

impl<S, B> Service<Request<B>> for DocsService<S>
where
    S: Service<Request<B>, Response = Response<Full<Bytes>>> + Clone + Send + 'static,
    S::Future: Send,
    S::Error: Send,
    B: Send + 'static,
{
    type Response = Response<Full<Bytes>>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<B>) -> Self::Future {
        let docs = Arc::clone(&self.docs);
        let inner = self.inner.clone();

        Box::pin(async move {
            let method = req.method().clone();
            let path = req.uri().path().to_owned();
            match docs.dispatch(&method, &path).await {
                Dispatch::Handled(response) => Ok(response),
                Dispatch::NotHandled => inner.call(req).await,
            }
        })
    }
}
