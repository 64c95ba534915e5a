// Fallback service
// Answers every request the documentation middleware declines

use elements_docs::http::build_404_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::Service;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::future::{ready, Ready};

/// Terminal handler returning 404 Not Found
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFound;

impl<B> Service<Request<B>> for NotFound {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn call(&self, _req: Request<B>) -> Self::Future {
        ready(Ok(build_404_response()))
    }
}
