//! Request dispatch
//!
//! Maps a method and path to one of the served resources, or declines.

use crate::assets;
use crate::http::{self, mime};
use crate::middleware::DocsMiddleware;
use crate::spec::SpecFormat;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

/// Outcome of offering a request to the middleware
#[derive(Debug)]
pub enum Dispatch {
    /// Response to send; the next handler must not run
    Handled(Response<Full<Bytes>>),
    /// Not ours, let the next handler run
    NotHandled,
}

impl Dispatch {
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Resources reachable below the mount prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Spec(SpecFormat),
    Script,
    Stylesheet,
    Favicon,
}

impl Route {
    /// Match a path that already had the prefix removed
    pub fn from_path(stripped: &str) -> Option<Self> {
        match stripped {
            "" | "/" | "/index.html" => Some(Self::Index),
            "/swagger.yaml" | "/swagger.yml" => Some(Self::Spec(SpecFormat::Yaml)),
            "/swagger.json" => Some(Self::Spec(SpecFormat::Json)),
            "/script.js" => Some(Self::Script),
            "/styles.css" => Some(Self::Stylesheet),
            "/favicon.png" => Some(Self::Favicon),
            _ => None,
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Index => mime::TEXT_HTML,
            Self::Spec(format) => mime::spec_content_type(format),
            Self::Script => mime::APPLICATION_JAVASCRIPT,
            Self::Stylesheet => mime::TEXT_CSS,
            Self::Favicon => mime::IMAGE_PNG,
        }
    }
}

impl DocsMiddleware {
    /// Offer a request to the middleware
    ///
    /// Only GET and HEAD are considered. `path` is the request path as sent
    /// on the wire; it is percent-decoded before matching, so the prefix is
    /// given in decoded form (`/api docs`, not `/api%20docs`). The prefix is
    /// removed when the decoded path literally starts with it and left
    /// untouched otherwise.
    pub async fn dispatch(&self, method: &Method, path: &str) -> Dispatch {
        if method != Method::GET && method != Method::HEAD {
            return Dispatch::NotHandled;
        }
        let is_head = method == Method::HEAD;

        // Escapes that do not decode to UTF-8 never name a served resource
        let Ok(path) = urlencoding::decode(path) else {
            return Dispatch::NotHandled;
        };
        let stripped = path.strip_prefix(self.url_prefix.as_str()).unwrap_or(path.as_ref());
        let Some(route) = Route::from_path(stripped) else {
            return Dispatch::NotHandled;
        };

        let Some(body) = self.load(route).await else {
            return Dispatch::NotHandled;
        };
        Dispatch::Handled(http::build_asset_response(body, route.content_type(), is_head))
    }

    async fn load(&self, route: Route) -> Option<Bytes> {
        match route {
            Route::Index => self.index.clone(),
            Route::Spec(format) => {
                let spec = self.spec.as_ref()?;
                if spec.format() != Some(format) {
                    return None;
                }
                match spec.get().await {
                    Ok(document) => Some(document.content),
                    Err(e) => {
                        tracing::debug!(error = %e, "specification unavailable");
                        None
                    }
                }
            }
            Route::Script => Some(Bytes::from_static(assets::SCRIPT)),
            Route::Stylesheet => Some(Bytes::from_static(assets::STYLESHEET)),
            Route::Favicon => Some(Bytes::from_static(assets::FAVICON)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ReloadPolicy, SPEC_FILE_NAME};
    use http_body_util::BodyExt;
    use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
    use hyper::StatusCode;

    const YAML: &str = "openapi: 3.0.3\n";
    const JSON: &str = "{\"openapi\":\"3.0.3\"}";

    async fn get(docs: &DocsMiddleware, path: &str) -> Option<(String, Bytes)> {
        match docs.dispatch(&Method::GET, path).await {
            Dispatch::Handled(resp) => {
                assert_eq!(resp.status(), StatusCode::OK);
                let content_type = resp.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
                let body = resp.into_body().collect().await.unwrap().to_bytes();
                Some((content_type, body))
            }
            Dispatch::NotHandled => None,
        }
    }

    fn yaml_docs(prefix: &str) -> DocsMiddleware {
        let mut docs = DocsMiddleware::new(prefix);
        docs.use_content(YAML, SpecFormat::Yaml);
        docs
    }

    #[test]
    fn test_route_table() {
        assert_eq!(Route::from_path(""), Some(Route::Index));
        assert_eq!(Route::from_path("/"), Some(Route::Index));
        assert_eq!(Route::from_path("/index.html"), Some(Route::Index));
        assert_eq!(Route::from_path("/swagger.yml"), Some(Route::Spec(SpecFormat::Yaml)));
        assert_eq!(Route::from_path("/swagger.json"), Some(Route::Spec(SpecFormat::Json)));
        assert_eq!(Route::from_path("/unknown"), None);
        assert_eq!(Route::from_path("/script.js/"), None);
        assert_eq!(Route::from_path("script.js"), None);
    }

    #[tokio::test]
    async fn test_serves_every_resource_under_prefix() {
        for prefix in ["", "/docs", "/api/v1/reference"] {
            let docs = yaml_docs(prefix);
            let index = docs.index.clone().unwrap();

            let cases: [(&str, &str, Bytes); 7] = [
                ("", "text/html", index.clone()),
                ("/", "text/html", index.clone()),
                ("/index.html", "text/html", index),
                ("/swagger.yaml", "application/yaml", Bytes::from_static(YAML.as_bytes())),
                ("/script.js", "application/javascript", Bytes::from_static(assets::SCRIPT)),
                ("/styles.css", "text/css", Bytes::from_static(assets::STYLESHEET)),
                ("/favicon.png", "image/png", Bytes::from_static(assets::FAVICON)),
            ];
            for (suffix, content_type, payload) in cases {
                let path = format!("{prefix}{suffix}");
                let (ct, body) = get(&docs, &path)
                    .await
                    .unwrap_or_else(|| panic!("{path} not handled"));
                assert_eq!(ct, content_type, "{path}");
                assert_eq!(body, payload, "{path}");
            }
        }
    }

    #[tokio::test]
    async fn test_yml_alias_and_json_route() {
        let docs = yaml_docs("/docs");
        let (ct, body) = get(&docs, "/docs/swagger.yml").await.unwrap();
        assert_eq!(ct, "application/yaml");
        assert_eq!(body, YAML);

        let mut docs = DocsMiddleware::new("/docs");
        docs.use_content(JSON, SpecFormat::Json);
        let (ct, body) = get(&docs, "/docs/swagger.json").await.unwrap();
        assert_eq!(ct, "application/json");
        assert_eq!(body, JSON);
    }

    #[tokio::test]
    async fn test_format_mismatch_falls_through() {
        let docs = yaml_docs("/docs");
        assert!(get(&docs, "/docs/swagger.json").await.is_none());

        let mut docs = DocsMiddleware::new("/docs");
        docs.use_content(JSON, SpecFormat::Json);
        assert!(get(&docs, "/docs/swagger.yaml").await.is_none());
        assert!(get(&docs, "/docs/swagger.yml").await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_format_serves_no_spec_route() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.txt");
        std::fs::write(&path, YAML).unwrap();
        let mut docs = DocsMiddleware::new("/docs");
        docs.use_spec_file(&path).unwrap();

        for route in ["/docs/swagger.json", "/docs/swagger.yaml", "/docs/swagger.yml"] {
            assert!(get(&docs, route).await.is_none(), "{route}");
        }
        assert!(get(&docs, "/docs/").await.is_some());
    }

    #[tokio::test]
    async fn test_no_spec_configured() {
        let docs = DocsMiddleware::new("/docs");
        assert!(get(&docs, "/docs/swagger.yaml").await.is_none());
        assert!(get(&docs, "/docs/script.js").await.is_some());
    }

    #[tokio::test]
    async fn test_other_methods_fall_through() {
        let docs = yaml_docs("/docs");
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH, Method::OPTIONS] {
            for path in ["/docs", "/docs/index.html", "/docs/swagger.yaml", "/docs/script.js"] {
                let dispatch = docs.dispatch(&method, path).await;
                assert!(!dispatch.is_handled(), "{method} {path}");
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_path_falls_through() {
        let docs = yaml_docs("/docs");
        assert!(get(&docs, "/docs/unknown").await.is_none());
        assert!(get(&docs, "/docs/static/script.js").await.is_none());
        assert!(get(&docs, "/docsscript.js").await.is_none());
    }

    #[tokio::test]
    async fn test_prefix_strip_is_literal() {
        let docs = yaml_docs("/docs");
        // Paths outside the prefix are matched unchanged
        assert!(get(&docs, "/script.js").await.is_some());
        assert!(get(&docs, "/").await.is_some());
        assert!(get(&docs, "/other/script.js").await.is_none());
    }

    #[tokio::test]
    async fn test_head_has_headers_without_body() {
        let docs = yaml_docs("/docs");
        let Dispatch::Handled(resp) = docs.dispatch(&Method::HEAD, "/docs/styles.css").await else {
            panic!("HEAD not handled");
        };
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/css");
        assert_eq!(
            resp.headers()[CONTENT_LENGTH],
            assets::STYLESHEET.len().to_string().as_str()
        );
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_head_on_spec_route() {
        let docs = yaml_docs("/docs");
        let Dispatch::Handled(resp) = docs.dispatch(&Method::HEAD, "/docs/swagger.yaml").await
        else {
            panic!("HEAD not handled");
        };
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/yaml");
        assert_eq!(resp.headers()[CONTENT_LENGTH], YAML.len().to_string().as_str());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_path_is_percent_decoded() {
        let docs = yaml_docs("/api docs");
        let (content_type, _) = get(&docs, "/api%20docs/script.js").await.unwrap();
        assert_eq!(content_type, "application/javascript");
        assert_eq!(get(&docs, "/api%20docs/swagger%2Eyaml").await.unwrap().1, YAML);
        assert!(get(&docs, "/api%20docs/%FF").await.is_none());
    }

    #[tokio::test]
    async fn test_index_contains_prefix_and_is_stable() {
        let docs = yaml_docs("/docs");
        let (_, first) = get(&docs, "/docs").await.unwrap();
        let (_, second) = get(&docs, "/docs/index.html").await.unwrap();
        assert_eq!(first, second);
        assert!(std::str::from_utf8(&first).unwrap().contains("/docs/script.js"));
    }

    #[tokio::test]
    async fn test_broken_template_falls_through_for_index_only() {
        let mut docs = DocsMiddleware::with_template("/docs", "<html></html>");
        docs.use_content(YAML, SpecFormat::Yaml);
        assert!(get(&docs, "/docs/").await.is_none());
        assert!(get(&docs, "/docs/swagger.yaml").await.is_some());
    }

    #[tokio::test]
    async fn test_directory_spec_serves_yaml_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SPEC_FILE_NAME), YAML).unwrap();
        let mut docs = DocsMiddleware::new("/docs");
        docs.use_spec_dir(dir.path(), ReloadPolicy::Once).unwrap();

        assert_eq!(get(&docs, "/docs/swagger.yaml").await.unwrap().1, YAML);
        assert_eq!(get(&docs, "/docs/swagger.yml").await.unwrap().1, YAML);
        assert!(get(&docs, "/docs/swagger.json").await.is_none());
    }

    #[tokio::test]
    async fn test_directory_every_request_falls_through_on_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut docs = DocsMiddleware::new("/docs");
        docs.use_spec_dir(dir.path(), ReloadPolicy::EveryRequest).unwrap();
        assert!(get(&docs, "/docs/swagger.yaml").await.is_none());

        std::fs::write(dir.path().join(SPEC_FILE_NAME), YAML).unwrap();
        assert_eq!(get(&docs, "/docs/swagger.yaml").await.unwrap().1, YAML);

        std::fs::remove_file(dir.path().join(SPEC_FILE_NAME)).unwrap();
        assert!(get(&docs, "/docs/swagger.yaml").await.is_none());
    }

    #[tokio::test]
    async fn test_reload_spec_refreshes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(SPEC_FILE_NAME);
        std::fs::write(&file, "v: 1").unwrap();
        let mut docs = DocsMiddleware::new("/docs");
        docs.use_spec_dir(dir.path(), ReloadPolicy::Once).unwrap();

        std::fs::write(&file, "v: 2").unwrap();
        assert_eq!(get(&docs, "/docs/swagger.yaml").await.unwrap().1, "v: 1");
        docs.reload_spec().await.unwrap();
        assert_eq!(get(&docs, "/docs/swagger.yaml").await.unwrap().1, "v: 2");
    }
}
