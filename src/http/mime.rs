//! Content types of the served resources

use crate::spec::SpecFormat;

pub const TEXT_HTML: &str = "text/html";
pub const TEXT_CSS: &str = "text/css";
pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";
pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_YAML: &str = "application/yaml";
pub const IMAGE_PNG: &str = "image/png";

/// Get the Content-Type a specification document is served with
///
/// # Examples
/// ```
/// use elements_docs::http::mime::spec_content_type;
/// use elements_docs::SpecFormat;
/// assert_eq!(spec_content_type(SpecFormat::Json), "application/json");
/// assert_eq!(spec_content_type(SpecFormat::Yaml), "application/yaml");
/// ```
pub const fn spec_content_type(format: SpecFormat) -> &'static str {
    match format {
        SpecFormat::Json => APPLICATION_JSON,
        SpecFormat::Yaml => APPLICATION_YAML,
    }
}
