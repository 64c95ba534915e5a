//! Index page rendering

use crate::error::DocsError;
use hyper::body::Bytes;

const PATH_PLACEHOLDER: &str = "{{path}}";
const SPEC_PLACEHOLDER: &str = "{{spec}}";

/// Render the viewer index for a mount prefix
///
/// `spec_document` is the name the viewer fetches the specification from,
/// relative to the prefix. The prefix is HTML-escaped before substitution.
pub fn render_index(
    template: &str,
    url_prefix: &str,
    spec_document: &str,
) -> Result<Bytes, DocsError> {
    if !template.contains(PATH_PLACEHOLDER) {
        return Err(DocsError::Template(format!(
            "missing {PATH_PLACEHOLDER} placeholder"
        )));
    }

    // Spec name first so a prefix containing "{{spec}}" is left as is
    let html = template
        .replace(SPEC_PLACEHOLDER, spec_document)
        .replace(PATH_PLACEHOLDER, &escape_html(url_prefix));
    Ok(Bytes::from(html))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&#34;")
        .replace('\'', "&#39;")
}
