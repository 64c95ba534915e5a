//! Specification document format
//!
//! The format decides which of the `swagger.*` routes is reachable.

use std::fmt;
use std::path::Path;

/// Serialization format of an OpenAPI document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecFormat {
    Json,
    Yaml,
}

impl SpecFormat {
    /// Infer the format from a file extension
    ///
    /// `.json` maps to JSON, `.yaml` and `.yml` map to YAML, anything else
    /// (including no extension) yields `None`.
    ///
    /// # Examples
    /// ```
    /// use elements_docs::SpecFormat;
    /// assert_eq!(SpecFormat::from_path("api/openapi.yml"), Some(SpecFormat::Yaml));
    /// assert_eq!(SpecFormat::from_path("openapi.json"), Some(SpecFormat::Json));
    /// assert_eq!(SpecFormat::from_path("openapi.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Short tag used in configuration (`json` / `yaml`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Document name the viewer fetches relative to the mount prefix
    pub const fn document_name(self) -> &'static str {
        match self {
            Self::Json => "swagger.json",
            Self::Yaml => "swagger.yaml",
        }
    }
}

impl fmt::Display for SpecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
