//! Top-level site settings (url, base path, output mode).

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::extract_url_path;
use serde::Serialize;

/// Output mode of the build.
///
/// The portfolio is rendered fully ahead of serving; no other mode exists.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Fully static output.
    #[default]
    Static,
}

/// Site-level settings handed to the build pipeline.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Canonical site URL.
    pub url: String,

    /// Base path the site is served under (e.g., "/portfolio").
    pub base: String,

    /// Output mode (always fully static).
    pub output: OutputMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://moyaser315.github.io".into(),
            base: "/portfolio".into(),
            output: OutputMode::Static,
        }
    }
}

impl SiteConfig {
    pub const FIELD_URL: FieldPath = FieldPath::new("site.url");
    pub const FIELD_BASE: FieldPath = FieldPath::new("site.base");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http/https URL with a host
    /// - `base` must start with `/`
    /// - `base` must match the path component of `url` when the URL has one
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                // Must be http or https
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELD_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                // Must have a valid host
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELD_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELD_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if !self.base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELD_BASE,
                format!("base path '{}' must start with '/'", self.base),
                "use format like /portfolio",
            );
        }

        // A URL with a path component must agree with base, otherwise links
        // generated against base would 404 under the deployed prefix.
        if let Some(url_path) = extract_url_path(&self.url)
            && !url_path.is_empty()
            && self.base.trim_matches('/') != url_path
        {
            diag.error_with_hint(
                Self::FIELD_BASE,
                format!(
                    "base '{}' does not match the URL path '/{}'",
                    self.base, url_path
                ),
                format!("set base = \"/{}\" or drop the path from {}", url_path, Self::FIELD_URL),
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(site: &SiteConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_default_site_is_valid() {
        let diag = validate(&SiteConfig::default());
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_invalid_url_rejected() {
        let site = SiteConfig {
            url: "not a url".into(),
            ..SiteConfig::default()
        };
        let diag = validate(&site);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let site = SiteConfig {
            url: "ftp://example.com".into(),
            ..SiteConfig::default()
        };
        let diag = validate(&site);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_base_must_start_with_slash() {
        let site = SiteConfig {
            base: "portfolio".into(),
            ..SiteConfig::default()
        };
        let diag = validate(&site);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_base_must_match_url_path() {
        let site = SiteConfig {
            url: "https://moyaser315.github.io/portfolio".into(),
            base: "/blog".into(),
            ..SiteConfig::default()
        };
        let diag = validate(&site);
        assert!(diag.has_errors());

        let site = SiteConfig {
            url: "https://moyaser315.github.io/portfolio".into(),
            base: "/portfolio".into(),
            ..SiteConfig::default()
        };
        let diag = validate(&site);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_output_serializes_lowercase() {
        let json = serde_json::to_string(&OutputMode::Static).unwrap();
        assert_eq!(json, "\"static\"");
    }
}
