//! Build integrations, in pipeline order.

use crate::config::section::SpectreConfig;
use crate::env::EnvSnapshot;
use serde::Serialize;

/// Syntax highlighting integration settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExpressiveCodeConfig {
    /// Highlighting themes, first entry is the default.
    pub themes: Vec<String>,
}

impl Default for ExpressiveCodeConfig {
    fn default() -> Self {
        Self {
            themes: vec!["spectre-dark".into()],
        }
    }
}

/// Integrations handed to the build pipeline.
///
/// Field order is pipeline order: code highlighting runs before content
/// transforms, the theme bundle always comes last.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct IntegrationsConfig {
    /// Syntax highlighting (expressive-code).
    pub expressive_code: ExpressiveCodeConfig,

    /// MDX content support.
    pub mdx: MdxConfig,

    /// Sitemap generation.
    pub sitemap: SitemapConfig,

    /// Spectre theme bundle (identity, open graph, comments).
    pub spectre: SpectreConfig,
}

/// MDX integration settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MdxConfig {
    pub enable: bool,
}

impl Default for MdxConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

/// Sitemap integration settings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SitemapConfig {
    pub enable: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}

impl IntegrationsConfig {
    /// Assemble the integration list from an environment snapshot.
    ///
    /// Only the spectre bundle reads the environment; the rest are literal.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            expressive_code: ExpressiveCodeConfig::default(),
            mdx: MdxConfig::default(),
            sitemap: SitemapConfig::default(),
            spectre: SpectreConfig::from_env(env),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
