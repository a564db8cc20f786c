//! Build configuration assembly.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # url, base path, output mode
//! │   ├── integrations # integration list in pipeline order
//! │   ├── spectre    # theme bundle (identity, open graph)
//! │   └── giscus     # comment widget (env-derived)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # BuildConfiguration (this file)
//! ```
//!
//! The configuration is fully determined by the literals in `section/` and
//! the environment snapshot taken at process start. It is assembled exactly
//! once per build invocation and never recomputed.

pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    ExpressiveCodeConfig, GiscusConfig, GiscusMapping, IntegrationsConfig, MdxConfig,
    OpenGraphConfig, OutputMode, SectionMeta, SiteConfig, SiteIdentity, SitemapConfig,
    SpectreConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::env::EnvSnapshot;
use serde::Serialize;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration handed to the build pipeline at startup.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct BuildConfiguration {
    /// Site url, base path, output mode.
    pub site: SiteConfig,

    /// Integrations in pipeline order.
    pub integrations: IntegrationsConfig,
}

impl BuildConfiguration {
    /// Assemble the configuration from an environment snapshot.
    ///
    /// Pure: no I/O, no clock, no hidden state. The same snapshot always
    /// yields a structurally identical configuration. Missing environment
    /// keys degrade to `None` or `false`; this operation raises no errors.
    pub fn assemble(env: &EnvSnapshot) -> Self {
        Self {
            site: SiteConfig::default(),
            integrations: IntegrationsConfig::from_env(env),
        }
    }

    /// Validate the assembled configuration.
    ///
    /// Collects all validation errors and returns them at once. Hints
    /// (incomplete optional sections) are printed but never fail the check.
    pub fn validate(&self) -> Result<(), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.integrations.spectre.validate(&mut diag);

        diag.print_hints();
        diag.into_result()
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_environment_keeps_literals() {
        let config = BuildConfiguration::assemble(&EnvSnapshot::default());

        assert_eq!(config.site.url, "https://moyaser315.github.io");
        assert_eq!(config.site.base, "/portfolio");
        assert_eq!(config.site.output, OutputMode::Static);

        let identity = &config.integrations.spectre.identity;
        assert_eq!(identity.name, "Mohamed Yaser");
        assert_eq!(identity.twitter_handle, "@mohamed__315");
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let env = EnvSnapshot::from_pairs([
            ("GISCUS_REPO", "user/repo"),
            ("GISCUS_STRICT", "true"),
            ("GISCUS_MAPPING", "title"),
        ]);

        let first = BuildConfiguration::assemble(&env);
        let second = BuildConfiguration::assemble(&env);
        assert_eq!(first, second);
    }

    #[test]
    fn test_env_values_flow_into_giscus() {
        let env = EnvSnapshot::from_pairs([
            ("GISCUS_REPO", "user/repo"),
            ("GISCUS_STRICT", "true"),
            ("GISCUS_REACTIONS_ENABLED", "yes"),
        ]);
        let config = BuildConfiguration::assemble(&env);

        let giscus = &config.integrations.spectre.giscus;
        assert_eq!(giscus.repository.as_deref(), Some("user/repo"));
        assert!(giscus.strict);
        assert!(!giscus.reactions_enabled);
        assert!(!giscus.emit_metadata);
    }

    #[test]
    fn test_default_configuration_validates() {
        let config = BuildConfiguration::assemble(&EnvSnapshot::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_mapping_fails_validation() {
        let env = EnvSnapshot::from_pairs([("GISCUS_MAPPING", "nonsense")]);
        let config = BuildConfiguration::assemble(&env);

        let diag = config.validate().unwrap_err();
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_open_graph_sections_fixed_regardless_of_env() {
        let env = EnvSnapshot::from_pairs([("GISCUS_REPO", "user/repo")]);
        let config = BuildConfiguration::assemble(&env);

        let keys: Vec<&str> = config
            .integrations
            .spectre
            .open_graph
            .sections()
            .iter()
            .map(|(key, _)| *key)
            .collect();
        assert_eq!(keys, ["home", "blog", "projects"]);
    }

    #[test]
    fn test_json_shape_matches_pipeline_contract() {
        let config = BuildConfiguration::assemble(&EnvSnapshot::default());
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["site"]["output"], "static");
        assert_eq!(json["integrations"]["spectre"]["name"], "Mohamed Yaser");
        assert_eq!(
            json["integrations"]["spectre"]["openGraph"]["blog"]["title"],
            "Blog"
        );
        assert!(json["integrations"]["spectre"]["giscus"]["repository"].is_null());
    }
}
