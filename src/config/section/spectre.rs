//! Spectre theme configuration (identity, open graph, comments).

use crate::config::section::GiscusConfig;
use crate::env::EnvSnapshot;
use serde::Serialize;

// ============================================================================
// SiteIdentity
// ============================================================================

/// Who the site belongs to. Defined once, never mutated.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdentity {
    /// Display name.
    pub name: String,

    /// Social handle shown in cards and footer.
    pub twitter_handle: String,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self {
            name: "Mohamed Yaser".into(),
            twitter_handle: "@mohamed__315".into(),
        }
    }
}

// ============================================================================
// Open Graph sections
// ============================================================================

/// Open Graph title/description pair for one site section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionMeta {
    pub title: String,
    pub description: String,
}

impl SectionMeta {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Per-section Open Graph metadata.
///
/// The section set is closed: exactly home, blog and projects, as named
/// struct fields so a typo cannot introduce a new section. Iteration order
/// is fixed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpenGraphConfig {
    pub home: SectionMeta,
    pub blog: SectionMeta,
    pub projects: SectionMeta,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            home: SectionMeta::new("Mohamed Yaser", "A personal portfolio website."),
            blog: SectionMeta::new("Blog", "News and guides for Mohamed Yaser."),
            projects: SectionMeta::new("Projects", "Showcasing the work of Mohamed Yaser."),
        }
    }
}

impl OpenGraphConfig {
    /// All sections in display order.
    pub fn sections(&self) -> [(&'static str, &SectionMeta); 3] {
        [
            ("home", &self.home),
            ("blog", &self.blog),
            ("projects", &self.projects),
        ]
    }
}

// ============================================================================
// SpectreConfig
// ============================================================================

/// The spectre theme bundle: identity literals plus the env-derived
/// comment widget settings.
///
/// Serialized field names follow the theme's option names (camelCase).
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpectreConfig {
    #[serde(flatten)]
    pub identity: SiteIdentity,

    pub open_graph: OpenGraphConfig,

    pub giscus: GiscusConfig,
}

impl SpectreConfig {
    /// Assemble the theme bundle from an environment snapshot.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            identity: SiteIdentity::default(),
            open_graph: OpenGraphConfig::default(),
            giscus: GiscusConfig::from_env(env),
        }
    }

    pub fn validate(&self, diag: &mut crate::config::types::ConfigDiagnostics) {
        self.giscus.validate(diag);
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_literals() {
        let identity = SiteIdentity::default();
        assert_eq!(identity.name, "Mohamed Yaser");
        assert_eq!(identity.twitter_handle, "@mohamed__315");
    }

    #[test]
    fn test_section_set_is_closed() {
        let og = OpenGraphConfig::default();
        let keys: Vec<&str> = og.sections().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["home", "blog", "projects"]);
    }

    #[test]
    fn test_section_literals_survive_empty_env() {
        let spectre = SpectreConfig::from_env(&EnvSnapshot::default());
        assert_eq!(spectre.open_graph.home.title, "Mohamed Yaser");
        assert_eq!(
            spectre.open_graph.blog.description,
            "News and guides for Mohamed Yaser."
        );
        assert_eq!(spectre.open_graph.projects.title, "Projects");
    }

    #[test]
    fn test_json_field_names_match_theme_options() {
        let spectre = SpectreConfig::default();
        let json = serde_json::to_value(&spectre).unwrap();

        // Identity is flattened, all keys camelCase like the theme's options
        assert_eq!(json["name"], "Mohamed Yaser");
        assert_eq!(json["twitterHandle"], "@mohamed__315");
        assert_eq!(json["openGraph"]["home"]["title"], "Mohamed Yaser");
        assert!(json.get("twitter_handle").is_none());
        assert!(json.get("open_graph").is_none());
    }
}
