//! Giscus comment widget configuration.
//!
//! Assembled entirely from `GISCUS_*` environment variables. String fields
//! pass through verbatim (absence yields `None`, never an error); boolean
//! fields require the exact literal `"true"`. The `mapping` value is parsed
//! into a closed enum instead of being forwarded unchecked; an unrecognized
//! value is kept aside and reported by the validation pass.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::env::EnvSnapshot;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// GiscusMapping
// ============================================================================

/// How giscus maps a page to its discussion thread.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GiscusMapping {
    /// Discussion title contains the page pathname.
    Pathname,
    /// Discussion title contains the page URL.
    Url,
    /// Discussion title contains the page `<title>`.
    Title,
    /// Discussion title contains the `og:title` meta tag value.
    #[serde(rename = "og:title")]
    OgTitle,
    /// Discussion matched by exact title.
    Specific,
    /// Discussion matched by number.
    Number,
}

impl GiscusMapping {
    /// All accepted raw values, for error hints.
    pub const ACCEPTED: &'static str = "pathname, url, title, og:title, specific, number";
}

impl FromStr for GiscusMapping {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pathname" => Ok(Self::Pathname),
            "url" => Ok(Self::Url),
            "title" => Ok(Self::Title),
            "og:title" => Ok(Self::OgTitle),
            "specific" => Ok(Self::Specific),
            "number" => Ok(Self::Number),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GiscusMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pathname => "pathname",
            Self::Url => "url",
            Self::Title => "title",
            Self::OgTitle => "og:title",
            Self::Specific => "specific",
            Self::Number => "number",
        };
        f.write_str(s)
    }
}

// ============================================================================
// GiscusConfig
// ============================================================================

/// Comment widget settings forwarded to the spectre theme.
///
/// Serialized field names follow the giscus client attribute names.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GiscusConfig {
    /// GitHub repository hosting the discussions ("owner/repo").
    pub repository: Option<String>,

    /// Repository node id.
    pub repository_id: Option<String>,

    /// Discussion category name.
    pub category: Option<String>,

    /// Discussion category node id.
    pub category_id: Option<String>,

    /// Page-to-discussion mapping strategy.
    pub mapping: Option<GiscusMapping>,

    /// Require the mapping to match strictly.
    pub strict: bool,

    /// Enable reactions on the main discussion post.
    pub reactions_enabled: bool,

    /// Emit discussion metadata to the parent page.
    pub emit_metadata: bool,

    /// Widget language code.
    pub lang: Option<String>,

    /// Raw mapping value that failed to parse, kept for the validation pass.
    #[serde(skip)]
    invalid_mapping: Option<String>,
}

/// Environment variable names consumed by `from_env`.
mod vars {
    pub const REPO: &str = "GISCUS_REPO";
    pub const REPO_ID: &str = "GISCUS_REPO_ID";
    pub const CATEGORY: &str = "GISCUS_CATEGORY";
    pub const CATEGORY_ID: &str = "GISCUS_CATEGORY_ID";
    pub const MAPPING: &str = "GISCUS_MAPPING";
    pub const STRICT: &str = "GISCUS_STRICT";
    pub const REACTIONS_ENABLED: &str = "GISCUS_REACTIONS_ENABLED";
    pub const EMIT_METADATA: &str = "GISCUS_EMIT_METADATA";
    pub const LANG: &str = "GISCUS_LANG";
}

impl GiscusConfig {
    pub const FIELD_MAPPING: FieldPath = FieldPath::new("spectre.giscus.mapping");
    pub const FIELD_REPOSITORY: FieldPath = FieldPath::new("spectre.giscus.repository");
    pub const FIELD_CATEGORY: FieldPath = FieldPath::new("spectre.giscus.category");

    /// Assemble from an environment snapshot. Never fails: missing keys
    /// degrade to `None` or `false`.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        let (mapping, invalid_mapping) = match env.get(vars::MAPPING) {
            None => (None, None),
            Some(raw) => match raw.parse::<GiscusMapping>() {
                Ok(mapping) => (Some(mapping), None),
                Err(()) => (None, Some(raw.to_string())),
            },
        };

        Self {
            repository: env.get_owned(vars::REPO),
            repository_id: env.get_owned(vars::REPO_ID),
            category: env.get_owned(vars::CATEGORY),
            category_id: env.get_owned(vars::CATEGORY_ID),
            mapping,
            strict: env.flag(vars::STRICT),
            reactions_enabled: env.flag(vars::REACTIONS_ENABLED),
            emit_metadata: env.flag(vars::EMIT_METADATA),
            lang: env.get_owned(vars::LANG),
            invalid_mapping,
        }
    }

    /// Whether the widget has enough configuration to render at all.
    pub fn enabled(&self) -> bool {
        self.repository.is_some() && self.repository_id.is_some()
    }

    /// Validate giscus configuration.
    ///
    /// # Checks
    /// - an unrecognized `GISCUS_MAPPING` value is an error
    /// - a repository or category without its matching id is a hint
    ///   (the widget is simply disabled downstream)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(raw) = &self.invalid_mapping {
            diag.error_with_hint(
                Self::FIELD_MAPPING,
                format!("unrecognized {} value '{}'", vars::MAPPING, raw),
                format!("use one of: {}", GiscusMapping::ACCEPTED),
            );
        }

        if self.repository.is_some() != self.repository_id.is_some() {
            diag.hint(
                Self::FIELD_REPOSITORY,
                format!(
                    "set both {} and {} to enable comments",
                    vars::REPO,
                    vars::REPO_ID
                ),
            );
        }

        if self.category.is_some() != self.category_id.is_some() {
            diag.hint(
                Self::FIELD_CATEGORY,
                format!(
                    "set both {} and {} to pin discussions to a category",
                    vars::CATEGORY,
                    vars::CATEGORY_ID
                ),
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
