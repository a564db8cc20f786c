//! Environment snapshot loading.
//!
//! Captures the process environment together with mode-specific `.env`
//! files into a single immutable snapshot, taken once at process start.
//!
//! # File discovery
//!
//! Files are read relative to the given directory, in ascending precedence:
//!
//! ```text
//! .env                # loaded in all modes
//! .env.local          # loaded in all modes, ignored by git
//! .env.<mode>         # only loaded in the named mode
//! .env.<mode>.local   # only loaded in the named mode, ignored by git
//! ```
//!
//! Values already present in the process environment always win over file
//! values. Missing files are skipped silently; a key that is nowhere defined
//! is simply absent from the snapshot.

use rustc_hash::FxHashMap;
use std::path::Path;

/// Immutable key/value snapshot of the environment.
///
/// Files are parsed with `dotenvy`'s iterator API, so loading never mutates
/// the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: FxHashMap<String, String>,
}

impl EnvSnapshot {
    /// Load a snapshot for the given build mode.
    ///
    /// `prefix` filters the resulting keys; the empty prefix matches all.
    pub fn load(mode: &str, dir: &Path, prefix: &str) -> Self {
        let mut vars = FxHashMap::default();

        // Ascending precedence: later files override earlier ones.
        let files = [
            ".env".to_string(),
            ".env.local".to_string(),
            format!(".env.{mode}"),
            format!(".env.{mode}.local"),
        ];
        for file in &files {
            merge_env_file(&mut vars, &dir.join(file));
        }

        // The real process environment always wins over file values.
        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        if !prefix.is_empty() {
            vars.retain(|key, _| key.starts_with(prefix));
        }

        Self { vars }
    }

    /// Build a snapshot directly from key/value pairs (no filesystem access).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable. Absent keys yield `None`, never an error.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable and take ownership of its value.
    #[inline]
    pub fn get_owned(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    /// Coerce a variable to a boolean.
    ///
    /// `true` iff the value is exactly the literal `"true"`. Any other
    /// value, including absence, `"True"`, `"1"` and `"yes"`, is `false`.
    #[inline]
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Merge one dotenv file into the accumulated map, if it exists.
///
/// Unparseable entries are skipped rather than aborting the snapshot.
fn merge_env_file(vars: &mut FxHashMap<String, String>, path: &Path) {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return;
    };
    for item in iter {
        if let Ok((key, value)) = item {
            vars.insert(key, value);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
