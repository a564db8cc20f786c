//! Global config with single-shot initialization.
//!
//! Uses `arc-swap` for lock-free reads. The configuration is assembled once
//! at process start and never recomputed during the build.

use crate::config::BuildConfiguration;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<BuildConfiguration>> =
    LazyLock::new(|| ArcSwap::from_pointee(BuildConfiguration::default()));

#[inline]
pub fn cfg() -> Arc<BuildConfiguration> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: BuildConfiguration) -> Arc<BuildConfiguration> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_stores_globally() {
        let config = BuildConfiguration::default();
        let arc = init_config(config);
        assert_eq!(*cfg(), *arc);
    }
}
