//! Configuration section definitions.
//!
//! | Module         | Purpose                                    |
//! |----------------|--------------------------------------------|
//! | `site`         | Site url, base path, output mode           |
//! | `integrations` | Integration list in pipeline order         |
//! | `spectre`      | Theme bundle (identity, open graph)        |
//! | `giscus`       | Comment widget (env-derived)               |

mod giscus;
mod integrations;
mod site;
mod spectre;

// Re-export section configs
pub use giscus::{GiscusConfig, GiscusMapping};
pub use integrations::{ExpressiveCodeConfig, IntegrationsConfig, MdxConfig, SitemapConfig};
pub use site::{OutputMode, SiteConfig};
pub use spectre::{OpenGraphConfig, SectionMeta, SiteIdentity, SpectreConfig};
