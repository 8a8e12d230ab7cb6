// src/manifest.rs
// =============================================================================
// The JSON input of the command-line tool.
//
// Example:
//   {
//     "host": "https://example.com",
//     "sitemap_path": "sitemaps",
//     "submaps": [
//       [{"loc": "jujutsu-kaizen", "changefreq": "weekly", "priority": "0.8"}],
//       [],
//       [{"loc": "about"}]
//     ]
//   }
//
// Each inner array becomes one submap, in order. An empty array still takes
// an ordinal, so the example above writes sitemap-1.xml and sitemap-3.xml.
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::sitemap::UrlEntry;

#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    /// Base URL; the --host flag wins when both are given
    #[serde(default)]
    pub host: Option<String>,
    /// Public directory name of the submap files; --path-segment wins
    #[serde(default)]
    pub sitemap_path: Option<String>,
    #[serde(default)]
    pub submaps: Vec<Vec<UrlEntry>>,
}

impl Manifest {
    pub fn parse(json: &str) -> Result<Self> {
        let manifest = serde_json::from_str(json)?;
        Ok(manifest)
    }

    pub fn total_urls(&self) -> usize {
        self.submaps.iter().map(Vec::len).sum()
    }
}

/// Reads and parses a manifest file.
pub fn load(path: &Path) -> Result<Manifest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;

    Manifest::parse(&json).with_context(|| format!("invalid manifest {}", path.display()))
}
