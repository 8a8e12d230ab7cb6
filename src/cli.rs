// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
//   sitemap-forge render site.json --host https://example.com --out-dir maps
//
// The manifest supplies the URL entries; the flags override whatever host and
// path segment it carries.
// =============================================================================

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-forge",
    version = "0.1.0",
    about = "Generate sitemaps.org XML sitemaps and a sitemap index",
    long_about = "sitemap-forge reads URL entries from a JSON manifest, writes one sitemap-N.xml \
                  per submap and a sitemap.xml index that references them."
)]
pub struct Cli {
    /// Log progress (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the sitemap files described by a manifest
    ///
    /// Example: sitemap-forge render site.json --host https://example.com
    Render {
        /// Path to the JSON manifest
        manifest: PathBuf,

        /// Base URL of the site (e.g., https://example.com)
        #[arg(long)]
        host: Option<String>,

        /// Directory name the submap files are served from, as it appears
        /// in the public URL (default: sitemaps)
        #[arg(long)]
        path_segment: Option<String>,

        /// Where the files are written locally
        #[arg(long, default_value = "maps")]
        out_dir: PathBuf,

        /// Output the render report in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Checks that `raw` is an absolute http(s) URL and drops one trailing `/`,
/// since every location is built as `{host}/{loc}`.
pub fn normalize_host(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| anyhow!("Invalid host '{}': {}", raw, e))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!("Invalid host '{}': expected an http or https URL", raw));
    }

    Ok(raw.strip_suffix('/').unwrap_or(raw).to_string())
}
