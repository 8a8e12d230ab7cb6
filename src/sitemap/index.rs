// src/sitemap/index.rs
// =============================================================================
// The sitemap index: owns every submap and drives the final render.
//
// Render walks the submaps in creation order:
// 1. Each non-empty submap is written to sitemap-N.xml
// 2. A <sitemap> record pointing at it is added to the index document
// 3. Finally the index itself is written to sitemap.xml
//
// Empty submaps are skipped entirely, so file numbering may have gaps
// (sitemap-2.xml without sitemap-1.xml is expected).
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::output;
use super::submap::{self, Partitions, Submap};
use super::template;

/// File name of the top-level index document.
pub const INDEX_FILENAME: &str = "sitemap.xml";

/// A sitemap index and all of its submaps.
///
/// `host` and `sitemap_path` only shape the public URLs written into the
/// documents. Where the files land locally is `output_dir` (default `maps`).
#[derive(Debug)]
pub struct Sitemap {
    host: String,
    sitemap_path: String,
    output_dir: PathBuf,
    partitions: Partitions,
}

/// One submap file written by [`Sitemap::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSubmap {
    pub ordinal: usize,
    pub path: PathBuf,
    pub urls: usize,
}

/// What a successful [`Sitemap::render`] wrote.
///
/// Both fields are empty when there was nothing to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    /// Submap files, in creation order
    pub submaps: Vec<RenderedSubmap>,
    /// The sitemap.xml index file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<PathBuf>,
}

impl RenderReport {
    pub fn total_urls(&self) -> usize {
        self.submaps.iter().map(|s| s.urls).sum()
    }
}

impl Sitemap {
    /// `host` is the base URL without a trailing slash
    /// (`https://example.com`); `sitemap_path` is the directory name used in
    /// the public URL of each submap (`sitemaps`). Both are stored verbatim.
    pub fn new(host: impl Into<String>, sitemap_path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            sitemap_path: sitemap_path.into(),
            output_dir: PathBuf::from(output::DEFAULT_OUTPUT_DIR),
            partitions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Saves documents under `dir` instead of `maps`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn sitemap_path(&self) -> &str {
        &self.sitemap_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Number of submaps created so far, empty ones included.
    pub fn len(&self) -> usize {
        submap::lock(&self.partitions).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a new, empty submap and returns a handle to it.
    ///
    /// Ordinals are handed out under the shared lock, so concurrent callers
    /// still get 1, 2, 3, ... in the order their calls were serialized.
    pub fn add_map(&self) -> Submap {
        let mut partitions = submap::lock(&self.partitions);
        partitions.push(Vec::new());
        let ordinal = partitions.len();
        debug!(ordinal, "created submap");

        Submap::new(Arc::clone(&self.partitions), ordinal)
    }

    /// Writes every non-empty submap and then the index document.
    ///
    /// All accumulation should be finished before calling this. The shared
    /// lock is only held while the partitions are copied; entries added
    /// after that are left for the next render.
    /// The first I/O error aborts the render. Files already written stay on
    /// disk.
    pub fn render(&self) -> Result<RenderReport> {
        let partitions = submap::lock(&self.partitions).clone();
        let mut report = RenderReport::default();

        if partitions.is_empty() {
            debug!("no submaps, nothing to render");
            return Ok(report);
        }

        let mut doc = String::from(template::INDEX_HEAD);

        for (position, urls) in partitions.iter().enumerate() {
            let ordinal = position + 1;

            let Some(path) = submap::render(&self.host, ordinal, urls, &self.output_dir)? else {
                continue;
            };

            let loc = format!("{}/{}/{}", self.host, self.sitemap_path, submap::filename(ordinal));
            template::push_sitemap_record(&mut doc, &loc, &output::formatted_now());

            report.submaps.push(RenderedSubmap {
                ordinal,
                path,
                urls: urls.len(),
            });
        }

        doc.push_str(template::INDEX_CLOSE);
        report.index = Some(output::write_document(&self.output_dir, INDEX_FILENAME, &doc)?);

        info!(
            submaps = report.submaps.len(),
            urls = report.total_urls(),
            dir = %self.output_dir.display(),
            "rendered sitemap"
        );
        Ok(report)
    }
}
