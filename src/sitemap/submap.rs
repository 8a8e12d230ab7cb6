// src/sitemap/submap.rs
// =============================================================================
// A submap is one partition of URL entries, rendered to its own
// sitemap-N.xml file.
//
// How the pieces fit together:
// - The Sitemap owns every partition inside ONE Mutex<Vec<Vec<UrlEntry>>>
// - A Submap is just a handle: that same Arc'd mutex + its 1-based ordinal
// - Adding to any submap and adding a new submap both take the same lock,
//   so producers on different threads are serialized across the whole index
//
// Rust concepts:
// - Arc<Mutex<T>>: shared ownership of data guarded by a lock
// - Handles: cheap Clone values that point at data owned elsewhere
// - serde defaults: optional fields in the JSON manifest
// =============================================================================

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::output;
use super::template;

/// Every partition of the index, in creation order. Position `i` holds the
/// entries of the submap with ordinal `i + 1`.
pub(crate) type Partitions = Arc<Mutex<Vec<Vec<UrlEntry>>>>;

// A producer that panicked mid-push leaves the Vecs valid, so a poisoned lock
// is still safe to use.
pub(crate) fn lock(partitions: &Mutex<Vec<Vec<UrlEntry>>>) -> MutexGuard<'_, Vec<Vec<UrlEntry>>> {
    partitions.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One `<url>` entry of a sitemap.
///
/// Values are opaque: they're written (escaped) as given, with no checks that
/// `priority` is in range or that `changefreq` is a protocol token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// Path fragment appended to the host, e.g. "jujutsu-kaizen"
    pub loc: String,
    #[serde(default = "default_changefreq")]
    pub changefreq: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_changefreq() -> String {
    "weekly".to_string()
}

fn default_priority() -> String {
    "0.5".to_string()
}

impl UrlEntry {
    pub fn new(
        loc: impl Into<String>,
        changefreq: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.into(),
            changefreq: changefreq.into(),
            priority: priority.into(),
        }
    }
}

/// Handle to one partition of a [`Sitemap`](super::Sitemap).
///
/// Created only by [`Sitemap::add_map`](super::Sitemap::add_map). Cloning
/// the handle does not copy the entries; both clones append to the same
/// partition.
#[derive(Debug, Clone)]
pub struct Submap {
    partitions: Partitions,
    ordinal: usize,
}

impl Submap {
    pub(crate) fn new(partitions: Partitions, ordinal: usize) -> Self {
        Self { partitions, ordinal }
    }

    /// Appends an entry and returns the handle again so calls can be chained:
    ///
    /// ```
    /// # use sitemap_forge::{Sitemap, UrlEntry};
    /// let sitemap = Sitemap::new("https://example.com", "sitemaps");
    /// sitemap
    ///     .add_map()
    ///     .add(UrlEntry::new("a", "weekly", "0.8"))
    ///     .add(UrlEntry::new("b", "daily", "0.5"));
    /// ```
    pub fn add(&self, url: UrlEntry) -> &Self {
        lock(&self.partitions)[self.ordinal - 1].push(url);
        self
    }

    /// 1-based creation number; also the N in `sitemap-N.xml`.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn filename(&self) -> String {
        filename(self.ordinal)
    }

    pub fn len(&self) -> usize {
        lock(&self.partitions)[self.ordinal - 1].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the entries added so far, in insertion order.
    pub fn urls(&self) -> Vec<UrlEntry> {
        lock(&self.partitions)[self.ordinal - 1].clone()
    }
}

pub(crate) fn filename(ordinal: usize) -> String {
    format!("sitemap-{}.xml", ordinal)
}

// Renders one partition into `dir/sitemap-{ordinal}.xml`.
//
// Called by the index while it already holds the partitions lock, which is
// why this takes the entries directly instead of going through a Submap.
// An empty partition writes nothing and returns Ok(None).
pub(crate) fn render(host: &str, ordinal: usize, urls: &[UrlEntry], dir: &Path) -> Result<Option<PathBuf>> {
    if urls.is_empty() {
        return Ok(None);
    }

    let mut doc = String::from(template::URLSET_HEAD);

    for url in urls {
        let loc = format!("{}/{}", host, url.loc);
        // Fresh per entry, not shared across the pass
        let lastmod = output::formatted_now();
        template::push_url_record(&mut doc, &loc, &lastmod, &url.changefreq, &url.priority);
    }

    doc.push_str(template::URLSET_CLOSE);

    let path = output::write_document(dir, &filename(ordinal), &doc)?;
    Ok(Some(path))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does add() take &self and not &mut self?
//    - The entries don't live in the Submap, they live behind the Mutex
//    - Locking gives us mutable access through a shared reference
//    - That is what lets several threads hold handles at the same time
//
// 2. What is unwrap_or_else(PoisonError::into_inner)?
//    - If a thread panics while holding a lock, the lock is "poisoned"
//    - into_inner() hands us the guard anyway
//
// 3. Why Option<PathBuf> from render()?
//    - None = nothing written (empty partition)
//    - Some(path) = the file we created
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn partitions(n: usize) -> Partitions {
        Arc::new(Mutex::new(vec![Vec::new(); n]))
    }

    #[test]
    fn test_add_is_chainable_and_ordered() {
        let parts = partitions(1);
        let submap = Submap::new(parts.clone(), 1);

        submap
            .add(UrlEntry::new("a", "weekly", "0.8"))
            .add(UrlEntry::new("b", "daily", "0.3"));

        let locs: Vec<_> = submap.urls().into_iter().map(|u| u.loc).collect();
        assert_eq!(locs, vec!["a", "b"]);
        assert_eq!(submap.len(), 2);
    }

    #[test]
    fn test_clones_share_entries() {
        let parts = partitions(2);
        let first = Submap::new(parts.clone(), 1);
        let second = Submap::new(parts.clone(), 2);
        let alias = second.clone();

        alias.add(UrlEntry::new("x", "weekly", "0.8"));

        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
        assert_eq!(second.filename(), "sitemap-2.xml");
    }

    #[test]
    fn test_manifest_defaults() {
        let url: UrlEntry = serde_json::from_str(r#"{"loc": "about"}"#).unwrap();
        assert_eq!(url, UrlEntry::new("about", "weekly", "0.5"));
    }

    #[test]
    fn test_render_empty_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("maps");

        let written = render("https://example.com", 1, &[], &dir).unwrap();

        assert!(written.is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn test_render_one_url_block_per_entry() {
        let tmp = TempDir::new().unwrap();
        let urls = vec![
            UrlEntry::new("first", "weekly", "0.8"),
            UrlEntry::new("second", "monthly", "0.1"),
        ];

        let path = render("https://example.com", 3, &urls, tmp.path()).unwrap().unwrap();
        let xml = fs::read_to_string(&path).unwrap();

        assert!(path.ends_with("sitemap-3.xml"));
        assert!(xml.starts_with(template::URLSET_HEAD));
        assert!(xml.ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 2);

        let first = xml.find("<loc>https://example.com/first</loc>").unwrap();
        let second = xml.find("<loc>https://example.com/second</loc>").unwrap();
        assert!(first < second);
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.1</priority>"));
    }
}
