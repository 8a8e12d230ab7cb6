// src/sitemap/mod.rs
// =============================================================================
// Sitemap generation per the sitemaps.org protocol.
//
// Submodules:
// - index: the Sitemap (index) that owns submaps and renders everything
// - submap: one partition of URL entries, written to sitemap-N.xml
// - template: fixed XML preambles and record layouts
// - output: timestamps and writing documents to disk
// =============================================================================

mod index;
mod output;
mod submap;
mod template;

pub use index::{RenderReport, RenderedSubmap, Sitemap, INDEX_FILENAME};
pub use output::DEFAULT_OUTPUT_DIR;
pub use submap::{Submap, UrlEntry};
