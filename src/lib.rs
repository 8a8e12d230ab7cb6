// src/lib.rs
// =============================================================================
// sitemap-forge: builds an XML sitemap index plus one sitemap file per
// partition ("submap") of URL entries.
//
//     let sitemap = Sitemap::new("https://example.com", "sitemaps");
//     sitemap.add_map().add(UrlEntry::new("jujutsu-kaizen", "weekly", "0.8"));
//     sitemap.render()?;   // maps/sitemap-1.xml + maps/sitemap.xml
//
// The `manifest` module is what the command-line tool reads its input from.
// =============================================================================

pub mod manifest;
pub mod sitemap;

pub use sitemap::{RenderReport, RenderedSubmap, Sitemap, Submap, UrlEntry};
