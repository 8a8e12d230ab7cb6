// src/sitemap/template.rs
// =============================================================================
// The fixed pieces of the two XML documents we produce:
// - sitemap.xml      (a <sitemapindex> listing every submap file)
// - sitemap-N.xml    (a <urlset> with one <url> per entry)
//
// Caller-supplied values (loc, changefreq, priority) are XML-escaped, so a
// location such as "search?q=a&b" still yields a well-formed document.
// =============================================================================

use quick_xml::escape::escape;

pub const INDEX_HEAD: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?> "#,
    r#"<sitemapindex xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9 "#,
    r#"http://www.sitemaps.org/schemas/sitemap/0.9/siteindex.xsd" "#,
    r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
);

pub const INDEX_CLOSE: &str = "</sitemapindex>\n";

// The Google extension namespaces are declared but never populated.
pub const URLSET_HEAD: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?> "#,
    r#"<urlset xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9 "#,
    r#"http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd" "#,
    r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" "#,
    r#"xmlns:image="http://www.google.com/schemas/sitemap-image/1.1" "#,
    r#"xmlns:video="http://www.google.com/schemas/sitemap-video/1.1" "#,
    r#"xmlns:geo="http://www.google.com/geo/schemas/sitemap/1.0" "#,
    r#"xmlns:news="http://www.google.com/schemas/sitemap-news/0.9" "#,
    r#"xmlns:mobile="http://www.google.com/schemas/sitemap-mobile/1.0" "#,
    r#"xmlns:pagemap="http://www.google.com/schemas/sitemap-pagemap/1.0" "#,
    r#"xmlns:xhtml="http://www.w3.org/1999/xhtml">"#,
);

pub const URLSET_CLOSE: &str = "</urlset>";

/// Appends one `<sitemap>` record to an index document.
///
/// `lastmod` comes from [`formatted_now`](super::output::formatted_now) and
/// is written as is; `loc` is escaped.
pub fn push_sitemap_record(doc: &mut String, loc: &str, lastmod: &str) {
    doc.push_str(&format!(
        "<sitemap>\n  <loc>{}</loc>\n  <lastmod>{}</lastmod>\n</sitemap>\n",
        escape(loc),
        lastmod,
    ));
}

/// Appends one `<url>` block to a urlset document. Everything except
/// `lastmod` is escaped.
pub fn push_url_record(doc: &mut String, loc: &str, lastmod: &str, changefreq: &str, priority: &str) {
    doc.push_str(&format!(
        "\n<url>\n  <loc>{}</loc>\n  <lastmod>{}</lastmod>\n  <changefreq>{}</changefreq>\n  <priority>{}</priority>\n</url>\n",
        escape(loc),
        lastmod,
        escape(changefreq),
        escape(priority),
    ));
}
