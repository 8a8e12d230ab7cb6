// src/main.rs
// =============================================================================
// Entry point of the sitemap-forge CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Load the manifest and build a Sitemap from it
// 3. Feed every submap from its own producer task
// 4. Render and print what was written
// 5. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands};
use futures::future::try_join_all;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sitemap_forge::manifest;
use sitemap_forge::{RenderReport, Sitemap, UrlEntry};

const DEFAULT_PATH_SEGMENT: &str = "sitemaps";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // --verbose forces INFO, otherwise RUST_LOG decides (default WARN)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Render { manifest, host, path_segment, out_dir, json } => {
            handle_render(manifest, host, path_segment, out_dir, json).await
        }
    }
}

// Handles the 'render' subcommand
async fn handle_render(
    manifest_path: PathBuf,
    host: Option<String>,
    path_segment: Option<String>,
    out_dir: PathBuf,
    json: bool,
) -> Result<i32> {
    let manifest = manifest::load(&manifest_path)?;
    info!(
        path = %manifest_path.display(),
        submaps = manifest.submaps.len(),
        urls = manifest.total_urls(),
        "loaded manifest"
    );

    let host = host
        .or(manifest.host)
        .ok_or_else(|| anyhow!("No host given: pass --host or set \"host\" in the manifest"))?;
    let host = cli::normalize_host(&host)?;
    let path_segment = path_segment
        .or(manifest.sitemap_path)
        .unwrap_or_else(|| DEFAULT_PATH_SEGMENT.to_string());

    let sitemap = Sitemap::new(host, path_segment).with_output_dir(out_dir);
    accumulate(&sitemap, manifest.submaps).await?;

    let report = sitemap.render()?;
    print_report(&report, json)?;

    Ok(0)
}

// Creates one submap per partition (ordinals follow manifest order), then
// fills them all concurrently, one producer per submap.
//
// Returns once every producer has finished, so rendering never races an add.
async fn accumulate(sitemap: &Sitemap, partitions: Vec<Vec<UrlEntry>>) -> Result<()> {
    // collect() first: every add_map() runs here, in order, before any task starts
    let producers: Vec<_> = partitions
        .into_iter()
        .map(|urls| (sitemap.add_map(), urls))
        .collect();

    let tasks = producers.into_iter().map(|(submap, urls)| {
        tokio::task::spawn_blocking(move || {
            for url in urls {
                submap.add(url);
            }
        })
    });

    try_join_all(tasks).await?;
    Ok(())
}

fn print_report(report: &RenderReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &RenderReport) {
    let Some(index) = &report.index else {
        println!("Nothing to render: the manifest has no submaps");
        return;
    };

    println!("{:<60} {:>8}", "FILE", "URLS");
    println!("{}", "=".repeat(69));

    for submap in &report.submaps {
        println!("{:<60} {:>8}", submap.path.display(), submap.urls);
    }
    println!("{:<60} {:>8}", index.display(), "-");

    println!();
    println!("Summary:");
    println!("   Submaps written: {}", report.submaps.len());
    println!("   URLs: {}", report.total_urls());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn partition(prefix: &str, n: usize) -> Vec<UrlEntry> {
        (0..n)
            .map(|i| UrlEntry::new(format!("{}-{}", prefix, i), "weekly", "0.5"))
            .collect()
    }

    #[tokio::test]
    async fn test_accumulate_keeps_manifest_order() {
        let tmp = TempDir::new().unwrap();
        let sitemap = Sitemap::new("https://example.com", "sitemaps").with_output_dir(tmp.path());
        let partitions = vec![partition("a", 50), Vec::new(), partition("c", 50)];

        accumulate(&sitemap, partitions).await.unwrap();
        assert_eq!(sitemap.len(), 3);

        let report = sitemap.render().unwrap();
        let ordinals: Vec<_> = report.submaps.iter().map(|s| s.ordinal).collect();
        assert_eq!(ordinals, vec![1, 3]);

        let xml = fs::read_to_string(tmp.path().join("sitemap-3.xml")).unwrap();
        let positions: Vec<_> = (0..50)
            .map(|i| xml.find(&format!("<loc>https://example.com/c-{}</loc>", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_handle_render_writes_files() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("site.json");
        let out_dir = tmp.path().join("maps");
        fs::write(
            &manifest_path,
            r#"{
                "host": "https://example.com/",
                "submaps": [
                    [],
                    [{"loc": "jujutsu-kaizen", "changefreq": "weekly", "priority": "0.8"}]
                ]
            }"#,
        )
        .unwrap();

        let code = handle_render(manifest_path, None, None, out_dir.clone(), true).await.unwrap();

        assert_eq!(code, 0);
        assert!(!out_dir.join("sitemap-1.xml").exists());

        let sub = fs::read_to_string(out_dir.join("sitemap-2.xml")).unwrap();
        assert!(sub.contains("<loc>https://example.com/jujutsu-kaizen</loc>"));

        let index = fs::read_to_string(out_dir.join("sitemap.xml")).unwrap();
        assert!(index.contains("<loc>https://example.com/sitemaps/sitemap-2.xml</loc>"));
    }

    #[tokio::test]
    async fn test_handle_render_requires_host() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join("site.json");
        fs::write(&manifest_path, r#"{"submaps": [[{"loc": "a"}]]}"#).unwrap();

        let err = handle_render(manifest_path, None, None, tmp.path().join("maps"), false)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("No host given"));
        assert!(!tmp.path().join("maps").exists());
    }
}
