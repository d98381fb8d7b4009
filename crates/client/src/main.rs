//! gridbio CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridbio_bundle::{export_bundle, ExportOptions};
use gridbio_client::cli::{Cli, Commands};
use gridbio_core::model::{demo_site, validate_site, SiteData};
use gridbio_core::render::render_preview;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridbio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Preview { input, output } => {
            let site = load_site(&input)?;
            let html = render_preview(&site);
            std::fs::write(&output, html)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            if !cli.quiet {
                println!("Wrote preview to {}", output.display());
            }
        }
        Commands::Export {
            input,
            output,
            target,
            site_id,
        } => {
            let site = load_site(&input)?;
            let mut options = ExportOptions::for_target(target);
            if let Some(site_id) = site_id {
                options = options.with_site_id(site_id);
            }
            let bytes = export_bundle(&site, &options)
                .await
                .context("Failed to assemble bundle")?;
            std::fs::write(&output, bytes)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            if !cli.quiet {
                println!("Exported {target} bundle to {}", output.display());
            }
        }
        Commands::Check { input } => {
            let site = load_site(&input)?;
            match validate_site(&site) {
                Ok(()) => {
                    if !cli.quiet {
                        println!(
                            "{}: ok ({} blocks)",
                            input.display(),
                            site.blocks.len()
                        );
                    }
                }
                Err(err) => {
                    anyhow::bail!("{}: {err}", input.display());
                }
            }
        }
        Commands::Demo { output } => {
            let site = demo_site();
            let json = serde_json::to_string_pretty(&site)?;
            std::fs::write(&output, json)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            if !cli.quiet {
                println!("Wrote demo site to {}", output.display());
            }
        }
    }

    Ok(())
}

/// Reads and deserializes a site model file.
fn load_site(path: &Path) -> Result<SiteData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let site: SiteData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(site)
}
