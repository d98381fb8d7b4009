//! CLI command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gridbio_bundle::DeploymentTarget;

/// CLI for previewing and exporting gridbio sites.
#[derive(Debug, Parser)]
#[command(name = "gridbio")]
#[command(about = "Render and export bento-grid sites", long_about = None)]
pub struct Cli {
    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a site file into a standalone preview document.
    Preview {
        /// Site model file (data.json format).
        input: PathBuf,

        /// Output path for the preview document.
        #[arg(short, long, default_value = "preview.html")]
        output: PathBuf,
    },
    /// Export a site file into a deployable bundle archive.
    Export {
        /// Site model file (data.json format).
        input: PathBuf,

        /// Output path for the bundle archive.
        #[arg(short, long, default_value = "site.zip")]
        output: PathBuf,

        /// Deployment target the scaffold files are tailored for.
        #[arg(long, env = "GRIDBIO_TARGET", default_value = "vercel")]
        target: DeploymentTarget,

        /// Analytics site identifier override.
        #[arg(long)]
        site_id: Option<String>,
    },
    /// Validate a site file and report the first problem found.
    Check {
        /// Site model file (data.json format).
        input: PathBuf,
    },
    /// Write the seeded demo site model.
    Demo {
        /// Output path for the demo model.
        #[arg(short, long, default_value = "demo.json")]
        output: PathBuf,
    },
}
