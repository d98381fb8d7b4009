//! Static-site bundle assembly for gridbio.
//!
//! Takes an immutable [`SiteData`] snapshot, renders the export-mode
//! document through `gridbio_core`, decodes inline images into real files,
//! and packs everything with the chosen deployment scaffold into a zip
//! archive. Entries are appended in a fixed order and carry the zip format's
//! fixed epoch timestamp, so exporting the same model twice yields
//! byte-identical archives.

mod assets;
mod error;
mod scaffold;
mod target;

use std::io::{Cursor, Write as _};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use gridbio_core::model::SiteData;
use gridbio_core::render::{render_document, stylesheet, RenderContext};
use gridbio_core::script::runtime_script;

pub use assets::{collect_assets, decode_assets, resolved_asset_map, AssetRef, DecodedAsset};
pub use error::{BundleError, Result};
pub use scaffold::{deploy_doc, scaffold_files, ScaffoldFile};
pub use target::DeploymentTarget;

/// Export parameters beyond the model itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Overrides the analytics site identifier baked into the runtime
    /// script, letting one stored model be published under several site ids.
    pub site_id: Option<String>,
    pub target: DeploymentTarget,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            site_id: None,
            target: DeploymentTarget::Vercel,
        }
    }
}

impl ExportOptions {
    /// Options for the given target.
    pub fn for_target(target: DeploymentTarget) -> Self {
        Self {
            site_id: None,
            target,
        }
    }

    /// Sets the analytics site identifier override.
    pub fn with_site_id(mut self, site_id: impl Into<String>) -> Self {
        self.site_id = Some(site_id.into());
        self
    }
}

/// Renders and packages a site into a distributable zip archive.
///
/// The export never fails on bad content: unsafe strings degrade inside the
/// renderer and undecodable assets are skipped. Only archive-level failures
/// (serialization, zip I/O) surface as [`BundleError`], and those produce no
/// partial archive.
pub async fn export_bundle(site: &SiteData, options: &ExportOptions) -> Result<Vec<u8>> {
    let site = effective_site(site, options);

    let assets = collect_assets(&site);
    let decoded = decode_assets(assets).await;
    let ctx = RenderContext::export(resolved_asset_map(&decoded));

    let html = render_document(&site, &ctx);
    let css = stylesheet();
    let js = runtime_script(&site);
    let snapshot = serde_json::to_string_pretty(&site)?;
    let deploy = deploy_doc(options.target, &site.profile.name);
    let scaffolds = scaffold_files(options.target);

    tracing::debug!(
        deploy_target = %options.target,
        blocks = site.blocks.len(),
        assets = decoded.len(),
        "Assembling bundle"
    );

    let cursor = Cursor::new(Vec::new());
    let mut writer = ZipWriter::new(cursor);
    let file_options =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    // Fixed entry order: styles, script, document, assets, snapshot, docs,
    // scaffold. Determinism here is what makes repeat exports comparable.
    write_entry(&mut writer, file_options, "styles.css", css.as_bytes())?;
    write_entry(&mut writer, file_options, "app.js", js.as_bytes())?;
    write_entry(&mut writer, file_options, "index.html", html.as_bytes())?;
    for asset in &decoded {
        write_entry(&mut writer, file_options, &asset.path, &asset.bytes)?;
    }
    write_entry(&mut writer, file_options, "data.json", snapshot.as_bytes())?;
    write_entry(&mut writer, file_options, "DEPLOY.md", deploy.as_bytes())?;
    for scaffold in &scaffolds {
        write_entry(
            &mut writer,
            file_options,
            scaffold.path,
            scaffold.contents.as_bytes(),
        )?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Applies export options to the snapshot. The input model is never
/// mutated; overrides apply to a clone.
fn effective_site(site: &SiteData, options: &ExportOptions) -> SiteData {
    let mut site = site.clone();
    if let (Some(site_id), Some(analytics)) =
        (options.site_id.as_deref(), site.profile.analytics.as_mut())
    {
        analytics.site_id = site_id.to_string();
    }
    site
}

fn write_entry(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    path: &str,
    bytes: &[u8],
) -> Result<()> {
    writer
        .start_file(path, options)
        .map_err(|source| BundleError::Entry {
            path: path.to_string(),
            source,
        })?;
    writer.write_all(bytes)?;
    Ok(())
}
