//! Inline-asset handling: find `data:image/*` URIs in the model, decode
//! them back to binary files, and hand the renderer a reference-to-path
//! map so the exported markup points at real files.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::task::JoinSet;

use gridbio_core::model::{BlockKind, SiteData};
use gridbio_core::sanitize::is_data_image_uri;

/// An inline-encoded image found in the model, with its assigned bundle
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Relative path inside the bundle, e.g. `assets/avatar.png`.
    pub path: String,
    /// The original `data:` URI as stored in the model.
    pub reference: String,
}

/// A successfully decoded asset ready for archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAsset {
    pub path: String,
    pub reference: String,
    pub bytes: Vec<u8>,
}

/// Scans the model for inline-encoded images, in stable model order:
/// avatar first, then blocks. Paths are derived from the block id and the
/// MIME subtype so repeated exports assign identical names.
pub fn collect_assets(site: &SiteData) -> Vec<AssetRef> {
    let mut assets: Vec<AssetRef> = Vec::new();
    let mut push = |path: String, reference: &str| {
        // The same data URI reused across blocks decodes to one file.
        if !assets.iter().any(|a| a.reference == reference) {
            assets.push(AssetRef {
                path,
                reference: reference.to_string(),
            });
        }
    };

    if let Some(avatar) = site.profile.avatar_url.as_deref() {
        if is_data_image_uri(avatar) {
            push(format!("assets/avatar.{}", extension_for(avatar)), avatar);
        }
    }

    for block in &site.blocks {
        let image = match &block.kind {
            BlockKind::Link { image_url, .. } | BlockKind::Media { image_url, .. } => {
                image_url.as_deref()
            }
            _ => None,
        };
        let Some(reference) = image.filter(|r| is_data_image_uri(r)) else {
            continue;
        };
        push(
            format!(
                "assets/block-{}.{}",
                sanitize_file_stem(&block.id),
                extension_for(reference)
            ),
            reference,
        );
    }

    assets
}

/// Decodes assets concurrently, one bounded task per asset; results come
/// back in the input order. A corrupt payload is skipped with a warning and
/// its markup keeps the original reference.
pub async fn decode_assets(assets: Vec<AssetRef>) -> Vec<DecodedAsset> {
    let mut tasks = JoinSet::new();
    for (index, asset) in assets.into_iter().enumerate() {
        tasks.spawn_blocking(move || (index, decode_data_uri(&asset.reference), asset));
    }

    let mut decoded: Vec<(usize, DecodedAsset)> = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let Ok((index, bytes, asset)) = joined else {
            continue;
        };
        match bytes {
            Some(bytes) => decoded.push((
                index,
                DecodedAsset {
                    path: asset.path,
                    reference: asset.reference,
                    bytes,
                },
            )),
            None => {
                tracing::warn!(path = %asset.path, "Skipping undecodable inline asset");
            }
        }
    }

    decoded.sort_by_key(|(index, _)| *index);
    decoded.into_iter().map(|(_, asset)| asset).collect()
}

/// Builds the reference-to-path map the renderer consults. Only decoded
/// assets appear; failed ones fall through to their original reference.
pub fn resolved_asset_map(decoded: &[DecodedAsset]) -> HashMap<String, String> {
    decoded
        .iter()
        .map(|asset| (asset.reference.clone(), asset.path.clone()))
        .collect()
}

fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let (_, payload) = uri.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}

fn extension_for(uri: &str) -> &'static str {
    let subtype = uri
        .strip_prefix("data:image/")
        .and_then(|rest| rest.split(';').next())
        .unwrap_or("");
    match subtype {
        "png" => "png",
        "jpeg" | "jpg" => "jpg",
        "gif" => "gif",
        "webp" => "webp",
        "svg+xml" => "svg",
        "avif" => "avif",
        _ => "bin",
    }
}

fn sanitize_file_stem(id: &str) -> String {
    let stem: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    if stem.is_empty() {
        "block".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbio_core::model::{Block, Profile, SiteData};

    // 1x1 transparent PNG.
    const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";
    // 1x1 GIF.
    const GIF_URI: &str =
        "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

    fn site_with_assets() -> SiteData {
        SiteData::new(Profile::new("Jane").with_avatar(PNG_URI))
            .with_block(Block::media(GIF_URI).with_id("hero"))
            .with_block(Block::media("https://example.com/linked.png").with_id("linked"))
    }

    #[test]
    fn test_collect_assets_finds_inline_images_only() {
        let assets = collect_assets(&site_with_assets());
        let paths: Vec<&str> = assets.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, ["assets/avatar.png", "assets/block-hero.gif"]);
    }

    #[test]
    fn test_collect_assets_dedupes_repeated_references() {
        let site = SiteData::new(Profile::new("Jane"))
            .with_block(Block::media(PNG_URI).with_id("one"))
            .with_block(Block::media(PNG_URI).with_id("two"));
        let assets = collect_assets(&site);
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].path, "assets/block-one.png");
    }

    #[test]
    fn test_collect_assets_sanitizes_block_id() {
        let site = SiteData::new(Profile::new("Jane"))
            .with_block(Block::media(PNG_URI).with_id("../etc/passwd"));
        let assets = collect_assets(&site);
        assert_eq!(assets[0].path, "assets/block----etc-passwd.png");
    }

    #[tokio::test]
    async fn test_decode_assets_preserves_order_and_skips_corrupt() {
        let assets = vec![
            AssetRef {
                path: "assets/a.png".to_string(),
                reference: PNG_URI.to_string(),
            },
            AssetRef {
                path: "assets/b.png".to_string(),
                reference: "data:image/png;base64,@@@corrupt@@@".to_string(),
            },
            AssetRef {
                path: "assets/c.png".to_string(),
                reference: PNG_URI.to_string(),
            },
        ];

        let decoded = decode_assets(assets).await;
        let paths: Vec<&str> = decoded.iter().map(|a| a.path.as_str()).collect();
        assert_eq!(paths, ["assets/a.png", "assets/c.png"]);
        assert!(decoded[0].bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[tokio::test]
    async fn test_resolved_map_only_contains_decoded_assets() {
        let assets = collect_assets(&site_with_assets());
        let decoded = decode_assets(assets).await;
        let map = resolved_asset_map(&decoded);

        assert_eq!(map.get(PNG_URI), Some(&"assets/avatar.png".to_string()));
        assert_eq!(map.get(GIF_URI), Some(&"assets/block-hero.gif".to_string()));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("data:image/jpeg;base64,xx"), "jpg");
        assert_eq!(extension_for("data:image/svg+xml;base64,xx"), "svg");
        assert_eq!(extension_for("data:image/unknown;base64,xx"), "bin");
    }
}
