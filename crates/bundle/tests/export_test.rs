//! End-to-end export assertions over the produced archive.

use std::collections::HashSet;
use std::io::{Cursor, Read};

use zip::ZipArchive;

use gridbio_bundle::{export_bundle, DeploymentTarget, ExportOptions};
use gridbio_core::model::{AnalyticsConfig, Block, Profile, SiteData};

// 1x1 transparent PNG.
const PNG_URI: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn sample_site() -> SiteData {
    SiteData::new(
        Profile::new("Jane Doe")
            .with_bio("Maker of small useful things.")
            .with_avatar(PNG_URI)
            .with_social_account("github", "janedoe"),
    )
    .with_block(
        Block::link("https://janedoe.dev", "Portfolio")
            .with_id("portfolio")
            .with_span(3, 2)
            .at(1, 1),
    )
    .with_block(Block::map("Lisbon, Portugal").with_id("map").with_span(3, 2).at(4, 1))
}

fn entry_names(archive: &mut ZipArchive<Cursor<Vec<u8>>>) -> HashSet<String> {
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut entry = archive.by_name(name).unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    contents
}

async fn open_export(
    site: &SiteData,
    options: &ExportOptions,
) -> ZipArchive<Cursor<Vec<u8>>> {
    let bytes = export_bundle(site, options).await.unwrap();
    ZipArchive::new(Cursor::new(bytes)).unwrap()
}

#[tokio::test]
async fn export_contains_fixed_top_level_entries() {
    let mut archive = open_export(
        &sample_site(),
        &ExportOptions::for_target(DeploymentTarget::Vercel),
    )
    .await;
    let names = entry_names(&mut archive);

    for expected in ["index.html", "styles.css", "app.js", "data.json", "DEPLOY.md"] {
        assert!(names.contains(expected), "missing {expected}");
    }
    assert!(names.contains("assets/avatar.png"));
    assert!(names.contains("vercel.json"));
}

#[tokio::test]
async fn docker_export_has_docker_scaffold_and_no_vercel_config() {
    let mut archive = open_export(
        &sample_site(),
        &ExportOptions::for_target(DeploymentTarget::Docker),
    )
    .await;
    let names = entry_names(&mut archive);

    assert!(names.contains("Dockerfile"));
    assert!(names.contains("nginx.conf"));
    assert!(!names.contains("vercel.json"));
    assert!(!names.contains("netlify.toml"));
}

#[tokio::test]
async fn exported_markup_references_decoded_asset_not_data_uri() {
    let mut archive = open_export(
        &sample_site(),
        &ExportOptions::for_target(DeploymentTarget::Netlify),
    )
    .await;
    let html = read_entry(&mut archive, "index.html");

    assert!(html.contains("assets/avatar.png"));
    assert!(!html.contains("data:image/png"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(html.contains("<script src=\"app.js\" defer></script>"));
}

#[tokio::test]
async fn corrupt_inline_asset_keeps_original_reference() {
    let mut site = sample_site();
    // Clean base64 character class but not decodable: the asset is skipped
    // and the markup keeps the inline URI as a best-effort src.
    site.profile.avatar_url = Some("data:image/png;base64,AAA=A".to_string());

    let mut archive = open_export(
        &site,
        &ExportOptions::for_target(DeploymentTarget::Netlify),
    )
    .await;
    let names = entry_names(&mut archive);
    assert!(!names.iter().any(|n| n.starts_with("assets/")));

    let html = read_entry(&mut archive, "index.html");
    assert!(html.contains("data:image/png;base64,AAA=A"));
}

#[tokio::test]
async fn malformed_inline_reference_degrades_to_avatar_fallback() {
    let mut site = sample_site();
    site.profile.avatar_url = Some("data:image/png;base64,not%20base64!".to_string());

    let mut archive = open_export(
        &site,
        &ExportOptions::for_target(DeploymentTarget::Netlify),
    )
    .await;
    let html = read_entry(&mut archive, "index.html");
    assert!(html.contains("avatar-fallback"));
    assert!(!html.contains("not%20base64!"));
}

#[tokio::test]
async fn data_json_round_trips_the_model() {
    let site = sample_site();
    let mut archive = open_export(
        &site,
        &ExportOptions::for_target(DeploymentTarget::GithubPages),
    )
    .await;
    let snapshot = read_entry(&mut archive, "data.json");
    let restored: SiteData = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, site);
}

#[tokio::test]
async fn site_id_override_lands_in_runtime_script_and_snapshot() {
    let mut site = sample_site();
    site.profile.analytics = Some(AnalyticsConfig::new(
        "https://ping.example.com/collect",
        "draft-id",
    ));

    let options =
        ExportOptions::for_target(DeploymentTarget::Vercel).with_site_id("published-id");
    let mut archive = open_export(&site, &options).await;

    let js = read_entry(&mut archive, "app.js");
    assert!(js.contains("\"published-id\""));
    assert!(!js.contains("draft-id"));

    let snapshot = read_entry(&mut archive, "data.json");
    assert!(snapshot.contains("published-id"));
}

#[tokio::test]
async fn analytics_free_export_ships_no_beacon_code() {
    let mut archive = open_export(
        &sample_site(),
        &ExportOptions::for_target(DeploymentTarget::Vercel),
    )
    .await;
    let js = read_entry(&mut archive, "app.js");
    assert!(!js.contains("sendBeacon"));
    assert!(!js.contains("session_end"));
}

#[tokio::test]
async fn heroku_export_includes_static_server_scaffold() {
    let mut archive = open_export(
        &sample_site(),
        &ExportOptions::for_target(DeploymentTarget::Heroku),
    )
    .await;
    let names = entry_names(&mut archive);

    assert!(names.contains("server.js"));
    assert!(names.contains("Procfile"));
    assert!(names.contains("package.json"));
}
