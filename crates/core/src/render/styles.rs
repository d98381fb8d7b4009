//! Stylesheet generation shared verbatim by the preview and export paths.

use std::fmt::Write as _;

use crate::layout::{font_scale, text_class, SizeTier, TextRole};

/// Named background swatches available to blocks.
const SWATCHES: [(&str, &str); 8] = [
    ("paper", "#ffffff"),
    ("mist", "#f1f5f9"),
    ("ink", "#0f172a"),
    ("sand", "#fef3c7"),
    ("mint", "#d1fae5"),
    ("blush", "#fce7f3"),
    ("sunset", "linear-gradient(135deg, #f6d365 0%, #fda085 100%)"),
    ("ocean", "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)"),
];

/// Resolves a swatch token to its CSS value.
pub fn swatch(token: &str) -> Option<&'static str> {
    SWATCHES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

/// Base stylesheet: layout shell, block chrome, tilt layers, and the
/// generated font-scale classes. Static output; byte-identical on every
/// call, which keeps preview and export visually in lockstep.
pub fn stylesheet() -> String {
    let mut css = String::with_capacity(8 * 1024);
    css.push_str(BASE_CSS);
    write_font_classes(&mut css);
    css
}

const BASE_CSS: &str = "\
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body {
  font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  color: #0f172a;
  -webkit-font-smoothing: antialiased;
}
.page { min-height: 100vh; position: relative; background-size: cover; background-position: center; }
.page-backdrop { position: absolute; inset: 0; pointer-events: none; }
.container { position: relative; max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem 4rem; }

.profile-header { display: flex; flex-direction: column; align-items: center; text-align: center; margin-bottom: 2.5rem; }
.avatar { width: 6rem; height: 6rem; object-fit: cover; display: block; }
.avatar-fallback { display: flex; align-items: center; justify-content: center; background: #e2e8f0; color: #475569; font-size: 2rem; font-weight: 600; }
.avatar-circle { border-radius: 9999px; }
.avatar-rounded { border-radius: 1.25rem; }
.avatar-square { border-radius: 0.375rem; }
.avatar-border { border: 3px solid #ffffff; }
.avatar-shadow { box-shadow: 0 10px 25px rgba(15, 23, 42, 0.15); }
.profile-name { font-size: 1.5rem; font-weight: 700; margin: 1rem 0 0.25rem; }
.profile-bio { font-size: 0.9375rem; color: #475569; margin: 0; max-width: 34rem; white-space: pre-line; }
.profile-socials { display: flex; gap: 0.5rem; margin-top: 0.875rem; }
.profile-socials .badge { width: 2rem; height: 2rem; font-size: 0.875rem; }

.grid {
  display: grid;
  grid-template-columns: repeat(9, minmax(0, 1fr));
  grid-auto-rows: 5.5rem;
  grid-auto-flow: dense;
  gap: 0.75rem;
}
.block {
  position: relative;
  overflow: hidden;
  background: #ffffff;
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
  transform-style: preserve-3d;
  will-change: transform;
  transition: transform 150ms ease, box-shadow 150ms ease;
}
.block:hover { box-shadow: 0 12px 28px rgba(15, 23, 42, 0.12); }
.block-spacer { background: transparent; box-shadow: none; }
.block-spacer:hover { box-shadow: none; }
.block-glare {
  position: absolute; inset: 0; pointer-events: none; opacity: 0;
  background: radial-gradient(circle at 50% 50%, rgba(255, 255, 255, 0.35), transparent 60%);
  transition: opacity 150ms ease;
}

.tile-link, .tile-icon { display: flex; width: 100%; height: 100%; text-decoration: none; color: inherit; }
.tile-link { flex-direction: column; justify-content: flex-end; padding: 1rem; gap: 0.25rem; }
.tile-link-cover { padding: 0; position: relative; }
.tile-cover { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.tile-overlay {
  position: relative; margin-top: auto; padding: 1rem; width: 100%; color: #ffffff;
  background: linear-gradient(transparent, rgba(15, 23, 42, 0.7));
}
.tile-thumb { width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; object-fit: cover; }
.tile-copy { display: flex; flex-direction: column; gap: 0.125rem; min-width: 0; }
.tile-title { font-weight: 600; overflow: hidden; text-overflow: ellipsis; }
.tile-title-placeholder { color: #94a3b8; font-weight: 500; }
.tile-subtext { color: #64748b; overflow: hidden; text-overflow: ellipsis; }
.tile-overlay .tile-subtext { color: rgba(255, 255, 255, 0.8); }
.tile-text { display: flex; flex-direction: column; justify-content: center; height: 100%; padding: 1rem; gap: 0.25rem; }
.tile-body { margin: 0; color: #334155; white-space: pre-line; }
.tile-media { width: 100%; height: 100%; object-fit: cover; display: block; }
.tile-media-empty { width: 100%; height: 100%; background: repeating-linear-gradient(45deg, #f1f5f9 0, #f1f5f9 10px, #e2e8f0 10px, #e2e8f0 20px); }
.tile-social { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; width: 100%; height: 100%; text-decoration: none; color: inherit; }
.tile-icon { align-items: center; justify-content: center; }
.badge {
  display: inline-flex; align-items: center; justify-content: center;
  width: 2.5rem; height: 2.5rem; border-radius: 0.75rem; flex: none;
  color: #ffffff; font-weight: 700; font-size: 1.125rem;
}
.tile-map { width: 100%; height: 100%; border: 0; display: block; }
.tile-fallback { display: flex; align-items: center; justify-content: center; height: 100%; color: #94a3b8; }

.yt-feed { display: flex; flex-direction: column; height: 100%; padding: 0.75rem; gap: 0.5rem; }
.yt-header { font-weight: 600; color: #334155; }
.yt-embed { width: 100%; flex: 1; border: 0; border-radius: 0.5rem; }
.yt-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.5rem; flex: 1; }
.yt-cell {
  position: relative; display: flex; align-items: flex-end; border-radius: 0.5rem;
  overflow: hidden; background-size: cover; background-position: center;
  background-color: #e2e8f0; text-decoration: none;
}
.yt-cell-title {
  width: 100%; padding: 0.375rem 0.5rem; color: #ffffff;
  background: linear-gradient(transparent, rgba(15, 23, 42, 0.75));
  overflow: hidden; text-overflow: ellipsis; white-space: nowrap;
}
.yt-list { display: flex; flex-direction: column; gap: 0.5rem; flex: 1; overflow: hidden; }
.yt-row { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: inherit; }
.yt-row-thumb { width: 4rem; height: 2.25rem; border-radius: 0.375rem; object-fit: cover; flex: none; background: #e2e8f0; }
.yt-row-title { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; color: #334155; }
.yt-placeholder { display: flex; align-items: center; justify-content: center; flex: 1; color: #94a3b8; }

.tc-light { color: #ffffff; }
.tc-light .tile-subtext, .tc-light .tile-body { color: rgba(255, 255, 255, 0.8); }
.tc-dark { color: #0f172a; }
.tc-muted { color: #64748b; }

.branding { display: flex; justify-content: center; margin-top: 2.5rem; }
.branding a { font-size: 0.75rem; color: #94a3b8; text-decoration: none; }
.branding a:hover { color: #64748b; }

@media (max-width: 1023px) {
  .grid { grid-template-columns: repeat(6, minmax(0, 1fr)); }
}
@media (max-width: 639px) {
  .grid { grid-template-columns: repeat(2, minmax(0, 1fr)); grid-auto-rows: 5rem; }
  .container { padding: 2rem 1rem 3rem; }
}
";

/// Emits one class per (role, tier) with tablet and desktop overrides, all
/// driven by the layout table so sizes cannot drift from the resolver.
fn write_font_classes(css: &mut String) {
    css.push_str("\n/* Font scale: role x tier, three breakpoints. */\n");
    for role in TextRole::all() {
        for tier in SizeTier::all() {
            let class = text_class(role, tier);
            let (base, _, _) = font_scale(role, tier);
            let _ = writeln!(css, ".{class} {{ font-size: {base}; }}");
        }
    }
    css.push_str("@media (min-width: 640px) {\n");
    for role in TextRole::all() {
        for tier in SizeTier::all() {
            let class = text_class(role, tier);
            let (_, tablet, _) = font_scale(role, tier);
            let _ = writeln!(css, "  .{class} {{ font-size: {tablet}; }}");
        }
    }
    css.push_str("}\n@media (min-width: 1024px) {\n");
    for role in TextRole::all() {
        for tier in SizeTier::all() {
            let class = text_class(role, tier);
            let (_, _, desktop) = font_scale(role, tier);
            let _ = writeln!(css, "  .{class} {{ font-size: {desktop}; }}");
        }
    }
    css.push_str("}\n");
}
