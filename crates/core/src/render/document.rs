//! Document assembler: wraps the profile header and rendered blocks into a
//! complete HTML document.
//!
//! Preview inlines the stylesheet and runtime script so the result can be
//! embedded via a sandboxed `srcDoc`; export links `styles.css` and
//! `app.js` as external files. Blocks are emitted in reading order (see
//! [`sort_blocks_for_document`]) regardless of model order.

use std::fmt::Write as _;

use crate::model::{sort_blocks_for_document, Background, SiteData};
use crate::sanitize::{css_url, css_value, escape_html, sanitize_url};
use crate::script::runtime_script;

use super::block::render_block;
use super::context::{RenderContext, RenderMode};
use super::profile::render_profile_header;
use super::styles::stylesheet;

/// Renders the single-string preview document for sandboxed embedding.
pub fn render_preview(site: &SiteData) -> String {
    render_document(site, &RenderContext::preview())
}

/// Renders the full document in the given context.
pub fn render_document(site: &SiteData, ctx: &RenderContext) -> String {
    let mut html = String::with_capacity(32 * 1024);
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(html, "<title>{}</title>", escape_html(&site.profile.name));
    match ctx.mode {
        RenderMode::Preview => {
            let _ = write!(html, "<style>\n{}</style>\n", stylesheet());
        }
        RenderMode::Export => {
            html.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n");
        }
    }
    html.push_str("</head>\n<body>\n");

    let _ = writeln!(html, "<div class=\"page\"{}>", page_style(site));
    if let Background::Image { blur, .. } = &site.profile.background {
        if *blur > 0 {
            let _ = writeln!(
                html,
                "<div class=\"page-backdrop\" style=\"backdrop-filter: blur({blur}px); -webkit-backdrop-filter: blur({blur}px);\"></div>"
            );
        }
    }
    html.push_str("<main class=\"container\">\n");
    html.push_str(&render_profile_header(&site.profile, ctx));
    html.push_str("\n<div class=\"grid\">\n");
    for block in sort_blocks_for_document(&site.blocks) {
        html.push_str(&render_block(block, ctx));
        html.push('\n');
    }
    html.push_str("</div>\n");
    if site.profile.show_branding {
        html.push_str(
            "<div class=\"branding\"><a href=\"https://gridbio.dev\" target=\"_blank\" rel=\"noopener noreferrer\">Made with gridbio</a></div>\n",
        );
    }
    html.push_str("</main>\n</div>\n");

    match ctx.mode {
        RenderMode::Preview => {
            let _ = write!(html, "<script>\n{}</script>\n", runtime_script(site));
        }
        RenderMode::Export => {
            html.push_str("<script src=\"app.js\" defer></script>\n");
        }
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Inline style for the page shell: a validated color value, or a safe
/// background image URL. Anything unusable falls back to the stylesheet
/// default.
fn page_style(site: &SiteData) -> String {
    match &site.profile.background {
        Background::Color(color) => match css_value(color) {
            Some(value) => format!(" style=\"background: {value};\""),
            None => String::new(),
        },
        Background::Image { url, .. } => {
            let safe = sanitize_url(url);
            if safe.is_empty() {
                String::new()
            } else {
                format!(
                    " style=\"background-image: url('{}');\"",
                    css_url(&safe)
                )
            }
        }
    }
}
