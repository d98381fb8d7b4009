//! Polymorphic block renderer.
//!
//! One pure function per block variant, shared by the preview and export
//! paths. Output is byte-identical for equal inputs; the only mode
//! difference is the `data-*` hydration attributes Export adds to video
//! feed placeholders. User strings are escaped here, at their interpolation
//! point, exactly once.

use std::fmt::Write as _;

use crate::layout::{border_radius, grid_placement, size_tier, text_class, SizeTier, TextRole};
use crate::model::{Block, BlockKind, MediaPosition};
use crate::sanitize::{
    escape_html, is_data_image_uri, is_valid_location_string, sanitize_url,
};
use crate::social;

use super::context::RenderContext;
use super::styles::swatch;
use super::youtube::render_youtube_feed;

/// Renders one block into an HTML fragment.
pub fn render_block(block: &Block, ctx: &RenderContext) -> String {
    let tier = size_tier(block.col_span, block.row_span);
    let inner = match &block.kind {
        BlockKind::Link {
            content,
            title,
            subtext,
            image_url,
        } => render_link(content, title, subtext, image_url.as_deref(), tier, ctx),
        BlockKind::Text {
            title,
            subtext,
            content,
        } => render_text(title, subtext, content, tier),
        BlockKind::Media {
            image_url,
            media_position,
        } => render_media(image_url.as_deref(), *media_position, ctx),
        BlockKind::Social {
            social_platform,
            social_handle,
            channel_id,
            youtube_mode,
            videos,
            channel_title,
        } => match youtube_mode {
            Some(mode) => render_youtube_feed(
                channel_id.as_deref(),
                *mode,
                videos,
                channel_title.as_deref(),
                block,
                tier,
                ctx,
            ),
            None => render_social(social_platform, social_handle, tier),
        },
        BlockKind::SocialIcon {
            social_platform,
            social_handle,
        } => render_social_icon(social_platform, social_handle),
        BlockKind::Map { content } => render_map(content, tier),
        BlockKind::Spacer => String::new(),
    };

    let mut html = String::with_capacity(inner.len() + 256);
    let _ = write!(
        html,
        "<div class=\"{classes}\" data-block-id=\"{id}\"",
        classes = wrapper_classes(block, tier),
        id = escape_html(&block.id),
    );
    if !block.kind.is_spacer() {
        html.push_str(" data-tilt");
    } else {
        html.push_str(" aria-hidden=\"true\"");
    }
    let _ = write!(html, " style=\"{}\">", wrapper_style(block));
    if !block.kind.is_spacer() {
        html.push_str("<div class=\"block-glare\"></div>");
    }
    html.push_str(&inner);
    html.push_str("</div>");
    html
}

fn wrapper_classes(block: &Block, tier: SizeTier) -> String {
    let mut classes = format!(
        "block block-{} tier-{}",
        block.kind.css_class(),
        tier.as_str()
    );
    if let Some(token) = block.text_color.as_deref() {
        if let Some(class) = text_color_class(token) {
            classes.push(' ');
            classes.push_str(class);
        }
    }
    classes
}

fn wrapper_style(block: &Block) -> String {
    let mut style = grid_placement(block);
    let _ = write!(style, " border-radius: {};", border_radius(block));
    if let Some(background) = background_value(block) {
        let _ = write!(style, " background: {background};");
    }
    style
}

/// Resolves a block's background: a validated raw CSS value wins over the
/// swatch token; anything else falls through to the stylesheet default.
fn background_value(block: &Block) -> Option<&str> {
    if let Some(raw) = block.custom_background.as_deref() {
        if let Some(value) = crate::sanitize::css_value(raw) {
            return Some(value);
        }
    }
    block.background.as_deref().and_then(swatch)
}

fn text_color_class(token: &str) -> Option<&'static str> {
    match token {
        "light" => Some("tc-light"),
        "dark" => Some("tc-dark"),
        "muted" => Some("tc-muted"),
        _ => None,
    }
}

/// Resolves an image reference into a usable `src` value: inline-encoded
/// images map through the decoded-asset table (export) or pass through
/// (preview); anything else must be a safe http(s) URL or is omitted.
pub(super) fn image_source(reference: &str, ctx: &RenderContext) -> Option<String> {
    if is_data_image_uri(reference) {
        return Some(
            ctx.resolve_asset(reference)
                .map(str::to_string)
                .unwrap_or_else(|| reference.to_string()),
        );
    }
    let url = sanitize_url(reference);
    (!url.is_empty()).then_some(url)
}

fn render_link(
    content: &str,
    title: &str,
    subtext: &str,
    image_url: Option<&str>,
    tier: SizeTier,
    ctx: &RenderContext,
) -> String {
    let href = sanitize_url(content);
    let image = image_url.and_then(|reference| image_source(reference, ctx));

    let title_html = if title.trim().is_empty() {
        if href.is_empty() {
            "<span class=\"tile-title-placeholder\">Add a title\u{2026}</span>".to_string()
        } else {
            escape_html(&href)
        }
    } else {
        escape_html(title)
    };

    let (title_role, subtitle_role) = if image.is_some() {
        (TextRole::OverlayTitle, TextRole::OverlaySubtitle)
    } else {
        (TextRole::Title, TextRole::Subtitle)
    };

    let mut copy = String::new();
    let _ = write!(
        copy,
        "<div class=\"{} tile-title\">{}</div>",
        text_class(title_role, tier),
        title_html
    );
    if !subtext.trim().is_empty() {
        let _ = write!(
            copy,
            "<div class=\"{} tile-subtext\">{}</div>",
            text_class(subtitle_role, tier),
            escape_html(subtext)
        );
    }

    let cover_class = if image.is_some() { " tile-link-cover" } else { "" };
    let body = match image {
        Some(src) => format!(
            "<img class=\"tile-cover\" src=\"{}\" alt=\"\" loading=\"lazy\">\
             <div class=\"tile-overlay\">{copy}</div>",
            escape_html(&src)
        ),
        None => format!("<div class=\"tile-copy\">{copy}</div>"),
    };

    // An unsafe destination drops the anchor entirely; the text still shows.
    if href.is_empty() {
        format!("<div class=\"tile-link{cover_class}\">{body}</div>")
    } else {
        format!(
            "<a class=\"tile-link{cover_class}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{body}</a>",
            escape_html(&href)
        )
    }
}

fn render_text(title: &str, subtext: &str, content: &str, tier: SizeTier) -> String {
    let mut html = String::from("<div class=\"tile-text\">");
    if title.trim().is_empty() {
        let _ = write!(
            html,
            "<div class=\"{} tile-title\"><span class=\"tile-title-placeholder\">Add a title\u{2026}</span></div>",
            text_class(TextRole::Title, tier)
        );
    } else {
        let _ = write!(
            html,
            "<div class=\"{} tile-title\">{}</div>",
            text_class(TextRole::Title, tier),
            escape_html(title)
        );
    }
    if !subtext.trim().is_empty() {
        let _ = write!(
            html,
            "<div class=\"{} tile-subtext\">{}</div>",
            text_class(TextRole::Subtitle, tier),
            escape_html(subtext)
        );
    }
    if !content.trim().is_empty() {
        let _ = write!(
            html,
            "<p class=\"{} tile-body\">{}</p>",
            text_class(TextRole::Body, tier),
            escape_html(content)
        );
    }
    html.push_str("</div>");
    html
}

fn render_media(
    image_url: Option<&str>,
    media_position: Option<MediaPosition>,
    ctx: &RenderContext,
) -> String {
    let Some(src) = image_url.and_then(|reference| image_source(reference, ctx)) else {
        return "<div class=\"tile-media tile-media-empty\"></div>".to_string();
    };
    let position = media_position
        .map(|p| {
            let (x, y) = p.clamped();
            format!(" style=\"object-position: {x}% {y}%;\"")
        })
        .unwrap_or_default();
    format!(
        "<img class=\"tile-media\" src=\"{}\" alt=\"\" loading=\"lazy\"{position}>",
        escape_html(&src)
    )
}

fn render_social(platform_id: &str, handle: &str, tier: SizeTier) -> String {
    let descriptor = social::platform(platform_id);
    let (label, color, monogram, href, shown_handle) = match descriptor {
        Some(p) => (
            p.label.to_string(),
            p.brand_color,
            p.monogram().to_string(),
            p.build_url(handle),
            p.display_handle(handle),
        ),
        // Unknown platform: benign tile with the raw name, no link.
        None => (
            platform_id.to_string(),
            "#64748b",
            platform_id
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string()),
            String::new(),
            handle.trim().to_string(),
        ),
    };

    let mut copy = format!(
        "<span class=\"badge\" style=\"background: {color};\">{}</span><div class=\"tile-copy\">\
         <div class=\"{} tile-title\">{}</div>",
        escape_html(&monogram),
        text_class(TextRole::Title, tier),
        escape_html(&label)
    );
    if !shown_handle.is_empty() {
        let _ = write!(
            copy,
            "<div class=\"{} tile-subtext\">{}</div>",
            text_class(TextRole::Subtitle, tier),
            escape_html(&shown_handle)
        );
    }
    copy.push_str("</div>");

    if href.is_empty() {
        format!("<div class=\"tile-social\">{copy}</div>")
    } else {
        format!(
            "<a class=\"tile-social\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{copy}</a>",
            escape_html(&href)
        )
    }
}

fn render_social_icon(platform_id: &str, handle: &str) -> String {
    let Some(descriptor) = social::platform(platform_id) else {
        return "<div class=\"tile-icon\"><span class=\"badge\" style=\"background: #64748b;\">?</span></div>"
            .to_string();
    };
    let badge = format!(
        "<span class=\"badge\" style=\"background: {};\">{}</span>",
        descriptor.brand_color,
        escape_html(&descriptor.monogram().to_string())
    );
    let href = descriptor.build_url(handle);
    if href.is_empty() {
        format!("<div class=\"tile-icon\">{badge}</div>")
    } else {
        format!(
            "<a class=\"tile-icon\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">{badge}</a>",
            escape_html(&href),
            escape_html(descriptor.label)
        )
    }
}

fn render_map(location: &str, tier: SizeTier) -> String {
    if !is_valid_location_string(location) {
        return format!(
            "<div class=\"tile-fallback {}\">Invalid location</div>",
            text_class(TextRole::Body, tier)
        );
    }
    let trimmed = location.trim();
    let embed_url = format!(
        "https://maps.google.com/maps?q={}&z=13&output=embed",
        urlencoding::encode(trimmed)
    );
    format!(
        "<iframe class=\"tile-map\" src=\"{}\" loading=\"lazy\" title=\"Map of {}\"></iframe>",
        escape_html(&embed_url),
        escape_html(trimmed)
    )
}
