//! YouTube feed tiles.
//!
//! The editor pre-fetches and caches up to four video summaries in the
//! model; this renderer bakes the cache into static markup. The runtime
//! script may later re-fetch the feed as a progressive refresh, steered by
//! the `data-*` attributes emitted here in export mode. An empty cache
//! renders a placeholder, never an error.

use std::fmt::Write as _;

use crate::layout::{text_class, BlockShape, SizeTier, TextRole};
use crate::model::{Block, VideoSummary, YoutubeMode};
use crate::sanitize::{
    escape_html, is_valid_youtube_channel_id, is_valid_youtube_video_id, sanitize_url,
};

use super::context::RenderContext;

/// Hard cap on rendered videos, matching the cached-feed bound.
const MAX_VIDEOS: usize = 4;

pub(super) fn render_youtube_feed(
    channel_id: Option<&str>,
    mode: YoutubeMode,
    videos: &[VideoSummary],
    channel_title: Option<&str>,
    block: &Block,
    tier: SizeTier,
    ctx: &RenderContext,
) -> String {
    let shape = BlockShape::of(block);
    let valid_channel = channel_id.filter(|id| is_valid_youtube_channel_id(id));
    let limit = video_limit(mode, shape);
    let usable: Vec<&VideoSummary> = videos
        .iter()
        .filter(|v| is_valid_youtube_video_id(&v.id))
        .take(limit)
        .collect();

    let mut html = format!("<div class=\"yt-feed yt-{}\"", mode.as_str());
    // Hydration attributes let the exported page refresh the feed
    // client-side; they are only emitted for a plausible channel id so a
    // crafted id can never break out of the attribute.
    if ctx.is_export() {
        if let Some(id) = valid_channel {
            let _ = write!(
                html,
                " data-channel-id=\"{id}\" data-yt-mode=\"{}\" data-yt-limit=\"{limit}\"",
                mode.as_str()
            );
        }
    }
    html.push('>');

    if let Some(title) = channel_title.map(str::trim).filter(|t| !t.is_empty()) {
        let _ = write!(
            html,
            "<div class=\"yt-header {}\">{}</div>",
            text_class(TextRole::Subtitle, tier),
            escape_html(title)
        );
    }

    if usable.is_empty() {
        let message = if valid_channel.is_some() {
            "Loading videos\u{2026}"
        } else {
            "No videos yet"
        };
        let _ = write!(
            html,
            "<div class=\"yt-placeholder {}\">{message}</div>",
            text_class(TextRole::Body, tier)
        );
        html.push_str("</div>");
        return html;
    }

    match mode {
        YoutubeMode::Single => html.push_str(&render_single(usable[0])),
        YoutubeMode::Grid => html.push_str(&render_grid(&usable, tier)),
        YoutubeMode::List => html.push_str(&render_list(&usable, tier)),
    }
    html.push_str("</div>");
    html
}

/// Thumbnail count: compact tiles show two entries, everything else four.
/// `single` always embeds exactly one player.
fn video_limit(mode: YoutubeMode, shape: BlockShape) -> usize {
    match mode {
        YoutubeMode::Single => 1,
        YoutubeMode::Grid => {
            if shape.is_small() {
                2
            } else {
                MAX_VIDEOS
            }
        }
        YoutubeMode::List => {
            if shape.is_tall() || shape.is_large() {
                MAX_VIDEOS
            } else {
                2
            }
        }
    }
}

fn render_single(video: &VideoSummary) -> String {
    format!(
        "<iframe class=\"yt-embed\" src=\"https://www.youtube-nocookie.com/embed/{}\" title=\"{}\" loading=\"lazy\" allowfullscreen></iframe>",
        video.id,
        escape_html(&video.title)
    )
}

fn render_grid(videos: &[&VideoSummary], tier: SizeTier) -> String {
    let mut html = String::from("<div class=\"yt-grid\">");
    for video in videos {
        let thumb = sanitize_url(&video.thumbnail);
        let style = if thumb.is_empty() {
            String::new()
        } else {
            format!(
                " style=\"background-image: url('{}');\"",
                crate::sanitize::css_url(&thumb)
            )
        };
        let _ = write!(
            html,
            "<a class=\"yt-cell\" href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\" rel=\"noopener noreferrer\"{style}>\
             <span class=\"yt-cell-title {class}\">{title}</span></a>",
            id = video.id,
            class = text_class(TextRole::OverlaySubtitle, tier),
            title = escape_html(&video.title),
        );
    }
    html.push_str("</div>");
    html
}

fn render_list(videos: &[&VideoSummary], tier: SizeTier) -> String {
    let mut html = String::from("<div class=\"yt-list\">");
    for video in videos {
        let thumb = sanitize_url(&video.thumbnail);
        let thumb_html = if thumb.is_empty() {
            "<span class=\"yt-row-thumb\"></span>".to_string()
        } else {
            format!(
                "<img class=\"yt-row-thumb\" src=\"{}\" alt=\"\" loading=\"lazy\">",
                escape_html(&thumb)
            )
        };
        let _ = write!(
            html,
            "<a class=\"yt-row\" href=\"https://www.youtube.com/watch?v={id}\" target=\"_blank\" rel=\"noopener noreferrer\">\
             {thumb_html}<span class=\"yt-row-title {class}\">{title}</span></a>",
            id = video.id,
            class = text_class(TextRole::Subtitle, tier),
            title = escape_html(&video.title),
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use crate::render::block::render_block;
    use crate::render::context::RenderContext;

    const CHANNEL: &str = "UCBa659QWEk1AI4Tg--mrJ2A";

    fn video(n: u32) -> VideoSummary {
        VideoSummary::new(
            format!("video{n:05}x"),
            format!("Video {n}"),
            format!("https://i.ytimg.com/vi/video{n:05}x/hqdefault.jpg"),
        )
    }

    fn feed_block(mode: YoutubeMode, videos: Vec<VideoSummary>) -> Block {
        Block::youtube_feed(CHANNEL, mode)
            .with_id("yt")
            .with_videos(videos)
    }

    #[test]
    fn test_single_mode_embeds_first_video() {
        let block = feed_block(YoutubeMode::Single, vec![video(1), video(2)]).with_span(3, 2);
        let html = render_block(&block, &RenderContext::preview());

        assert!(html.contains("youtube-nocookie.com/embed/video00001x"));
        assert!(!html.contains("video00002x"));
    }

    #[test]
    fn test_grid_mode_small_block_shows_two_thumbnails() {
        let block =
            feed_block(YoutubeMode::Grid, (1..=4).map(video).collect()).with_span(2, 2);
        let html = render_block(&block, &RenderContext::preview());

        assert_eq!(html.matches("class=\"yt-cell\"").count(), 2);
    }

    #[test]
    fn test_grid_mode_large_block_shows_four_thumbnails() {
        let block =
            feed_block(YoutubeMode::Grid, (1..=4).map(video).collect()).with_span(4, 3);
        let html = render_block(&block, &RenderContext::preview());
        assert_eq!(html.matches("class=\"yt-cell\"").count(), 4);
    }

    #[test]
    fn test_invalid_video_ids_are_skipped() {
        let mut bad = video(1);
        bad.id = "\" onmouseover=\"alert(1)".to_string();
        let block = feed_block(YoutubeMode::List, vec![bad, video(2)]).with_span(2, 3);
        let html = render_block(&block, &RenderContext::preview());

        assert!(!html.contains("onmouseover"));
        assert!(html.contains("watch?v=video00002x"));
    }

    #[test]
    fn test_empty_cache_renders_loading_placeholder() {
        let block = feed_block(YoutubeMode::Grid, Vec::new()).with_span(3, 2);
        let html = render_block(&block, &RenderContext::preview());
        assert!(html.contains("Loading videos"));
    }

    #[test]
    fn test_invalid_channel_renders_static_fallback_without_hydration() {
        let block = Block::youtube_feed("notachannel", YoutubeMode::Grid)
            .with_id("yt-bad")
            .with_span(3, 2);
        let html = render_block(&block, &RenderContext::export(Default::default()));

        assert!(!html.contains("data-channel-id"));
        assert!(html.contains("No videos yet"));
    }

    #[test]
    fn test_export_mode_adds_hydration_attributes() {
        let block = feed_block(YoutubeMode::Grid, vec![video(1)]).with_span(4, 2);
        let preview_html = render_block(&block, &RenderContext::preview());
        let export_html = render_block(&block, &RenderContext::export(Default::default()));

        assert!(!preview_html.contains("data-channel-id"));
        assert!(export_html.contains(&format!("data-channel-id=\"{CHANNEL}\"")));
        assert!(export_html.contains("data-yt-mode=\"grid\""));
        assert!(export_html.contains("data-yt-limit=\"4\""));
    }

    #[test]
    fn test_channel_title_is_escaped() {
        let block = feed_block(YoutubeMode::List, vec![video(1)])
            .with_channel_title("<Jane> & co");
        let html = render_block(&block, &RenderContext::preview());
        assert!(html.contains("&lt;Jane&gt; &amp; co"));
    }
}
