//! Profile header: avatar, name, bio, and the social icon row.

use std::fmt::Write as _;

use crate::model::Profile;
use crate::sanitize::escape_html;
use crate::social;

use super::block::image_source;
use super::context::RenderContext;

pub(super) fn render_profile_header(profile: &Profile, ctx: &RenderContext) -> String {
    let mut html = String::from("<header class=\"profile-header\">");

    let avatar_classes = avatar_classes(profile);
    match profile
        .avatar_url
        .as_deref()
        .and_then(|reference| image_source(reference, ctx))
    {
        Some(src) => {
            let _ = write!(
                html,
                "<img class=\"{avatar_classes}\" src=\"{}\" alt=\"{}\">",
                escape_html(&src),
                escape_html(&profile.name)
            );
        }
        // No usable avatar: initial-letter placeholder in the same frame.
        None => {
            let initial = profile
                .name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            let _ = write!(
                html,
                "<div class=\"{avatar_classes} avatar-fallback\">{}</div>",
                escape_html(&initial)
            );
        }
    }

    let _ = write!(
        html,
        "<h1 class=\"profile-name\">{}</h1>",
        escape_html(&profile.name)
    );
    if !profile.bio.trim().is_empty() {
        let _ = write!(
            html,
            "<p class=\"profile-bio\">{}</p>",
            escape_html(&profile.bio)
        );
    }

    if !profile.social_accounts.is_empty() {
        let mut icons = String::new();
        for account in &profile.social_accounts {
            let Some(descriptor) = social::platform(&account.platform) else {
                continue;
            };
            let href = descriptor.build_url(&account.handle);
            if href.is_empty() {
                continue;
            }
            let _ = write!(
                icons,
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"{}\">\
                 <span class=\"badge\" style=\"background: {};\">{}</span></a>",
                escape_html(&href),
                escape_html(descriptor.label),
                descriptor.brand_color,
                escape_html(&descriptor.monogram().to_string()),
            );
        }
        if !icons.is_empty() {
            let _ = write!(html, "<div class=\"profile-socials\">{icons}</div>");
        }
    }

    html.push_str("</header>");
    html
}

fn avatar_classes(profile: &Profile) -> String {
    let style = &profile.avatar_style;
    let mut classes = format!("avatar {}", style.shape.css_class());
    if style.border {
        classes.push_str(" avatar-border");
    }
    if style.shadow {
        classes.push_str(" avatar-shadow");
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AvatarShape, Profile};
    use crate::render::context::RenderContext;

    #[test]
    fn test_header_with_avatar_and_socials() {
        let profile = Profile::new("Jane")
            .with_bio("Maker of things.")
            .with_avatar("https://example.com/me.png")
            .with_social_account("github", "jane");
        let html = render_profile_header(&profile, &RenderContext::preview());

        assert!(html.contains("src=\"https://example.com/me.png\""));
        assert!(html.contains("<h1 class=\"profile-name\">Jane</h1>"));
        assert!(html.contains("Maker of things."));
        assert!(html.contains("https://github.com/jane"));
    }

    #[test]
    fn test_missing_avatar_renders_initial_fallback() {
        let profile = Profile::new("jane doe");
        let html = render_profile_header(&profile, &RenderContext::preview());
        assert!(html.contains("avatar-fallback"));
        assert!(html.contains(">J</div>"));
    }

    #[test]
    fn test_unsafe_avatar_url_is_dropped() {
        let profile = Profile::new("Jane").with_avatar("javascript:alert(1)");
        let html = render_profile_header(&profile, &RenderContext::preview());
        assert!(!html.contains("javascript:"));
        assert!(html.contains("avatar-fallback"));
    }

    #[test]
    fn test_avatar_style_classes() {
        let mut profile = Profile::new("Jane").with_avatar("https://example.com/me.png");
        profile.avatar_style.shape = AvatarShape::Rounded;
        profile.avatar_style.border = true;
        profile.avatar_style.shadow = false;
        let html = render_profile_header(&profile, &RenderContext::preview());

        assert!(html.contains("avatar-rounded"));
        assert!(html.contains("avatar-border"));
        assert!(!html.contains("avatar-shadow"));
    }

    #[test]
    fn test_unknown_platform_account_is_skipped() {
        let profile = Profile::new("Jane").with_social_account("myspace", "jane");
        let html = render_profile_header(&profile, &RenderContext::preview());
        assert!(!html.contains("profile-socials"));
    }

    #[test]
    fn test_profile_text_is_escaped() {
        let profile = Profile::new("<Jane>").with_bio("a & b");
        let html = render_profile_header(&profile, &RenderContext::preview());
        assert!(html.contains("&lt;Jane&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
