use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete site model: profile header plus the ordered block grid.
///
/// This is the immutable input to the rendering engine. The engine never
/// mutates it; all render artifacts (escaped strings, resolved URLs, CSS
/// classes) are derived and discarded after document assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    pub profile: Profile,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl SiteData {
    /// Creates a site with the given profile and no blocks.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            blocks: Vec::new(),
        }
    }

    /// Appends a block to the grid.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }
}

/// The profile header shown above the block grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Avatar reference: an http(s) URL or an inline `data:image/*` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub background: Background,
    #[serde(default = "default_true")]
    pub show_branding: bool,
    #[serde(default)]
    pub social_accounts: Vec<SocialAccount>,
    #[serde(default)]
    pub avatar_style: AvatarStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsConfig>,
}

impl Profile {
    /// Creates a profile with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: String::new(),
            avatar_url: None,
            background: Background::default(),
            show_branding: true,
            social_accounts: Vec::new(),
            avatar_style: AvatarStyle::default(),
            analytics: None,
        }
    }

    /// Sets the bio line.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Sets the avatar reference (URL or inline data URI).
    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the page background.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Adds a social account to the header icon row.
    pub fn with_social_account(
        mut self,
        platform: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        self.social_accounts.push(SocialAccount {
            platform: platform.into(),
            handle: handle.into(),
        });
        self
    }

    /// Sets the analytics descriptor.
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = Some(analytics);
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_span() -> u32 {
    1
}

/// Page background: a CSS color value or an image with a blur amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Background {
    Image {
        url: String,
        #[serde(default)]
        blur: u8,
    },
    Color(String),
}

impl Default for Background {
    fn default() -> Self {
        Background::Color("#f3f4f6".to_string())
    }
}

/// Avatar presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStyle {
    #[serde(default)]
    pub shape: AvatarShape,
    #[serde(default)]
    pub border: bool,
    #[serde(default = "default_true")]
    pub shadow: bool,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            shape: AvatarShape::Circle,
            border: false,
            shadow: true,
        }
    }
}

/// Avatar shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    #[default]
    Circle,
    Rounded,
    Square,
}

impl AvatarShape {
    /// Returns the CSS class suffix for this shape.
    pub fn css_class(&self) -> &'static str {
        match self {
            AvatarShape::Circle => "avatar-circle",
            AvatarShape::Rounded => "avatar-rounded",
            AvatarShape::Square => "avatar-square",
        }
    }
}

/// A social account shown in the profile header icon row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub platform: String,
    pub handle: String,
}

/// Analytics beacon configuration.
///
/// Analytics code is emitted into the runtime script only when
/// [`AnalyticsConfig::is_active`] holds; otherwise the exported page ships
/// no analytics code at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub site_id: String,
}

impl AnalyticsConfig {
    /// Creates an enabled analytics descriptor.
    pub fn new(endpoint: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self {
            enabled: true,
            endpoint: endpoint.into(),
            site_id: site_id.into(),
        }
    }

    /// Returns true when beacons should be emitted: the flag is on and both
    /// an HTTPS endpoint and a site identifier are present.
    pub fn is_active(&self) -> bool {
        self.enabled && self.endpoint.starts_with("https://") && !self.site_id.trim().is_empty()
    }
}

/// One tile in the grid: position/size plus a typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Stable identifier assigned by the editor; unique within a site.
    pub id: String,
    #[serde(default = "default_span")]
    pub col_span: u32,
    #[serde(default = "default_span")]
    pub row_span: u32,
    /// Explicit 1-based grid column start; absent blocks are auto-placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<u32>,
    /// Explicit 1-based grid row start; absent blocks are auto-placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Named background swatch token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Raw CSS background value; wins over the swatch token when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background: Option<String>,
    /// Text color token (`light`, `dark`, `muted`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    fn with_kind(kind: BlockKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            col_span: 1,
            row_span: 1,
            grid_column: None,
            grid_row: None,
            z_index: None,
            background: None,
            custom_background: None,
            text_color: None,
            kind,
        }
    }

    /// Creates a link tile.
    pub fn link(content: impl Into<String>, title: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Link {
            content: content.into(),
            title: title.into(),
            subtext: String::new(),
            image_url: None,
        })
    }

    /// Creates a text tile.
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Text {
            title: title.into(),
            subtext: String::new(),
            content: content.into(),
        })
    }

    /// Creates a media tile.
    pub fn media(image_url: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Media {
            image_url: Some(image_url.into()),
            media_position: None,
        })
    }

    /// Creates a social profile tile.
    pub fn social(platform: impl Into<String>, handle: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Social {
            social_platform: platform.into(),
            social_handle: handle.into(),
            channel_id: None,
            youtube_mode: None,
            videos: Vec::new(),
            channel_title: None,
        })
    }

    /// Creates a YouTube feed tile for the given channel.
    pub fn youtube_feed(channel_id: impl Into<String>, mode: YoutubeMode) -> Self {
        Self::with_kind(BlockKind::Social {
            social_platform: "youtube".to_string(),
            social_handle: String::new(),
            channel_id: Some(channel_id.into()),
            youtube_mode: Some(mode),
            videos: Vec::new(),
            channel_title: None,
        })
    }

    /// Creates a compact social icon tile.
    pub fn social_icon(platform: impl Into<String>, handle: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::SocialIcon {
            social_platform: platform.into(),
            social_handle: handle.into(),
        })
    }

    /// Creates a map tile for a free-text location.
    pub fn map(location: impl Into<String>) -> Self {
        Self::with_kind(BlockKind::Map {
            content: location.into(),
        })
    }

    /// Creates an empty spacer tile.
    pub fn spacer() -> Self {
        Self::with_kind(BlockKind::Spacer)
    }

    /// Sets a specific ID for this block (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the column and row span.
    pub fn with_span(mut self, col_span: u32, row_span: u32) -> Self {
        self.col_span = col_span;
        self.row_span = row_span;
        self
    }

    /// Pins the block to an explicit grid position (1-based).
    pub fn at(mut self, grid_column: u32, grid_row: u32) -> Self {
        self.grid_column = Some(grid_column);
        self.grid_row = Some(grid_row);
        self
    }

    /// Sets the named background swatch token.
    pub fn with_background(mut self, token: impl Into<String>) -> Self {
        self.background = Some(token.into());
        self
    }

    /// Sets a raw CSS background value (wins over the swatch token).
    pub fn with_custom_background(mut self, value: impl Into<String>) -> Self {
        self.custom_background = Some(value.into());
        self
    }

    /// Sets the text color token.
    pub fn with_text_color(mut self, token: impl Into<String>) -> Self {
        self.text_color = Some(token.into());
        self
    }

    /// Sets the stacking order.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Sets the subtext line on link and text tiles; no-op elsewhere.
    pub fn with_subtext(mut self, value: impl Into<String>) -> Self {
        match &mut self.kind {
            BlockKind::Link { subtext, .. } | BlockKind::Text { subtext, .. } => {
                *subtext = value.into();
            }
            _ => {}
        }
        self
    }

    /// Sets the image on link and media tiles; no-op elsewhere.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        match &mut self.kind {
            BlockKind::Link { image_url, .. } | BlockKind::Media { image_url, .. } => {
                *image_url = Some(url.into());
            }
            _ => {}
        }
        self
    }

    /// Replaces the cached video summaries on a social tile; no-op elsewhere.
    pub fn with_videos(mut self, cached: Vec<VideoSummary>) -> Self {
        if let BlockKind::Social { videos, .. } = &mut self.kind {
            *videos = cached;
        }
        self
    }

    /// Sets the resolved channel title on a social tile; no-op elsewhere.
    pub fn with_channel_title(mut self, title: impl Into<String>) -> Self {
        if let BlockKind::Social { channel_title, .. } = &mut self.kind {
            *channel_title = Some(title.into());
        }
        self
    }
}

/// Typed block payload, discriminated on `type` in the JSON model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "LINK", rename_all = "camelCase")]
    Link {
        /// Destination URL.
        #[serde(default)]
        content: String,
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtext: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    #[serde(rename = "TEXT", rename_all = "camelCase")]
    Text {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtext: String,
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "MEDIA", rename_all = "camelCase")]
    Media {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        /// Percentage anchor for CSS `object-position`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media_position: Option<MediaPosition>,
    },
    #[serde(rename = "SOCIAL", rename_all = "camelCase")]
    Social {
        #[serde(default)]
        social_platform: String,
        #[serde(default)]
        social_handle: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel_id: Option<String>,
        /// When set, the tile renders a YouTube feed instead of a profile.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        youtube_mode: Option<YoutubeMode>,
        /// Cached video summaries (at most four are rendered).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        videos: Vec<VideoSummary>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel_title: Option<String>,
    },
    #[serde(rename = "SOCIAL_ICON", rename_all = "camelCase")]
    SocialIcon {
        #[serde(default)]
        social_platform: String,
        #[serde(default)]
        social_handle: String,
    },
    #[serde(rename = "MAP", rename_all = "camelCase")]
    Map {
        /// Free-text location query; never parsed as a URL.
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "SPACER")]
    Spacer,
}

impl BlockKind {
    /// Returns the CSS class suffix for this block kind.
    pub fn css_class(&self) -> &'static str {
        match self {
            BlockKind::Link { .. } => "link",
            BlockKind::Text { .. } => "text",
            BlockKind::Media { .. } => "media",
            BlockKind::Social { .. } => "social",
            BlockKind::SocialIcon { .. } => "social-icon",
            BlockKind::Map { .. } => "map",
            BlockKind::Spacer => "spacer",
        }
    }

    /// Returns true for spacer tiles.
    pub fn is_spacer(&self) -> bool {
        matches!(self, BlockKind::Spacer)
    }

    /// Returns true when this tile renders a YouTube feed.
    pub fn is_youtube_feed(&self) -> bool {
        matches!(
            self,
            BlockKind::Social {
                youtube_mode: Some(_),
                ..
            }
        )
    }
}

/// Percentage anchor for media tiles (`object-position`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaPosition {
    pub x: f32,
    pub y: f32,
}

impl MediaPosition {
    /// Clamps both components into the 0..=100 percentage range.
    pub fn clamped(&self) -> (f32, f32) {
        (self.x.clamp(0.0, 100.0), self.y.clamp(0.0, 100.0))
    }
}

/// YouTube feed layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YoutubeMode {
    /// One embedded player for the latest video.
    Single,
    /// Two-column thumbnail grid.
    Grid,
    /// Vertical list of thumbnail rows.
    List,
}

impl YoutubeMode {
    /// Returns the wire name used in data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            YoutubeMode::Single => "single",
            YoutubeMode::Grid => "grid",
            YoutubeMode::List => "list",
        }
    }
}

/// One video entry shared between the editor-side cached feed and the
/// runtime re-fetch path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
}

impl VideoSummary {
    /// Creates a video summary.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail: thumbnail.into(),
        }
    }
}
