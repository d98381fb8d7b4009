use url::Url;

/// A social platform entry: label, canonical domain, brand color, and the
/// handle/URL conversions the renderer and editor both consult.
///
/// Entries are resolved through [`platform`], never pattern-matched ad hoc.
pub struct PlatformDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Canonical host, without `www.`.
    pub domain: &'static str,
    /// Additional hosts that identify this platform in pasted URLs.
    pub aliases: &'static [&'static str],
    pub brand_color: &'static str,
    /// Federated platforms accept profile URLs on any instance host; the
    /// extractor validates the host itself.
    federated: bool,
    normalize: fn(&str) -> String,
    build: fn(&str) -> String,
    extract: fn(&Url) -> Option<String>,
    display: fn(&str) -> String,
}

impl PlatformDescriptor {
    /// Canonicalizes user input into a bare handle (leading `@` stripped,
    /// platform-specific cleanup applied).
    pub fn normalize_handle(&self, input: &str) -> String {
        (self.normalize)(input)
    }

    /// Builds the canonical profile URL for a handle.
    ///
    /// Returns an empty string for malformed input, never a partially built
    /// URL; callers treat empty as "omit the link".
    pub fn build_url(&self, handle: &str) -> String {
        let normalized = self.normalize_handle(handle);
        if normalized.is_empty() {
            return String::new();
        }
        (self.build)(&normalized)
    }

    /// Recovers a handle from a pasted profile URL, if the URL belongs to
    /// this platform and has the expected shape.
    pub fn extract_handle_from_url(&self, url: &str) -> Option<String> {
        let parsed = Url::parse(url.trim()).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        if !self.federated && !self.matches_host(parsed.host_str()?) {
            return None;
        }
        (self.extract)(&parsed)
    }

    /// The handle as shown on a tile (usually `@handle`).
    pub fn display_handle(&self, handle: &str) -> String {
        let normalized = self.normalize_handle(handle);
        if normalized.is_empty() {
            return String::new();
        }
        (self.display)(&normalized)
    }

    /// Single-letter badge glyph derived from the label.
    pub fn monogram(&self) -> char {
        self.label
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    fn matches_host(&self, host: &str) -> bool {
        let host = host.strip_prefix("www.").unwrap_or(host);
        host == self.domain
            || host.ends_with(&format!(".{}", self.domain))
            || self.aliases.iter().any(|alias| host == *alias)
    }
}

/// Closed, process-wide registry. Read-only; renders may run concurrently.
static PLATFORMS: [PlatformDescriptor; 16] = [
    PlatformDescriptor {
        id: "x",
        label: "X",
        domain: "x.com",
        aliases: &["twitter.com"],
        brand_color: "#000000",
        federated: false,
        normalize: normalize_basic,
        build: build_x,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "instagram",
        label: "Instagram",
        domain: "instagram.com",
        aliases: &[],
        brand_color: "#E4405F",
        federated: false,
        normalize: normalize_basic,
        build: build_instagram,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "github",
        label: "GitHub",
        domain: "github.com",
        aliases: &[],
        brand_color: "#181717",
        federated: false,
        normalize: normalize_basic,
        build: build_github,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "linkedin",
        label: "LinkedIn",
        domain: "linkedin.com",
        aliases: &[],
        brand_color: "#0A66C2",
        federated: false,
        normalize: normalize_basic,
        build: build_linkedin,
        extract: extract_linkedin,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "youtube",
        label: "YouTube",
        domain: "youtube.com",
        aliases: &["youtu.be"],
        brand_color: "#FF0000",
        federated: false,
        normalize: normalize_basic,
        build: build_youtube,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "tiktok",
        label: "TikTok",
        domain: "tiktok.com",
        aliases: &[],
        brand_color: "#000000",
        federated: false,
        normalize: normalize_basic,
        build: build_tiktok,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "facebook",
        label: "Facebook",
        domain: "facebook.com",
        aliases: &["fb.com"],
        brand_color: "#1877F2",
        federated: false,
        normalize: normalize_basic,
        build: build_facebook,
        extract: extract_first_segment,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "twitch",
        label: "Twitch",
        domain: "twitch.tv",
        aliases: &[],
        brand_color: "#9146FF",
        federated: false,
        normalize: normalize_basic,
        build: build_twitch,
        extract: extract_first_segment,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "substack",
        label: "Substack",
        domain: "substack.com",
        aliases: &[],
        brand_color: "#FF6719",
        federated: false,
        normalize: normalize_substack,
        build: build_substack,
        extract: extract_substack,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "mastodon",
        label: "Mastodon",
        domain: "mastodon.social",
        aliases: &[],
        brand_color: "#6364FF",
        federated: true,
        normalize: normalize_mastodon,
        build: build_mastodon,
        extract: extract_mastodon,
        display: display_at,
    },
    PlatformDescriptor {
        id: "bluesky",
        label: "Bluesky",
        domain: "bsky.app",
        aliases: &[],
        brand_color: "#0285FF",
        federated: false,
        normalize: normalize_basic,
        build: build_bluesky,
        extract: extract_bluesky,
        display: display_at,
    },
    PlatformDescriptor {
        id: "threads",
        label: "Threads",
        domain: "threads.net",
        aliases: &[],
        brand_color: "#000000",
        federated: false,
        normalize: normalize_basic,
        build: build_threads,
        extract: extract_first_segment,
        display: display_at,
    },
    PlatformDescriptor {
        id: "pinterest",
        label: "Pinterest",
        domain: "pinterest.com",
        aliases: &[],
        brand_color: "#BD081C",
        federated: false,
        normalize: normalize_basic,
        build: build_pinterest,
        extract: extract_first_segment,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "reddit",
        label: "Reddit",
        domain: "reddit.com",
        aliases: &[],
        brand_color: "#FF4500",
        federated: false,
        normalize: normalize_basic,
        build: build_reddit,
        extract: extract_reddit,
        display: display_reddit,
    },
    PlatformDescriptor {
        id: "spotify",
        label: "Spotify",
        domain: "spotify.com",
        aliases: &["open.spotify.com"],
        brand_color: "#1DB954",
        federated: false,
        normalize: normalize_basic,
        build: build_spotify,
        extract: extract_spotify,
        display: display_plain,
    },
    PlatformDescriptor {
        id: "dribbble",
        label: "Dribbble",
        domain: "dribbble.com",
        aliases: &[],
        brand_color: "#EA4C89",
        federated: false,
        normalize: normalize_basic,
        build: build_dribbble,
        extract: extract_first_segment,
        display: display_at,
    },
];

/// Looks up a platform descriptor by id (case-insensitive).
pub fn platform(id: &str) -> Option<&'static PlatformDescriptor> {
    PLATFORMS.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

/// All registered platforms in display order.
pub fn platforms() -> &'static [PlatformDescriptor] {
    &PLATFORMS
}

/// Best-effort platform classification for a pasted URL.
///
/// Advisory only: used to pre-select a platform in the editor, never to
/// override an explicit user selection.
pub fn infer_platform_from_url(url: &str) -> Option<&'static str> {
    let parsed = Url::parse(url.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    let host = parsed.host_str()?;
    PLATFORMS
        .iter()
        .find(|p| p.matches_host(host))
        .map(|p| p.id)
}

// Handle normalizers.

fn normalize_basic(input: &str) -> String {
    let trimmed = input.trim();
    let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
    if is_plain_handle(bare) {
        bare.to_string()
    } else {
        String::new()
    }
}

/// Mastodon handles keep the `user@instance` form; a single leading `@` is
/// stripped (`@user@instance` and `user@instance` are equivalent input).
fn normalize_mastodon(input: &str) -> String {
    let trimmed = input.trim();
    let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
    match bare.split_once('@') {
        Some((user, instance)) if is_plain_handle(user) && is_instance(instance) => {
            format!("{user}@{instance}")
        }
        None if is_plain_handle(bare) => bare.to_string(),
        _ => String::new(),
    }
}

/// Substack accepts the bare subdomain; a pasted `name.substack.com` is
/// reduced to `name`.
fn normalize_substack(input: &str) -> String {
    let trimmed = input.trim();
    let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);
    let bare = bare.strip_suffix(".substack.com").unwrap_or(bare);
    if is_plain_handle(bare) {
        bare.to_string()
    } else {
        String::new()
    }
}

fn is_plain_handle(handle: &str) -> bool {
    !handle.is_empty()
        && handle.len() <= 100
        && handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

fn is_instance(host: &str) -> bool {
    host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
}

// URL builders. Inputs are already normalized and non-empty.

fn build_x(h: &str) -> String {
    format!("https://x.com/{h}")
}

fn build_instagram(h: &str) -> String {
    format!("https://www.instagram.com/{h}")
}

fn build_github(h: &str) -> String {
    format!("https://github.com/{h}")
}

fn build_linkedin(h: &str) -> String {
    format!("https://www.linkedin.com/in/{h}")
}

fn build_youtube(h: &str) -> String {
    format!("https://www.youtube.com/@{h}")
}

fn build_tiktok(h: &str) -> String {
    format!("https://www.tiktok.com/@{h}")
}

fn build_facebook(h: &str) -> String {
    format!("https://www.facebook.com/{h}")
}

fn build_twitch(h: &str) -> String {
    format!("https://www.twitch.tv/{h}")
}

fn build_substack(h: &str) -> String {
    format!("https://{h}.substack.com")
}

fn build_mastodon(h: &str) -> String {
    match h.split_once('@') {
        Some((user, instance)) => format!("https://{instance}/@{user}"),
        // A bare handle defaults to the flagship instance.
        None => format!("https://mastodon.social/@{h}"),
    }
}

fn build_bluesky(h: &str) -> String {
    format!("https://bsky.app/profile/{h}")
}

fn build_threads(h: &str) -> String {
    format!("https://www.threads.net/@{h}")
}

fn build_pinterest(h: &str) -> String {
    format!("https://www.pinterest.com/{h}")
}

fn build_reddit(h: &str) -> String {
    format!("https://www.reddit.com/user/{h}")
}

fn build_spotify(h: &str) -> String {
    format!("https://open.spotify.com/user/{h}")
}

fn build_dribbble(h: &str) -> String {
    format!("https://dribbble.com/{h}")
}

// Handle extractors for pasted profile URLs.

fn extract_first_segment(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.find(|s| !s.is_empty())?;
    let handle = segment.strip_prefix('@').unwrap_or(segment);
    is_plain_handle(handle).then(|| handle.to_string())
}

fn extract_second_segment(url: &Url, first: &str) -> Option<String> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    if segments.next()? != first {
        return None;
    }
    let handle = segments.next()?;
    is_plain_handle(handle).then(|| handle.to_string())
}

fn extract_linkedin(url: &Url) -> Option<String> {
    extract_second_segment(url, "in")
}

fn extract_reddit(url: &Url) -> Option<String> {
    extract_second_segment(url, "user").or_else(|| extract_second_segment(url, "u"))
}

fn extract_bluesky(url: &Url) -> Option<String> {
    extract_second_segment(url, "profile")
}

fn extract_spotify(url: &Url) -> Option<String> {
    extract_second_segment(url, "user")
}

fn extract_substack(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let sub = host.strip_suffix(".substack.com")?;
    let sub = sub.strip_prefix("www.").unwrap_or(sub);
    is_plain_handle(sub).then(|| sub.to_string())
}

fn extract_mastodon(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let segment = url.path_segments()?.find(|s| !s.is_empty())?;
    let user = segment.strip_prefix('@')?;
    (is_plain_handle(user) && is_instance(host)).then(|| format!("{user}@{host}"))
}

// Display formatters.

fn display_at(h: &str) -> String {
    format!("@{h}")
}

fn display_plain(h: &str) -> String {
    h.to_string()
}

fn display_reddit(h: &str) -> String {
    format!("u/{h}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_strips_leading_at() {
        let x = platform("x").unwrap();
        assert_eq!(x.build_url("@jane"), "https://x.com/jane");
        assert_eq!(x.display_handle("@jane"), "@jane");
    }

    #[test]
    fn test_malformed_handles_build_empty_url() {
        let x = platform("x").unwrap();
        assert_eq!(x.build_url(""), "");
        assert_eq!(x.build_url("   "), "");
        assert_eq!(x.build_url("jane doe"), "");
        assert_eq!(x.build_url("jane\"><script>"), "");
    }

    #[test]
    fn test_mastodon_user_at_instance() {
        let mastodon = platform("mastodon").unwrap();
        assert_eq!(
            mastodon.build_url("@jane@hachyderm.io"),
            "https://hachyderm.io/@jane"
        );
        assert_eq!(mastodon.build_url("jane"), "https://mastodon.social/@jane");
        assert_eq!(mastodon.build_url("jane@not a host"), "");
    }

    #[test]
    fn test_substack_bare_subdomain() {
        let substack = platform("substack").unwrap();
        assert_eq!(substack.normalize_handle("jane.substack.com"), "jane");
        assert_eq!(substack.build_url("jane"), "https://jane.substack.com");
        assert_eq!(substack.display_handle("jane.substack.com"), "jane");
    }

    #[test]
    fn test_extract_handle_from_url() {
        let github = platform("github").unwrap();
        assert_eq!(
            github.extract_handle_from_url("https://github.com/janedoe"),
            Some("janedoe".to_string())
        );

        let linkedin = platform("linkedin").unwrap();
        assert_eq!(
            linkedin.extract_handle_from_url("https://www.linkedin.com/in/jane-doe"),
            Some("jane-doe".to_string())
        );

        let reddit = platform("reddit").unwrap();
        assert_eq!(
            reddit.extract_handle_from_url("https://www.reddit.com/user/jane"),
            Some("jane".to_string())
        );

        let substack = platform("substack").unwrap();
        assert_eq!(
            substack.extract_handle_from_url("https://jane.substack.com"),
            Some("jane".to_string())
        );

        let mastodon = platform("mastodon").unwrap();
        assert_eq!(
            mastodon.extract_handle_from_url("https://hachyderm.io/@jane"),
            Some("jane@hachyderm.io".to_string())
        );

        // Wrong domain for the platform yields nothing.
        assert_eq!(github.extract_handle_from_url("https://x.com/janedoe"), None);
        // Unsafe scheme yields nothing.
        assert_eq!(github.extract_handle_from_url("javascript:alert(1)"), None);
    }

    #[test]
    fn test_infer_platform_from_url() {
        assert_eq!(infer_platform_from_url("https://x.com/jane"), Some("x"));
        assert_eq!(
            infer_platform_from_url("https://twitter.com/jane"),
            Some("x")
        );
        assert_eq!(
            infer_platform_from_url("https://www.instagram.com/jane"),
            Some("instagram")
        );
        assert_eq!(
            infer_platform_from_url("https://jane.substack.com"),
            Some("substack")
        );
        assert_eq!(infer_platform_from_url("https://example.com/jane"), None);
        assert_eq!(infer_platform_from_url("not a url"), None);
    }

    #[test]
    fn test_platform_lookup_is_case_insensitive() {
        assert!(platform("GitHub").is_some());
        assert!(platform("nope").is_none());
    }

    #[test]
    fn test_monograms() {
        assert_eq!(platform("github").unwrap().monogram(), 'G');
        assert_eq!(platform("x").unwrap().monogram(), 'X');
    }
}
