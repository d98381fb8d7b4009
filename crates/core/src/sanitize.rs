//! Injection-safety primitives.
//!
//! Every user-supplied string crosses one of these gates before it reaches
//! markup text, an attribute value, a URL context, or a CSS declaration.
//! Invalid input never errors: it degrades to omission or a benign
//! placeholder so export always succeeds for any stored model.

use url::Url;

/// Schemes that may not lead a map location query, checked case-insensitively.
const FORBIDDEN_LOCATION_PREFIXES: [&str; 6] = [
    "javascript:",
    "data:",
    "vbscript:",
    "file:",
    "about:",
    "blob:",
];

/// Escapes the five HTML-significant characters to entity references.
///
/// Applied to every user string at its interpolation point, exactly once.
/// Unescaping the result recovers the original string.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Returns true only for absolute `http` or `https` URLs.
///
/// # Security
///
/// This is the gate for every `href`, `src`, and CSS `url(...)` value.
/// Relative URLs, custom schemes (`javascript:`, `data:`, …) and unparsable
/// strings all fail.
pub fn is_safe_url(input: &str) -> bool {
    match Url::parse(input.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns the canonicalized URL when [`is_safe_url`] holds, else the empty
/// string. Callers must treat an empty result as "omit the attribute",
/// never as "use a fallback literal URL".
pub fn sanitize_url(input: &str) -> String {
    match Url::parse(input.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.to_string(),
        _ => String::new(),
    }
}

/// Wraps a sanitized URL for a CSS `url('...')` context, percent-encoding
/// the characters that could terminate the token.
pub fn css_url(url: &str) -> String {
    url.replace('\\', "%5C")
        .replace('\'', "%27")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace(' ', "%20")
}

/// Gates free-text map locations, which are interpolated into an embed query
/// rather than parsed as URLs.
///
/// Rejects empty strings, control characters, and anything that starts with
/// a scriptable scheme prefix (case-insensitive).
pub fn is_valid_location_string(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        return false;
    }
    let lowered = trimmed.to_ascii_lowercase();
    !FORBIDDEN_LOCATION_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Returns true for a canonical YouTube channel id: `UC` followed by exactly
/// 22 characters of `[A-Za-z0-9_-]`.
///
/// # Security
///
/// Channel ids are interpolated into embed URLs and `data-*` attributes read
/// by the runtime script; the strict character class prevents attribute
/// breakout via a crafted id.
pub fn is_valid_youtube_channel_id(input: &str) -> bool {
    input.len() == 24 && input.starts_with("UC") && input[2..].chars().all(is_id_char)
}

/// Returns true for a canonical YouTube video id: exactly 11 characters of
/// `[A-Za-z0-9_-]`.
pub fn is_valid_youtube_video_id(input: &str) -> bool {
    input.len() == 11 && input.chars().all(is_id_char)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns true for an inline-encoded image: `data:image/<subtype>;base64,`
/// followed by a clean base64 payload.
///
/// These are the only `data:` URIs the renderer accepts, and only for
/// avatar and image sources (never for links).
pub fn is_data_image_uri(input: &str) -> bool {
    let Some(rest) = input.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '.' || c == '-')
        && !payload.is_empty()
        && payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
}

/// Gates raw CSS values (custom block backgrounds, colors) before they enter
/// a `style` attribute.
///
/// Returns the trimmed value when it cannot escape the declaration: no
/// braces, semicolons, angle brackets, backslashes, control characters, and
/// no `url(` fetch smuggling.
pub fn css_value(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.chars().any(|c| {
            c.is_control() || matches!(c, ';' | '{' | '}' | '<' | '>' | '\\' | '"' | '\'')
        })
        || trimmed.to_ascii_lowercase().contains("url(")
    {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_round_trip() {
        let input = "Tom & \"Jerry\" <script>alert('hi')</script>";
        let escaped = escape_html(input);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert_eq!(
            escaped,
            "Tom &amp; &quot;Jerry&quot; &lt;script&gt;alert(&#x27;hi&#x27;)&lt;/script&gt;"
        );

        let unescaped = escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#x27;", "'")
            .replace("&amp;", "&");
        assert_eq!(unescaped, input);
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("https://example.com/page?a=1"));
        assert!(is_safe_url("http://example.com"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("data:text/html,<script>"));
        assert!(!is_safe_url("ftp://example.com/file"));
        assert!(!is_safe_url("/relative/path"));
        assert!(!is_safe_url(""));
    }

    #[test]
    fn test_sanitize_url_empty_for_unsafe() {
        assert_eq!(sanitize_url("javascript:alert(1)"), "");
        assert_eq!(sanitize_url("not a url"), "");
        assert_eq!(
            sanitize_url("https://example.com/path"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_location_string_rejects_scriptable_prefixes() {
        assert!(is_valid_location_string("Lisbon, Portugal"));
        assert!(is_valid_location_string("221B Baker Street"));
        assert!(!is_valid_location_string("javascript:alert(1)"));
        assert!(!is_valid_location_string("  DATA:text/html,<script>"));
        assert!(!is_valid_location_string("vbscript:x"));
        assert!(!is_valid_location_string("file:///etc/passwd"));
        assert!(!is_valid_location_string("about:blank"));
        assert!(!is_valid_location_string("blob:https://x"));
        assert!(!is_valid_location_string(""));
        assert!(!is_valid_location_string("line\nbreak"));
    }

    #[test]
    fn test_youtube_channel_id() {
        assert!(is_valid_youtube_channel_id("UCBa659QWEk1AI4Tg--mrJ2A"));
        assert!(!is_valid_youtube_channel_id("UCshort"));
        assert!(!is_valid_youtube_channel_id("XXBa659QWEk1AI4Tg--mrJ2A"));
        assert!(!is_valid_youtube_channel_id("UCBa659QWEk1AI4Tg--mrJ\">"));
        assert!(!is_valid_youtube_channel_id(""));
    }

    #[test]
    fn test_youtube_video_id() {
        assert!(is_valid_youtube_video_id("dQw4w9WgXcQ"));
        assert!(is_valid_youtube_video_id("9bZkp7q19f0"));
        assert!(!is_valid_youtube_video_id("tooshort"));
        assert!(!is_valid_youtube_video_id("with space x"));
        assert!(!is_valid_youtube_video_id("\"onerror=x\""));
    }

    #[test]
    fn test_data_image_uri() {
        assert!(is_data_image_uri(
            "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg=="
        ));
        assert!(is_data_image_uri("data:image/svg+xml;base64,PHN2Zz48L3N2Zz4="));
        assert!(!is_data_image_uri("data:text/html;base64,PHNjcmlwdD4="));
        assert!(!is_data_image_uri("data:image/png;base64,not%20base64!"));
        assert!(!is_data_image_uri("data:image/png,plain"));
        assert!(!is_data_image_uri("https://example.com/a.png"));
    }

    #[test]
    fn test_css_value() {
        assert_eq!(css_value("#10b981"), Some("#10b981"));
        assert_eq!(
            css_value("linear-gradient(135deg, #fda085, #f6d365)"),
            Some("linear-gradient(135deg, #fda085, #f6d365)")
        );
        assert_eq!(css_value("red; position: fixed"), None);
        assert_eq!(css_value("url(https://evil.example/x)"), None);
        assert_eq!(css_value("</style><script>"), None);
        assert_eq!(css_value(""), None);
    }

    #[test]
    fn test_css_url_encodes_terminators() {
        assert_eq!(
            css_url("https://example.com/a('b').png"),
            "https://example.com/a%28%27b%27%29.png"
        );
    }
}
