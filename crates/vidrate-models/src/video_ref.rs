//! Video reference extraction from user-pasted URLs.
//!
//! Supported shapes:
//! - https://youtu.be/VIDEO_ID
//! - https://youtube.com/watch?v=VIDEO_ID (with `www.` or `m.` prefix)
//! - https://youtube.com/embed/VIDEO_ID
//! - https://youtube.com/shorts/VIDEO_ID
//! - any subdomain of youtube.com using the same paths
//!
//! URLs are untrusted input. Extraction never panics; anything that is not
//! recognised yields `None`.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum accepted URL length.
pub const MAX_URL_LENGTH: usize = 2048;

/// Opaque video identifier within the platform's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VideoRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extraction rule selected by normalized host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRule {
    /// `youtu.be/<id>`
    YoutuBe,
    /// `youtube.com/watch?v=<id>`, `/embed/<id>`, `/shorts/<id>`
    YoutubeCom,
}

/// Hosts with an explicit rule, matched after normalization.
const HOST_RULES: &[(&str, HostRule)] = &[
    ("youtu.be", HostRule::YoutuBe),
    ("youtube.com", HostRule::YoutubeCom),
];

/// Path prefixes whose next segment is the video id.
const ID_PATH_PREFIXES: &[&str] = &["/embed/", "/shorts/"];

impl HostRule {
    /// Look up the rule for a normalized host.
    ///
    /// Hosts outside the table fall back to the `youtube.com` rule only when
    /// they are a subdomain of it (`music.youtube.com`), never on substring
    /// containment (`youtube.com.evil.tld`).
    pub fn for_host(host: &str) -> Option<Self> {
        if let Some((_, rule)) = HOST_RULES.iter().find(|(name, _)| *name == host) {
            return Some(*rule);
        }

        if host.ends_with(".youtube.com") {
            return Some(HostRule::YoutubeCom);
        }

        None
    }

    fn extract(self, url: &Url) -> Option<String> {
        match self {
            HostRule::YoutuBe => first_segment(url.path().strip_prefix('/')?),
            HostRule::YoutubeCom => {
                let path = url.path();
                if path == "/watch" {
                    return url
                        .query_pairs()
                        .find_map(|(key, value)| (key == "v").then(|| value.into_owned()));
                }

                ID_PATH_PREFIXES
                    .iter()
                    .find_map(|prefix| path.strip_prefix(prefix))
                    .and_then(first_segment)
            }
        }
    }
}

/// Strip one leading `www.` and then one leading `m.` label.
pub fn normalize_host(host: &str) -> &str {
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.strip_prefix("m.").unwrap_or(host)
}

fn first_segment(path: &str) -> Option<String> {
    path.split('/').next().map(str::to_string)
}

/// Extract the video reference from a raw URL string.
///
/// Returns `None` for malformed URLs, unsupported hosts, unsupported paths,
/// and empty identifiers.
///
/// # Examples
/// ```
/// use vidrate_models::video_ref::extract_video_ref;
///
/// let id = extract_video_ref("https://youtu.be/dQw4w9WgXcQ").unwrap();
/// assert_eq!(id.as_str(), "dQw4w9WgXcQ");
/// assert!(extract_video_ref("https://vimeo.com/123").is_none());
/// ```
pub fn extract_video_ref(raw: &str) -> Option<VideoRef> {
    if raw.len() > MAX_URL_LENGTH {
        return None;
    }

    let url = Url::parse(raw).ok()?;
    let host = normalize_host(url.host_str()?);
    let rule = HostRule::for_host(host)?;

    rule.extract(&url)
        .filter(|id| !id.is_empty())
        .map(VideoRef)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(url: &str) -> Option<String> {
        extract_video_ref(url).map(VideoRef::into_inner)
    }

    #[test]
    fn test_supported_shapes() {
        let expected = Some("dQw4w9WgXcQ".to_string());

        assert_eq!(id("https://youtu.be/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://m.youtube.com/watch?v=dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://youtube.com/embed/dQw4w9WgXcQ"), expected);
        assert_eq!(id("https://youtube.com/shorts/dQw4w9WgXcQ"), expected);
    }

    #[test]
    fn test_extra_query_and_segments() {
        assert_eq!(
            id("https://www.youtube.com/watch?feature=share&v=abc&t=30").as_deref(),
            Some("abc")
        );
        assert_eq!(id("https://youtu.be/abc?t=30").as_deref(), Some("abc"));
        assert_eq!(id("https://youtu.be/abc/extra").as_deref(), Some("abc"));
        assert_eq!(id("https://youtube.com/embed/abc/more").as_deref(), Some("abc"));
        assert_eq!(id("https://youtube.com/shorts/abc?feature=share").as_deref(), Some("abc"));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(id("not a url"), None);
        assert_eq!(id("https://vimeo.com/123"), None);
        assert_eq!(id("https://example.com"), None);
        assert_eq!(id(""), None);
    }

    #[test]
    fn test_youtube_paths_without_id() {
        assert_eq!(id("https://www.youtube.com/watch"), None);
        assert_eq!(id("https://www.youtube.com/watch?v="), None);
        assert_eq!(id("https://www.youtube.com/channel/UC123"), None);
        assert_eq!(id("https://www.youtube.com/playlist?list=PL123"), None);
        assert_eq!(id("https://youtube.com/embed/"), None);
        assert_eq!(id("https://youtu.be/"), None);
        // /watch must match exactly
        assert_eq!(id("https://www.youtube.com/watch/abc?v=abc"), None);
    }

    #[test]
    fn test_host_normalization_strips_once() {
        assert_eq!(normalize_host("www.youtube.com"), "youtube.com");
        assert_eq!(normalize_host("m.youtube.com"), "youtube.com");
        assert_eq!(normalize_host("www.m.youtube.com"), "youtube.com");
        assert_eq!(normalize_host("www.www.youtube.com"), "www.youtube.com");
        assert_eq!(normalize_host("m.m.youtube.com"), "m.youtube.com");
    }

    #[test]
    fn test_subdomain_fallback() {
        assert_eq!(id("https://music.youtube.com/watch?v=abc").as_deref(), Some("abc"));
        assert_eq!(id("https://www.www.youtube.com/watch?v=abc").as_deref(), Some("abc"));
        assert_eq!(id("https://gaming.youtube.com/shorts/abc").as_deref(), Some("abc"));
    }

    #[test]
    fn test_lookalike_hosts_rejected() {
        assert_eq!(id("https://youtube.com.evil.tld/watch?v=abc"), None);
        assert_eq!(id("https://notyoutube.com/watch?v=abc"), None);
        assert_eq!(id("https://youtu.be.evil.tld/abc"), None);
    }

    #[test]
    fn test_host_case_is_normalized_by_parser() {
        assert_eq!(id("https://WWW.YOUTUBE.COM/watch?v=abc").as_deref(), Some("abc"));
    }

    #[test]
    fn test_overlong_input() {
        let url = format!("https://youtu.be/{}", "a".repeat(MAX_URL_LENGTH));
        assert_eq!(id(&url), None);
    }

    #[test]
    fn test_host_rule_table() {
        assert_eq!(HostRule::for_host("youtu.be"), Some(HostRule::YoutuBe));
        assert_eq!(HostRule::for_host("youtube.com"), Some(HostRule::YoutubeCom));
        assert_eq!(HostRule::for_host("vimeo.com"), None);
    }

    #[test]
    fn test_video_ref_serializes_transparently() {
        let id = extract_video_ref("https://youtu.be/abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.to_string(), "abc");
    }
}
