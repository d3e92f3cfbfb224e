use std::sync::OnceLock;

use regex::Regex;

/// The placeholder values the form UI seeds links with. A handle that
/// matches one of these must never reach an external image URL.
pub fn is_usable_handle(handle: &str) -> bool {
    !handle.is_empty() && handle != "username"
}

fn github_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"github\.com/([^/]+)").expect("valid regex"))
}

/// Resolve a GitHub handle from a social-link value: the path segment
/// after `github.com/`, or the last `/`-separated segment as fallback.
/// Returns `None` when the resolved handle is empty or a placeholder.
pub fn github_handle(link: &str) -> Option<String> {
    let handle = match github_url_re().captures(link) {
        Some(caps) => caps[1].to_string(),
        None => link.rsplit('/').next().unwrap_or_default().to_string(),
    };

    if is_usable_handle(&handle) {
        Some(handle)
    } else {
        None
    }
}
