pub const BLOG_POST_LIST_START: &str = "<!-- BLOG-POST-LIST:START -->";
pub const BLOG_POST_LIST_END: &str = "<!-- BLOG-POST-LIST:END -->";
pub const GITHUB_ACTIVITY_START: &str = "<!-- GITHUB-ACTIVITY:START -->";
pub const GITHUB_ACTIVITY_END: &str = "<!-- GITHUB-ACTIVITY:END -->";
pub const WAKATIME_START: &str = "<!-- WAKATIME:START -->";
pub const WAKATIME_END: &str = "<!-- WAKATIME:END -->";

/// Replace the span between the first `start` marker and the first
/// `end` marker after it with `body`, keeping both markers. Returns
/// `None` when either marker is missing; later marker pairs are left
/// untouched.
pub fn replace_marker_block(
    content: &str,
    start: &str,
    end: &str,
    body: &str,
) -> Option<String> {
    let start_idx = content.find(start)?;
    let after_start = start_idx + start.len();
    let end_idx = after_start + content[after_start..].find(end)?;

    let mut out = String::with_capacity(content.len() + body.len());
    out.push_str(&content[..after_start]);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
    out.push_str(&content[end_idx..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_span_between_markers() {
        let content = "before\n<!-- WAKATIME:START -->\nold\n<!-- WAKATIME:END -->\nafter";
        let result =
            replace_marker_block(content, WAKATIME_START, WAKATIME_END, "new content").unwrap();
        assert_eq!(
            result,
            "before\n<!-- WAKATIME:START -->\nnew content\n<!-- WAKATIME:END -->\nafter"
        );
    }

    #[test]
    fn only_first_pair_is_rewritten() {
        let content = "<!-- WAKATIME:START -->\na\n<!-- WAKATIME:END -->\n\
                       <!-- WAKATIME:START -->\nb\n<!-- WAKATIME:END -->";
        let result = replace_marker_block(content, WAKATIME_START, WAKATIME_END, "x").unwrap();
        assert_eq!(
            result,
            "<!-- WAKATIME:START -->\nx\n<!-- WAKATIME:END -->\n\
             <!-- WAKATIME:START -->\nb\n<!-- WAKATIME:END -->"
        );
    }

    #[test]
    fn missing_start_marker_is_none() {
        assert!(replace_marker_block("no markers here", WAKATIME_START, WAKATIME_END, "x").is_none());
    }

    #[test]
    fn missing_end_marker_is_none() {
        let content = "<!-- WAKATIME:START -->\ndangling";
        assert!(replace_marker_block(content, WAKATIME_START, WAKATIME_END, "x").is_none());
    }

    #[test]
    fn end_marker_before_start_is_none() {
        let content = "<!-- WAKATIME:END -->\n<!-- WAKATIME:START -->";
        assert!(replace_marker_block(content, WAKATIME_START, WAKATIME_END, "x").is_none());
    }

    #[test]
    fn empty_span_is_filled() {
        let content = "<!-- BLOG-POST-LIST:START --><!-- BLOG-POST-LIST:END -->";
        let result =
            replace_marker_block(content, BLOG_POST_LIST_START, BLOG_POST_LIST_END, "- a post")
                .unwrap();
        assert_eq!(
            result,
            "<!-- BLOG-POST-LIST:START -->\n- a post\n<!-- BLOG-POST-LIST:END -->"
        );
    }
}
