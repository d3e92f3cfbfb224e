use chrono::DateTime;

use crate::feed::application::domain::entities::FeedItem;
use crate::wakatime::application::domain::entities::WeeklyStats;

/// A public event reduced to what the activity list prints.
#[derive(Debug, Clone)]
pub struct ActivityItem {
    pub event_type: String,
    pub repo: String,
    pub created_at: String,
    pub commits: usize,
    pub action: Option<String>,
    pub ref_type: Option<String>,
}

fn short_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .or_else(|_| {
            DateTime::parse_from_rfc2822(raw).map(|d| d.format("%-m/%-d/%Y").to_string())
        })
        .unwrap_or_else(|_| raw.to_string())
}

pub fn render_blog_posts(posts: &[FeedItem]) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                "- [{}]({}) - {}",
                post.title.as_deref().unwrap_or("Untitled"),
                post.link.as_deref().unwrap_or("#"),
                post.pub_date.as_deref().map(short_date).unwrap_or_default(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_github_activity(events: &[ActivityItem]) -> String {
    events
        .iter()
        .take(5)
        .map(|event| {
            let date = short_date(&event.created_at);
            match event.event_type.as_str() {
                "PushEvent" => format!(
                    "- 📝 Pushed {} commit(s) to {} - {}",
                    event.commits, event.repo, date
                ),
                "CreateEvent" => format!(
                    "- ✨ Created {} in {} - {}",
                    event.ref_type.as_deref().unwrap_or("ref"),
                    event.repo,
                    date
                ),
                "IssuesEvent" => format!(
                    "- 🐛 {} issue in {} - {}",
                    event.action.as_deref().unwrap_or("updated"),
                    event.repo,
                    date
                ),
                "PullRequestEvent" => format!(
                    "- 🔀 {} PR in {} - {}",
                    event.action.as_deref().unwrap_or("updated"),
                    event.repo,
                    date
                ),
                "WatchEvent" => format!("- ⭐ Starred {} - {}", event.repo, date),
                other => format!(
                    "- 📌 {} on {} - {}",
                    other.trim_end_matches("Event"),
                    event.repo,
                    date
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_wakatime_stats(stats: &WeeklyStats) -> String {
    let mut lines = vec![
        format!(
            "**Total coding time this week:** {}",
            stats.human_readable_total
        ),
        String::new(),
        "**Languages:**".to_string(),
    ];

    for language in stats.languages.iter().take(5) {
        lines.push(format!(
            "- {}: {} ({:.1}%)",
            language.name, language.text, language.percent
        ));
    }

    lines.join("\n")
}
