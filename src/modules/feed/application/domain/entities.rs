use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub items: Vec<FeedItem>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    pub author: Option<String>,
    pub content_snippet: Option<String>,
    pub categories: Vec<String>,
}

/// Where a blog feed comes from: a platform with a conventional feed
/// URL, or a caller-supplied custom URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogSource {
    Devto,
    Medium,
    Hashnode,
    Custom,
}

impl BlogSource {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "devto" => Some(BlogSource::Devto),
            "medium" => Some(BlogSource::Medium),
            "hashnode" => Some(BlogSource::Hashnode),
            "custom" => Some(BlogSource::Custom),
            _ => None,
        }
    }
}
