use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The full document a user edits to describe their README: named
/// sections, a theme and rendering customization. Every field defaults
/// when absent so a partially-filled form still deserializes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDocument {
    pub sections: Sections,
    pub theme: Theme,
    pub customization: Customization,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    pub basic_info: BasicInfo,
    pub about_me: AboutMe,
    pub skills: Skills,
    pub projects: Option<Vec<Project>>,
    pub social_links: SocialLinks,
    pub widgets: Widgets,
    // Stored and round-tripped; no renderer is registered for these.
    pub work_experience: Option<Vec<WorkExperience>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<Certification>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicInfo {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub location: Option<String>,
    pub pronouns: Option<String>,
    pub current_focus: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutMe {
    pub bio: Option<String>,
    pub fun_facts: Option<Vec<String>>,
    pub currently_learning: Option<Vec<String>>,
    pub collaboration_interests: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub languages: Option<Vec<String>>,
    pub frameworks: Option<Vec<String>>,
    pub databases: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
    pub cloud: Option<Vec<String>>,
    pub devops: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

/// A featured project. The `alias` attributes absorb the legacy field
/// names (`technologies`, `demo`, `github`) still present in older
/// saved documents; serialization always emits the canonical names.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "technologies")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(alias = "demo")]
    pub live_url: Option<String>,
    #[serde(alias = "github")]
    pub repo_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub portfolio: Option<String>,
    pub email: Option<String>,
    pub devto: Option<String>,
    pub hashnode: Option<String>,
    pub medium: Option<String>,
    pub stackoverflow: Option<String>,
    pub youtube: Option<String>,
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Widgets {
    pub github_stats: GithubStatsWidget,
    pub github_streak: GithubStreakWidget,
    pub top_languages: TopLanguagesWidget,
    pub activity_graph: ActivityGraphWidget,
    pub trophies: TrophiesWidget,
    pub wakatime: WakatimeWidget,
    pub blog_posts: BlogPostsWidget,
    pub visitor_counter: VisitorCounterWidget,
    pub typing_svg: TypingSvgWidget,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubStatsWidget {
    pub enabled: Option<bool>,
    pub theme: Option<String>,
    pub show_icons: Option<bool>,
    pub hide_rank: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubStreakWidget {
    pub enabled: Option<bool>,
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TopLanguagesWidget {
    pub enabled: Option<bool>,
    pub layout: Option<String>,
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityGraphWidget {
    pub enabled: Option<bool>,
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TrophiesWidget {
    pub enabled: Option<bool>,
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WakatimeWidget {
    pub enabled: Option<bool>,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostsWidget {
    pub enabled: Option<bool>,
    pub source: Option<String>,
    pub username: Option<String>,
    pub custom_rss_url: Option<String>,
    pub max_posts: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorCounterWidget {
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TypingSvgWidget {
    pub enabled: Option<bool>,
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub credential_url: Option<String>,
}

pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";
pub const DEFAULT_BADGE_STYLE: &str = "for-the-badge";

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub name: Option<String>,
    pub accent_color: Option<String>,
    pub header_style: Option<String>,
}

impl Theme {
    /// Accent color with the default applied, `#` kept.
    pub fn accent_color(&self) -> &str {
        match self.accent_color.as_deref() {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_ACCENT_COLOR,
        }
    }

    /// Accent color as a bare hex literal for query-string embedding.
    pub fn accent_hex(&self) -> String {
        self.accent_color().replace('#', "")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    pub layout: Option<String>,
    pub section_order: Option<Vec<String>>,
    pub alignment: Option<String>,
    pub show_table_of_contents: Option<bool>,
    pub badge_style: Option<String>,
}

impl Customization {
    pub fn badge_style(&self) -> &str {
        match self.badge_style.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_BADGE_STYLE,
        }
    }
}
