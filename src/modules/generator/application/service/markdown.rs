use crate::generator::application::domain::template::{Sections, TemplateDocument};
use crate::generator::application::service::handles::{github_handle, is_usable_handle};

/// Pure Markdown assembly over a template document. Synchronous, does
/// no I/O, and never fails: every accessor treats missing or partial
/// data as "this part contributes nothing".
pub struct MarkdownGenerator<'a> {
    template: &'a TemplateDocument,
}

const DEFAULT_SECTION_ORDER: [&str; 7] = [
    "aboutMe",
    "skills",
    "githubStats",
    "wakatime",
    "blogPosts",
    "projects",
    "socialLinks",
];

const DEFAULT_TYPING_TEXT: &str = "Welcome to my GitHub Profile";

impl<'a> MarkdownGenerator<'a> {
    pub fn new(template: &'a TemplateDocument) -> Self {
        Self { template }
    }

    /// Header, optional table of contents, then every enabled section
    /// in configured order, blank-line separated and trimmed.
    pub fn generate(&self) -> String {
        let section_order: Vec<String> = match &self.template.customization.section_order {
            Some(order) => order.clone(),
            None => DEFAULT_SECTION_ORDER.iter().map(|s| s.to_string()).collect(),
        };

        let mut markdown = String::new();

        markdown.push_str(&self.generate_header());
        markdown.push_str("\n\n");

        if on(self.template.customization.show_table_of_contents) {
            markdown.push_str(&self.generate_table_of_contents(&section_order));
            markdown.push_str("\n\n");
        }

        for section_name in &section_order {
            let section = self.generate_section(section_name);
            if !section.is_empty() {
                markdown.push_str(&section);
                markdown.push_str("\n\n");
            }
        }

        markdown.trim().to_string()
    }

    fn sections(&self) -> &Sections {
        &self.template.sections
    }

    fn generate_header(&self) -> String {
        let basic_info = &self.sections().basic_info;
        if !on(basic_info.enabled) {
            return String::new();
        }

        let widgets = &self.sections().widgets;
        let mut header = String::new();

        if on(widgets.typing_svg.enabled) {
            let typing_text = text(&widgets.typing_svg.text)
                .or_else(|| text(&basic_info.tagline))
                .unwrap_or(DEFAULT_TYPING_TEXT);
            header.push_str(&format!(
                "![Typing SVG](https://readme-typing-svg.herokuapp.com?font=Fira+Code&pause=1000&color={}&center=true&vCenter=true&width=435&lines={})\n\n",
                self.template.theme.accent_hex(),
                urlencoding::encode(typing_text),
            ));
        }

        if let Some(name) = text(&basic_info.name) {
            header.push_str(&format!("# Hi there 👋, I'm {}\n", name));
        }

        if let Some(tagline) = text(&basic_info.tagline) {
            header.push_str(&format!("## {}\n", tagline));
        }

        let mut metadata = Vec::new();
        if let Some(location) = text(&basic_info.location) {
            metadata.push(format!("📍 {}", location));
        }
        if let Some(pronouns) = text(&basic_info.pronouns) {
            metadata.push(format!("({})", pronouns));
        }
        if !metadata.is_empty() {
            header.push_str(&format!("\n{}\n", metadata.join(" | ")));
        }

        if let Some(focus) = text(&basic_info.current_focus) {
            header.push_str(&format!("\n🔭 Currently working on: **{}**\n", focus));
        }

        if on(widgets.visitor_counter.enabled) {
            // Derived from the GitHub link's last path segment, falling
            // back to the display name with whitespace stripped.
            let username = match text(&self.sections().social_links.github) {
                Some(github) => github.rsplit('/').next().unwrap_or_default().to_string(),
                None => basic_info
                    .name
                    .as_deref()
                    .map(|name| name.split_whitespace().collect::<String>())
                    .unwrap_or_default(),
            };

            if is_usable_handle(&username) {
                header.push_str(&format!(
                    "\n![Visitor Count](https://profile-counter.glitch.me/{}/count.svg)\n",
                    username
                ));
            }
        }

        header
    }

    fn generate_about_me(&self) -> String {
        let about_me = &self.sections().about_me;
        if !on(about_me.enabled) {
            return String::new();
        }

        let mut section = String::from("## 🚀 About Me\n\n");

        if let Some(bio) = text(&about_me.bio) {
            section.push_str(&format!("{}\n\n", bio));
        }

        let learning = items(&about_me.currently_learning);
        if !learning.is_empty() {
            let bolded: Vec<String> = learning.iter().map(|item| format!("**{}**", item)).collect();
            section.push_str(&format!(
                "🌱 I'm currently learning: {}\n\n",
                bolded.join(", ")
            ));
        }

        if let Some(interests) = text(&about_me.collaboration_interests) {
            section.push_str(&format!(
                "👯 I'm looking to collaborate on: {}\n\n",
                interests
            ));
        }

        let fun_facts = items(&about_me.fun_facts);
        if !fun_facts.is_empty() {
            section.push_str("⚡ Fun facts:\n");
            for fact in fun_facts {
                section.push_str(&format!("- {}\n", fact));
            }
        }

        section
    }

    fn generate_skills(&self) -> String {
        let skills = &self.sections().skills;
        if !on(skills.enabled) {
            return String::new();
        }

        let mut section = String::from("## 🛠️ Skills & Technologies\n\n");

        let badge_style = self.template.customization.badge_style();
        let accent = self.template.theme.accent_hex();

        let categories: [(&str, &[String]); 6] = [
            ("Languages", items(&skills.languages)),
            ("Frameworks & Libraries", items(&skills.frameworks)),
            ("Databases", items(&skills.databases)),
            ("Tools & Platforms", items(&skills.tools)),
            ("Cloud Services", items(&skills.cloud)),
            ("DevOps", items(&skills.devops)),
        ];

        for (name, entries) in categories {
            if entries.is_empty() {
                continue;
            }
            section.push_str(&format!("### {}\n\n", name));
            let badges: Vec<String> = entries
                .iter()
                .map(|skill| {
                    format!(
                        "![{}](https://img.shields.io/badge/{}-{}.svg?style={})",
                        skill,
                        skill.replace(' ', "%20"),
                        accent,
                        badge_style,
                    )
                })
                .collect();
            section.push_str(&badges.join(" "));
            section.push_str("\n\n");
        }

        section
    }

    fn generate_projects(&self) -> String {
        let projects = match &self.sections().projects {
            Some(projects) if !projects.is_empty() => projects,
            _ => return String::new(),
        };

        let mut section = String::from("## 📂 Featured Projects\n\n");

        for project in projects {
            section.push_str(&format!(
                "### {}\n\n",
                project.name.as_deref().unwrap_or_default()
            ));

            if let Some(description) = text(&project.description) {
                section.push_str(&format!("{}\n\n", description));
            }

            let tech = items(&project.tech_stack);
            if !tech.is_empty() {
                let inline: Vec<String> = tech.iter().map(|t| format!("`{}`", t)).collect();
                section.push_str(&format!("**Tech Stack:** {}\n\n", inline.join(", ")));
            }

            let mut links = Vec::new();
            if let Some(live) = text(&project.live_url) {
                links.push(format!("[Live Demo]({})", live));
            }
            if let Some(repo) = text(&project.repo_url) {
                links.push(format!("[Repository]({})", repo));
            }
            if !links.is_empty() {
                section.push_str(&links.join(" | "));
                section.push_str("\n\n");
            }

            if let Some(image) = text(&project.image_url) {
                section.push_str(&format!(
                    "![{}]({})\n\n",
                    project.name.as_deref().unwrap_or_default(),
                    image
                ));
            }

            section.push_str("---\n\n");
        }

        section
    }

    fn generate_github_stats(&self) -> String {
        let widgets = &self.sections().widgets;

        // Every stat widget needs a resolvable handle; without one the
        // whole block is suppressed regardless of individual flags.
        let username = match text(&self.sections().social_links.github).and_then(github_handle) {
            Some(username) => username,
            None => return String::new(),
        };

        let mut section = String::from("## 📊 GitHub Statistics\n\n");
        let mut has_stats = false;

        let theme = widgets
            .github_stats
            .theme
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("dark");

        if on(widgets.github_stats.enabled) {
            section.push_str("<div align=\"center\">\n\n");
            section.push_str("### 📈 GitHub Stats\n\n");
            section.push_str(&format!(
                "![GitHub Stats](https://github-readme-stats.vercel.app/api?username={}&show_icons=true&theme={}&hide_border=true&count_private=true)\n\n",
                username, theme
            ));
            section.push_str(
                "*Stats may take a moment to load. If unavailable, the service is temporarily down.*\n\n",
            );
            section.push_str("</div>\n\n");
            has_stats = true;
        }

        if on(widgets.github_streak.enabled) {
            section.push_str("<div align=\"center\">\n\n");
            section.push_str("### 🔥 Contribution Streak\n\n");
            section.push_str(&format!(
                "![GitHub Streak](https://github-readme-streak-stats.herokuapp.com/?user={}&theme={}&hide_border=true)\n\n",
                username, theme
            ));
            section.push_str(
                "*Streak stats may take a moment to load. If unavailable, the service is temporarily down.*\n\n",
            );
            section.push_str("</div>\n\n");
            has_stats = true;
        }

        if on(widgets.top_languages.enabled) {
            let layout = widgets
                .top_languages
                .layout
                .as_deref()
                .filter(|l| !l.is_empty())
                .unwrap_or("compact");
            section.push_str("<div align=\"center\">\n\n");
            section.push_str("### 💻 Most Used Languages\n\n");
            section.push_str(&format!(
                "![Top Languages](https://github-readme-stats.vercel.app/api/top-langs/?username={}&layout={}&theme={}&hide_border=true)\n\n",
                username, layout, theme
            ));
            section.push_str(
                "*Language stats calculated by GitHub and may take time to update.*\n\n",
            );
            section.push_str("</div>\n\n");
            has_stats = true;
        }

        if on(widgets.activity_graph.enabled) {
            let graph_theme = widgets
                .activity_graph
                .theme
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("github");
            section.push_str(&format!(
                "![Activity Graph](https://github-readme-activity-graph.vercel.app/graph?username={}&theme={})\n\n",
                username, graph_theme
            ));
            has_stats = true;
        }

        if on(widgets.trophies.enabled) {
            let trophy_theme = widgets
                .trophies
                .theme
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or("darkhub");
            section.push_str(&format!(
                "![Trophies](https://github-profile-trophy.vercel.app/?username={}&theme={}&no-frame=true&no-bg=true&margin-w=4)\n\n",
                username, trophy_theme
            ));
            has_stats = true;
        }

        if has_stats {
            section
        } else {
            String::new()
        }
    }

    fn generate_wakatime_stats(&self) -> String {
        let wakatime = &self.sections().widgets.wakatime;
        let username = match text(&wakatime.username) {
            Some(username) if on(wakatime.enabled) => username,
            _ => return String::new(),
        };

        let mut section = String::from("## ⏱️ Weekly Development Breakdown\n\n");
        section.push_str("<!-- WAKATIME:START -->\n");
        section.push_str("<!-- This section will be auto-updated by GitHub Actions -->\n");
        section.push_str("<!-- WAKATIME:END -->\n\n");
        section.push_str(&format!(
            "![WakaTime Stats](https://github-readme-stats.vercel.app/api/wakatime?username={}&layout=compact)\n\n",
            username
        ));

        section
    }

    fn generate_blog_posts(&self) -> String {
        if !on(self.sections().widgets.blog_posts.enabled) {
            return String::new();
        }

        let mut section = String::from("## 📝 Latest Blog Posts\n\n");
        section.push_str("<!-- BLOG-POST-LIST:START -->\n");
        section.push_str("<!-- This section will be auto-updated by GitHub Actions -->\n");
        section.push_str("<!-- BLOG-POST-LIST:END -->\n\n");

        section
    }

    fn generate_social_links(&self) -> String {
        let social = &self.sections().social_links;
        if !on(social.enabled) {
            return String::new();
        }

        let badge_style = self.template.customization.badge_style();
        let accent = self.template.theme.accent_hex();

        let platforms: [(&str, &Option<String>, &str); 9] = [
            ("GitHub", &social.github, "github"),
            ("LinkedIn", &social.linkedin, "linkedin"),
            ("Twitter", &social.twitter, "twitter"),
            ("Portfolio", &social.portfolio, "web"),
            ("Dev.to", &social.devto, "devto"),
            ("Medium", &social.medium, "medium"),
            ("Hashnode", &social.hashnode, "hashnode"),
            ("Stack Overflow", &social.stackoverflow, "stackoverflow"),
            ("YouTube", &social.youtube, "youtube"),
        ];

        let configured: Vec<(&str, &str, &str)> = platforms
            .iter()
            .filter_map(|(platform, url, icon)| text(url).map(|url| (*platform, url, *icon)))
            .collect();

        if configured.is_empty() {
            return String::new();
        }

        let mut section = String::from("## 🤝 Connect with Me\n\n");
        for (platform, url, icon) in configured {
            section.push_str(&format!(
                "[![{}](https://img.shields.io/badge/{}-{}.svg?style={}&logo={}&logoColor=white)]({})\n",
                platform, platform, accent, badge_style, icon, url
            ));
        }

        if let Some(email) = text(&social.email) {
            section.push_str(&format!("\n📧 Email: {}\n", email));
        }

        section.push('\n');
        section
    }

    fn generate_section(&self, section_name: &str) -> String {
        match section_name {
            "aboutMe" => self.generate_about_me(),
            "skills" => self.generate_skills(),
            "projects" => self.generate_projects(),
            "githubStats" => self.generate_github_stats(),
            "wakatime" => self.generate_wakatime_stats(),
            "blogPosts" => self.generate_blog_posts(),
            "socialLinks" => self.generate_social_links(),
            _ => String::new(),
        }
    }

    fn generate_table_of_contents(&self, section_order: &[String]) -> String {
        let mut toc = String::from("## 📚 Table of Contents\n\n");

        for section in section_order {
            if let Some(title) = section_title(section) {
                toc.push_str(&format!("- [{}](#{})\n", title, anchor(title)));
            }
        }

        toc
    }
}

fn section_title(section_name: &str) -> Option<&'static str> {
    match section_name {
        "aboutMe" => Some("About Me"),
        "skills" => Some("Skills & Technologies"),
        "projects" => Some("Featured Projects"),
        "githubStats" => Some("GitHub Statistics"),
        "wakatime" => Some("Weekly Development Breakdown"),
        "blogPosts" => Some("Latest Blog Posts"),
        "socialLinks" => Some("Connect with Me"),
        _ => None,
    }
}

/// Markdown anchor of a display title: lowercased, `&` stripped,
/// whitespace runs collapsed to single hyphens.
fn anchor(title: &str) -> String {
    title
        .to_lowercase()
        .replace('&', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn on(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}

/// Non-empty string content, `None` for absent or empty values.
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn items(value: &Option<Vec<String>>) -> &[String] {
    value.as_deref().unwrap_or_default()
}
