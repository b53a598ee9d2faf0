use serde::{Deserialize, Serialize};

/// Simple theme model. Dark is the default palette; light is applied as a
/// class-level token override on the app root.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class for the app root. Dark tokens live on `:root`, so dark needs
    /// no class at all.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light-theme",
        }
    }
}

/// Named regions of the content pane. Exactly one is active at any time,
/// which the type guarantees by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Work,
    About,
}

impl Section {
    /// Derive the active section from scroll geometry: once the top of the
    /// about anchor crosses the vertical midpoint of the viewport, the about
    /// nav entry takes over. No hysteresis; two sections only.
    pub fn from_scroll(about_anchor_top: f64, viewport_height: f64) -> Self {
        if about_anchor_top < viewport_height / 2.0 {
            Section::About
        } else {
            Section::Work
        }
    }

    /// DOM id of the anchor this section scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            Section::Work => "content-top",
            Section::About => "dive-deeper",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::About => "about me",
        }
    }
}

/// Below this width the full layout is replaced by a static notice.
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0;

/// Media query matching [`MOBILE_MAX_WIDTH_PX`], for `window.matchMedia`.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH_PX
}

// ---------- Resume content --------------------------------------------------

/// A sidebar contact entry. External links open in a new tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub external: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentRole {
    pub title: String,
    pub company: String,
    pub company_url: String,
}

/// One work-history entry in the "past" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PastRole {
    pub years: String,
    pub title: String,
    pub company: String,
    pub company_url: String,
    pub summary: String,
    pub tools: String,
}

/// Everything the content pane renders, minus free-form bio paragraphs
/// which stay as literal markup in the view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteContent {
    pub name: String,
    pub current: CurrentRole,
    pub past: Vec<PastRole>,
    pub contacts: Vec<ContactLink>,
    pub copyright: String,
    pub avatar_src: String,
}

pub fn site_content() -> SiteContent {
    SiteContent {
        name: "Esther Xin".into(),
        current: CurrentRole {
            title: "Site Reliability Engineer".into(),
            company: "Citadel Securities".into(),
            company_url: "https://www.citadelsecurities.com/".into(),
        },
        past: vec![
            PastRole {
                years: "2024".into(),
                title: "Software Engineer".into(),
                company: "Rippling".into(),
                company_url: "https://www.rippling.com/".into(),
                summary: "Led the re-architecture of Cloud Developer Environments to launch \
                          in under 3 minutes (down from 30+), reducing error rates by over 80% \
                          and enabling 5x scalability, while strengthening security and \
                          supporting 1,000+ engineers."
                    .into(),
                tools: "Python, Terraform, AWS, Bash, CI/CD, CLI, Datadog".into(),
            },
            PastRole {
                years: "2023".into(),
                title: "Software Engineer".into(),
                company: "ODAIA Inc.".into(),
                company_url: "https://www.odaia.ai/".into(),
                summary: "Improved performance and developer experience by transitioning to a \
                          FastAPI-based architecture, reducing application load times by 20%, \
                          simplifying deployments, and enabling local debugging."
                    .into(),
                tools: "Python, React, MySQL, AWS, FASTAPI".into(),
            },
            PastRole {
                years: "2023".into(),
                title: "Software Engineer".into(),
                company: "League".into(),
                company_url: "https://www.league.com/".into(),
                summary: "Cut $5K monthly infrastructure costs by optimizing resources and \
                          removing duplicate backups. Boosted logging efficiency by 30% and \
                          managed Kubernetes clusters with CI/CD pipelines for large-scale \
                          deployments."
                    .into(),
                tools: "GoLang, Kubernetes, Terraform, Docker, CI/CD, Ansible, \
                        Prometheus/Grafana, Redis"
                    .into(),
            },
            PastRole {
                years: "2021-2022".into(),
                title: "Software Engineer".into(),
                company: "1Password".into(),
                company_url: "https://www.1password.com/".into(),
                summary: "Led development of a single sign-on admin tool that boosted data \
                          visibility for 400+ developers and increased user adoption by 20%. \
                          Designed a new localization workflow and implemented an automated \
                          CI/CD pipeline with a Slack release bot, cutting localization time \
                          by over 50%."
                    .into(),
                tools: "GoLang, React, Typescript, MySQL, CI/CD, REST API".into(),
            },
        ],
        contacts: vec![
            ContactLink {
                label: "email".into(),
                href: "mailto:exin@uwaterloo.ca".into(),
                external: false,
            },
            ContactLink {
                label: "linkedin".into(),
                href: "https://www.linkedin.com/in/estherxin/".into(),
                external: true,
            },
            ContactLink {
                label: "resume".into(),
                href: "https://docs.google.com/document/d/1lkplaoVr1k8Wa-CkWiBfiWhBnmbmePw5w2vDIAOkBC8/edit?usp=sharing"
                    .into(),
                external: true,
            },
        ],
        // Rendered as two lines in the sidebar footer.
        copyright: "© 2025 Esther Xin.\nAll rights reserved.".into(),
        avatar_src: "/profilepic.svg".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_anchor_below_midpoint_keeps_work_active() {
        // Viewport is 600px tall, anchor top sits at 400px: still in work.
        assert_eq!(Section::from_scroll(400.0, 600.0), Section::Work);
        // Exactly at the midpoint counts as work.
        assert_eq!(Section::from_scroll(300.0, 600.0), Section::Work);
    }

    #[test]
    fn about_anchor_above_midpoint_activates_about() {
        assert_eq!(Section::from_scroll(299.0, 600.0), Section::About);
        // Anchor scrolled past the top of the viewport entirely.
        assert_eq!(Section::from_scroll(-1200.0, 600.0), Section::About);
    }

    #[test]
    fn section_defaults_to_work() {
        assert_eq!(Section::default(), Section::Work);
    }

    #[test]
    fn theme_double_toggle_is_identity() {
        for start in [Theme::Dark, Theme::Light] {
            assert_eq!(start.toggled().toggled(), start);
            assert_eq!(
                start.toggled().toggled().class_name(),
                start.class_name()
            );
        }
    }

    #[test]
    fn only_light_theme_carries_a_class() {
        assert_eq!(Theme::Dark.class_name(), "");
        assert_eq!(Theme::Light.class_name(), "light-theme");
    }

    #[test]
    fn mobile_gate_threshold() {
        assert!(is_mobile_width(320.0));
        assert!(is_mobile_width(MOBILE_MAX_WIDTH_PX));
        assert!(!is_mobile_width(MOBILE_MAX_WIDTH_PX + 1.0));
        assert!(!is_mobile_width(1440.0));
    }

    #[test]
    fn content_roundtrip() {
        let content = site_content();
        let json = serde_json::to_string(&content).unwrap();
        let decoded: SiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn content_links_are_well_formed() {
        let content = site_content();
        assert_eq!(content.past.len(), 4);
        assert!(content.current.company_url.starts_with("https://"));
        for role in &content.past {
            assert!(role.company_url.starts_with("https://"));
            assert!(!role.summary.is_empty());
            assert!(!role.tools.is_empty());
        }
        for link in &content.contacts {
            if link.external {
                assert!(link.href.starts_with("https://"));
            }
        }
        assert!(content
            .contacts
            .iter()
            .any(|l| l.href.starts_with("mailto:")));
    }

    #[test]
    fn copyright_breaks_into_two_lines() {
        let content = site_content();
        let lines: Vec<&str> = content.copyright.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("© "));
        assert_eq!(lines[1], "All rights reserved.");
    }
}
