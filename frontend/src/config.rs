use log::{warn, Level};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Id of the `<script type="application/json">` element a deployment can use
/// to override the built-in site configuration.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("card width must be positive and gap non-negative (width {width}, gap {gap})")]
    InvalidCardGeometry { width: f64, gap: f64 },
    #[error("at least one section is required")]
    NoSections,
    #[error("section id `{0}` is listed more than once")]
    DuplicateSection(String),
    #[error("only one gallery section is supported")]
    MultipleGalleries,
}

/// Tunables of the scroll-driven behavior. All lengths are CSS pixels.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Bias added to the scroll offset before comparing against section tops.
    pub lead_in: f64,
    pub card_width: f64,
    pub card_gap: f64,
    /// Fraction of the gallery region after which the track stays parked.
    pub threshold: f64,
    /// Viewports this wide or narrower get no horizontal gallery.
    pub mobile_breakpoint: f64,
    pub navbar_offset: f64,
    pub scroll_top_offset: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            lead_in: 200.0,
            card_width: 420.0,
            card_gap: 32.0,
            threshold: 0.85,
            mobile_breakpoint: 768.0,
            navbar_offset: 50.0,
            scroll_top_offset: 300.0,
            parallax_factor: 0.5,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        if !(self.card_width > 0.0 && self.card_gap >= 0.0) {
            return Err(ConfigError::InvalidCardGeometry {
                width: self.card_width,
                gap: self.card_gap,
            });
        }
        Ok(())
    }
}

/// How a section's content is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    #[default]
    Text,
    /// Hosts the horizontal card gallery.
    Gallery,
    Faq,
    Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqConfig {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "ventas@liotcoredesigns.com".to_string(),
            phone: "+52 81 1976 5432".to_string(),
        }
    }
}

/// Everything that differs between deployments of the site.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub sections: Vec<SectionConfig>,
    pub cards: Vec<CardConfig>,
    pub faqs: Vec<FaqConfig>,
    pub contact: ContactConfig,
    pub scroll: ScrollConfig,
}

fn section(id: &str, label: &str, kind: SectionKind, title: &str, body: &str) -> SectionConfig {
    SectionConfig {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        title: title.to_string(),
        body: body.to_string(),
    }
}

fn card(title: &str, description: &str) -> CardConfig {
    CardConfig {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn faq(question: &str, answer: &str) -> FaqConfig {
    FaqConfig {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "LiotCore Designs".to_string(),
            tagline: "Websites that work as hard as you do".to_string(),
            sections: vec![
                section("home", "Home", SectionKind::Hero, "", ""),
                section(
                    "seo-content",
                    "SEO",
                    SectionKind::Text,
                    "Found by the right people",
                    "Every site ships with technical SEO, fast load times and clean markup.",
                ),
                section(
                    "about",
                    "About",
                    SectionKind::Text,
                    "A small studio, start to finish",
                    "Design, development and hosting handled by one team that answers the phone.",
                ),
                section("services", "Services", SectionKind::Gallery, "What we build", ""),
                section(
                    "portfolio",
                    "Portfolio",
                    SectionKind::Text,
                    "Recent work",
                    "Corporate sites, online stores and internal tools for businesses across Mexico.",
                ),
                section(
                    "pricing",
                    "Pricing",
                    SectionKind::Faq,
                    "Clear quotes",
                    "Fixed-price proposals after a free consultation. No surprise invoices.",
                ),
                section(
                    "contact",
                    "Contact",
                    SectionKind::Contact,
                    "Let's talk",
                    "Tell us about your project and we will reply within one business day.",
                ),
            ],
            cards: vec![
                card("Corporate websites", "A professional presence that explains what you do in seconds."),
                card("Online stores", "Catalog, checkout and payments ready to sell from day one."),
                card("Web systems", "Booking, inventory and dashboards tailored to how you work."),
                card("SEO and performance", "Audits and fixes that move you up the results page."),
                card("Maintenance", "Updates, backups and monitoring so the site keeps running."),
            ],
            faqs: vec![
                faq(
                    "How long does a website take?",
                    "Most corporate sites launch in two to four weeks once content is ready.",
                ),
                faq(
                    "Do you provide hosting?",
                    "Yes. We can host the site for you or deploy to the provider you already use.",
                ),
                faq(
                    "Can I edit the content myself?",
                    "Every project includes a short training session and an editor for your pages.",
                ),
            ],
            contact: ContactConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a (possibly partial) config document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection(section.id.clone()));
            }
        }
        let galleries = self
            .sections
            .iter()
            .filter(|s| s.kind == SectionKind::Gallery)
            .count();
        if galleries > 1 {
            return Err(ConfigError::MultipleGalleries);
        }
        self.scroll.validate()
    }

    /// Section ids in page order.
    pub fn section_ids(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.id.clone()).collect()
    }

    /// Reads the override document from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    warn!("Ignoring site config: {}", err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SiteConfig::default().validate().is_ok());
        assert_eq!(SiteConfig::default().section_ids()[0], "home");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "contact": { "phone": "+1 555 0100" }, "scroll": { "lead_in": 120 } }"#,
        )
        .unwrap();

        assert_eq!(config.contact.phone, "+1 555 0100");
        assert_eq!(config.contact.email, "ventas@liotcoredesigns.com");
        assert_eq!(config.scroll.lead_in, 120.0);
        assert_eq!(config.scroll.threshold, 0.85);
        assert_eq!(config.sections.len(), 7);
    }

    #[test]
    fn custom_section_list_replaces_default() {
        let config = SiteConfig::from_json(
            r#"{ "sections": [ { "id": "top", "label": "Top" }, { "id": "work", "label": "Work" } ] }"#,
        )
        .unwrap();

        assert_eq!(config.section_ids(), vec!["top".to_string(), "work".to_string()]);
        assert_eq!(config.sections[1].title, "");
        assert_eq!(config.sections[1].kind, SectionKind::Text);
    }

    #[test]
    fn section_kind_is_lowercase_in_json() {
        let config = SiteConfig::from_json(
            r#"{ "sections": [ { "id": "top", "label": "Top", "kind": "hero" }, { "id": "cards", "label": "Cards", "kind": "gallery" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.sections[0].kind, SectionKind::Hero);
        assert_eq!(config.sections[1].kind, SectionKind::Gallery);
    }

    #[test]
    fn rejects_second_gallery() {
        let err = SiteConfig::from_json(
            r#"{ "sections": [ { "id": "a", "label": "A", "kind": "gallery" }, { "id": "b", "label": "B", "kind": "gallery" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MultipleGalleries));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let err = SiteConfig::from_json(r#"{ "scroll": { "threshold": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(t) if t == 0.0));

        let err = SiteConfig::from_json(r#"{ "scroll": { "threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThreshold(_)));
    }

    #[test]
    fn rejects_bad_card_geometry() {
        let err = SiteConfig::from_json(r#"{ "scroll": { "card_gap": -4 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCardGeometry { .. }));
    }

    #[test]
    fn rejects_empty_and_duplicate_sections() {
        let err = SiteConfig::from_json(r#"{ "sections": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoSections));

        let err = SiteConfig::from_json(
            r#"{ "sections": [ { "id": "a", "label": "A" }, { "id": "a", "label": "Again" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSection(id) if id == "a"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
