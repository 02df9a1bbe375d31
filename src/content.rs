//! Page content manifest.
//!
//! All copy (hero title, card texts, platform blurb, nav labels) lives in
//! `assets/content.json` so the page can be re-worded without touching code.

use serde::Deserialize;
use std::path::Path;

/// Section anchors the nav can scroll to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Features,
    Platforms,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub tagline: String,
}

/// One feature card. Headings are optional; a card authored without one
/// simply has no decoration on that side.
#[derive(Debug, Clone, Deserialize)]
pub struct CardContent {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub heading_left: Option<String>,
    #[serde(default)]
    pub heading_right: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformsContent {
    pub heading: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub section: SectionId,
}

/// Raw content manifest format
#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub hero: HeroContent,
    #[serde(default)]
    pub cards: Vec<CardContent>,
    pub platforms: PlatformsContent,
    #[serde(default)]
    pub nav: Vec<NavLink>,
}

impl PageContent {
    /// Load the content manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let json_str = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&json_str)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let json = r#"{
            "hero": { "title": "NOVA", "tagline": "tag" },
            "cards": [
                { "title": "A", "body": "a", "heading_left": "L", "heading_right": "R" },
                { "title": "B", "body": "b" }
            ],
            "platforms": { "heading": "H", "tagline": "T" },
            "nav": [ { "label": "Home", "section": "hero" } ]
        }"#;
        let content: PageContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.hero.title, "NOVA");
        assert_eq!(content.cards.len(), 2);
        assert_eq!(content.cards[0].heading_left.as_deref(), Some("L"));
        assert!(content.cards[1].heading_left.is_none());
        assert_eq!(content.nav[0].section, SectionId::Hero);
    }

    #[test]
    fn test_empty_card_list_parses() {
        let json = r#"{
            "hero": { "title": "X", "tagline": "t" },
            "platforms": { "heading": "H", "tagline": "T" }
        }"#;
        let content: PageContent = serde_json::from_str(json).unwrap();
        assert!(content.cards.is_empty());
        assert!(content.nav.is_empty());
    }

    #[test]
    fn test_unknown_section_is_error() {
        let json = r#"{
            "hero": { "title": "X", "tagline": "t" },
            "platforms": { "heading": "H", "tagline": "T" },
            "nav": [ { "label": "Blog", "section": "blog" } ]
        }"#;
        assert!(serde_json::from_str::<PageContent>(json).is_err());
    }
}
