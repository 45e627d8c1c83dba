//! The six page sections, in document order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSectionError;

/// Identifier of one vertically stacked region of the page.
///
/// The lowercase name doubles as the DOM id of the section element, so
/// `SectionId::Skills` renders as `<section id="skills">`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Landing block with greeting and portrait
    #[default]
    Hero,
    /// Biography, stats and highlight cards
    About,
    /// Technical skills grouped by category
    Skills,
    /// Work history
    Experience,
    /// Featured projects
    Projects,
    /// Contact details and education
    Contact,
}

impl SectionId {
    /// All sections in the order they appear in the document.
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Sections that have an entry in the navigation bar.
    pub const NAVIGABLE: [SectionId; 5] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label, `None` for the hero which is reached via the brand.
    pub const fn nav_label(self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            SectionId::About => Some("About"),
            SectionId::Skills => Some("Skills"),
            SectionId::Experience => Some("Experience"),
            SectionId::Projects => Some("Projects"),
            SectionId::Contact => Some("Contact"),
        }
    }

    /// Position in [`SectionId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_order_matches_index() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn nav_labels_lowercase_to_dom_ids() {
        for id in SectionId::NAVIGABLE {
            let label = id.nav_label().expect("navigable sections have labels");
            assert_eq!(label.to_lowercase(), id.as_str());
        }
        assert_eq!(SectionId::Hero.nav_label(), None);
    }

    #[test]
    fn parses_labels_and_ids() {
        assert_eq!("Experience".parse::<SectionId>(), Ok(SectionId::Experience));
        assert_eq!(" contact ".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!("hero".parse::<SectionId>(), Ok(SectionId::Hero));
    }

    #[test]
    fn rejects_unknown_section() {
        let err = "blog".parse::<SectionId>().unwrap_err();
        assert_eq!(err, ParseSectionError("blog".into()));
        assert!(err.to_string().contains("unknown section `blog`"));
    }

    #[test]
    fn serde_uses_dom_ids() {
        #[derive(Deserialize)]
        struct Wrapper {
            section: SectionId,
        }
        let parsed: Wrapper = toml::from_str(r#"section = "projects""#).expect("valid toml");
        assert_eq!(parsed.section, SectionId::Projects);
    }
}
