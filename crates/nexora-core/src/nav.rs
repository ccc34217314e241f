//! Page Sections
//!
//! The anchor ids here must match the `id` attributes rendered by the page
//! shell, otherwise navigation has nothing to scroll to.

/// A navigable section of the landing page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Testimonials,
    Contact,
}

/// Header navigation order
pub const NAV_SECTIONS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Services,
    Section::Testimonials,
    Section::Contact,
];

impl Section {
    /// Anchor id of the section element
    pub const fn anchor_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    /// Link target, e.g. `#about`
    pub fn href(self) -> String {
        format!("#{}", self.anchor_id())
    }

    /// Header label: the anchor id with its first letter upper-cased
    pub fn label(self) -> String {
        let id = self.anchor_id();
        let mut chars = id.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Parse an anchor id
    pub fn from_anchor(id: &str) -> Option<Self> {
        NAV_SECTIONS.into_iter().find(|s| s.anchor_id() == id)
    }

    /// Parse a location hash such as `#contact`
    pub fn from_hash(hash: &str) -> Option<Self> {
        Self::from_anchor(hash.strip_prefix('#').unwrap_or(hash))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_capitalize_anchor() {
        let labels: Vec<String> = NAV_SECTIONS.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Testimonials", "Contact"]);
    }

    #[test]
    fn test_anchor_roundtrip() {
        for section in NAV_SECTIONS {
            assert_eq!(Section::from_anchor(section.anchor_id()), Some(section));
            assert_eq!(Section::from_hash(&section.href()), Some(section));
        }
    }

    #[test]
    fn test_unknown_hash() {
        assert_eq!(Section::from_hash("#pricing"), None);
        assert_eq!(Section::from_hash(""), None);
    }
}
