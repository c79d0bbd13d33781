//! Canonical navigation items rendered by the header and footer.

/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Message key segment under the `nav` namespace.
    pub key: &'static str,
    /// Route the entry links to.
    pub href: &'static str,
}

impl NavItem {
    /// Full translation key for this entry's label.
    pub fn translation_key(&self) -> String {
        format!("nav.{}", self.key)
    }
}

/// Ordered navigation entries, as laid out in the portal header.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { key: "home", href: "/" },
    NavItem { key: "about", href: "/about" },
    NavItem { key: "bloodDonors", href: "/blood-donors" },
    NavItem { key: "library", href: "/library" },
    NavItem { key: "jobs", href: "/jobs" },
    NavItem { key: "workers", href: "/workers" },
    NavItem { key: "videos", href: "/videos" },
    NavItem { key: "news", href: "/news" },
];
