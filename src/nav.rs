// SPDX-FileCopyrightText: The folio-data authors
// SPDX-License-Identifier: MPL-2.0

//! Header navigation

use crate::href::{self, HrefKind};

/// A header menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavigationLink {
    /// The link target
    pub href: &'static str,

    /// The visible label
    pub title: &'static str,
}

impl NavigationLink {
    /// Create a new entry.
    ///
    /// The arguments are not validated.
    #[must_use]
    pub const fn new(href: &'static str, title: &'static str) -> Self {
        Self { href, title }
    }

    /// Return the link target.
    #[must_use]
    pub const fn href(&self) -> &'static str {
        self.href
    }

    /// Return the visible label.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Check the shape of the entry in `const` context.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        !self.title.is_empty() && href::is_well_formed(self.href)
    }

    /// Classify the link target.
    ///
    /// Returns `None` if the target is invalid.
    #[must_use]
    pub fn href_kind(&self) -> Option<HrefKind> {
        href::classify(self.href).ok()
    }

    /// Check if the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href_kind() == Some(HrefKind::Absolute)
    }
}

const LINKS: &[NavigationLink] = &[
    NavigationLink::new("/", "Home"),
    NavigationLink::new("/blog", "Blog"),
    NavigationLink::new("/tags", "Tags"),
    NavigationLink::new("/projects", "Projects"),
    NavigationLink::new("/about", "About"),
    NavigationLink::new(
        "https://drive.google.com/file/d/1rM7iMvRxWB018cSueHHTGxnGNr7gPV2X/view",
        "Resume",
    ),
];

const _: () = assert!(all_well_formed(LINKS), "malformed header navigation link");

/// The header menu in rendering order
pub static HEADER_NAV_LINKS: &[NavigationLink] = LINKS;

const fn all_well_formed(links: &[NavigationLink]) -> bool {
    let mut i = 0;
    while i < links.len() {
        if !links[i].is_well_formed() {
            return false;
        }
        i += 1;
    }
    true
}

/// Return the header menu in rendering order.
#[must_use]
pub fn header_nav_links() -> &'static [NavigationLink] {
    HEADER_NAV_LINKS
}

/// Find the first entry with the given link target.
#[must_use]
pub fn find_by_href(href: &str) -> Option<&'static NavigationLink> {
    HEADER_NAV_LINKS.iter().find(|link| link.href == href)
}
