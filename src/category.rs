use std::fmt;

use serde::{Serialize, Serializer};

use crate::extract::{Linkage, Region, TextSelector};

/// A named text-extraction rule applied to every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    LinkedWords,
    UnlinkedWords,
    FooterLinkedWords,
    FooterUnlinkedWords,
    NavigationLinkedWords,
    NavigationUnlinkedWords,
    BodyWords,
    BodyUnlinkedWords,
}

impl Category {
    /// Every category, in report order.
    pub const ALL: [Category; 8] = [
        Category::LinkedWords,
        Category::UnlinkedWords,
        Category::FooterLinkedWords,
        Category::FooterUnlinkedWords,
        Category::NavigationLinkedWords,
        Category::NavigationUnlinkedWords,
        Category::BodyWords,
        Category::BodyUnlinkedWords,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::LinkedWords => "Linked Words",
            Category::UnlinkedWords => "Unlinked Words",
            Category::FooterLinkedWords => "Footer Linked Words",
            Category::FooterUnlinkedWords => "Footer Unlinked Words",
            Category::NavigationLinkedWords => "Navigation Linked Words",
            Category::NavigationUnlinkedWords => "Navigation Unlinked Words",
            Category::BodyWords => "Body Words",
            Category::BodyUnlinkedWords => "Body Unlinked Words",
        }
    }

    pub fn selector(self) -> TextSelector {
        let (region, linkage) = match self {
            Category::LinkedWords => (None, Linkage::Linked),
            Category::UnlinkedWords => (None, Linkage::Unlinked),
            Category::FooterLinkedWords => (Some(Region::Footer), Linkage::Linked),
            Category::FooterUnlinkedWords => (Some(Region::Footer), Linkage::Unlinked),
            Category::NavigationLinkedWords => (Some(Region::Nav), Linkage::Linked),
            Category::NavigationUnlinkedWords => (Some(Region::Nav), Linkage::Unlinked),
            Category::BodyWords => (Some(Region::Body), Linkage::Any),
            Category::BodyUnlinkedWords => (Some(Region::Body), Linkage::Unlinked),
        };
        TextSelector::new(region, linkage)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
