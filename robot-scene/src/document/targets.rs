use std::collections::{BTreeSet, HashMap};

use bevy::prelude::*;

use super::content::ContentDocument;
use super::section_id::SectionId;

/// Typed handle to the document sections a hotspot can reach.
///
/// Both operations return `false` when no section carries `section`; callers
/// treat that as a normal no-op.
pub trait SectionTarget: 'static {
    /// Smooth-scroll the section into the viewport centre.
    fn scroll_into_view(&mut self, section: &SectionId) -> bool;

    /// Add or remove the section highlight.
    fn set_highlighted(&mut self, section: &SectionId, highlighted: bool) -> bool;
}

/// Section target backed by the authored document, used natively and in tests.
#[derive(Debug, Default)]
pub struct DocumentSections {
    /// Section index by identifier; the first section wins on duplicates.
    index: HashMap<SectionId, usize>,
    highlighted: BTreeSet<SectionId>,
    scrolled: Vec<SectionId>,
}

impl DocumentSections {
    pub fn new(document: &ContentDocument) -> Self {
        let mut index = HashMap::new();
        for (position, section) in document.sections.iter().enumerate() {
            if let Some(id) = section.id() {
                index.entry(id).or_insert(position);
            }
        }
        Self {
            index,
            ..default()
        }
    }

    pub fn contains(&self, section: &SectionId) -> bool {
        self.index.contains_key(section)
    }

    pub fn is_highlighted(&self, section: &SectionId) -> bool {
        self.highlighted.contains(section)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &SectionId> {
        self.highlighted.iter()
    }

    /// Sections scrolled into view, oldest first.
    pub fn scroll_history(&self) -> &[SectionId] {
        &self.scrolled
    }
}

impl SectionTarget for DocumentSections {
    fn scroll_into_view(&mut self, section: &SectionId) -> bool {
        let Some(position) = self.index.get(section) else {
            return false;
        };
        info!("Scrolling section {} (position {}) into view", section, position);
        self.scrolled.push(section.clone());
        true
    }

    fn set_highlighted(&mut self, section: &SectionId, highlighted: bool) -> bool {
        if !self.contains(section) {
            return false;
        }
        if highlighted {
            self.highlighted.insert(section.clone());
        } else {
            self.highlighted.remove(section);
        }
        true
    }
}
