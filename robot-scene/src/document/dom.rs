use std::collections::HashMap;

use bevy::prelude::*;
use constants::document::{CONTENT_ROOT_ID, SECTION_ATTRIBUTE, SECTION_HIGHLIGHT_CLASS};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::content::ContentDocument;
use super::html::render_content_html;
use super::section_id::SectionId;
use super::targets::SectionTarget;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("content root #{0} not found")]
    MissingContentRoot(&'static str),

    #[error("DOM query failed: {0}")]
    Query(String),
}

/// Section target backed by `[data-section]` elements in the host page.
#[derive(Default)]
pub struct DomSections {
    elements: HashMap<SectionId, Element>,
}

impl DomSections {
    /// Render `document` into the content root and index its sections.
    pub fn mount(document: &ContentDocument) -> Result<Self, MountError> {
        let dom = web_sys::window()
            .ok_or(MountError::NoWindow)?
            .document()
            .ok_or(MountError::NoDocument)?;

        let root = dom
            .get_element_by_id(CONTENT_ROOT_ID)
            .ok_or(MountError::MissingContentRoot(CONTENT_ROOT_ID))?;
        root.set_inner_html(&render_content_html(document));

        Self::index(&root)
    }

    /// Index every element below `root` that carries a non-empty section attribute.
    pub fn index(root: &Element) -> Result<Self, MountError> {
        let nodes = root
            .query_selector_all(&format!("[{SECTION_ATTRIBUTE}]"))
            .map_err(|e| MountError::Query(format!("{e:?}")))?;

        let mut elements = HashMap::new();
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Some(value) = element.get_attribute(SECTION_ATTRIBUTE) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let id = SectionId::new(value);
            if elements.contains_key(&id) {
                warn!("Duplicate section {} in document; keeping the first", id);
                continue;
            }
            elements.insert(id, element);
        }

        info!("Indexed {} document sections", elements.len());
        Ok(Self { elements })
    }
}

impl SectionTarget for DomSections {
    fn scroll_into_view(&mut self, section: &SectionId) -> bool {
        let Some(element) = self.elements.get(section) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn set_highlighted(&mut self, section: &SectionId, highlighted: bool) -> bool {
        let Some(element) = self.elements.get(section) else {
            return false;
        };
        let classes = element.class_list();
        let result = if highlighted {
            classes.add_1(SECTION_HIGHLIGHT_CLASS)
        } else {
            classes.remove_1(SECTION_HIGHLIGHT_CLASS)
        };
        if let Err(e) = result {
            error!("Failed to toggle highlight on section {}: {:?}", section, e);
        }
        true
    }
}
