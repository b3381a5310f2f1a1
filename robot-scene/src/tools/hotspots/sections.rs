use bevy::prelude::*;

use super::state::{HotspotActivated, HotspotHoverChanged};
use crate::document::{SectionId, SectionTarget};
use crate::engine::core::config::{HotspotId, SceneConfig};

fn section_of<'a>(config: &'a SceneConfig, hotspot: &HotspotId) -> Option<&'a SectionId> {
    config
        .hotspots
        .get(hotspot)
        .map(|definition| &definition.section)
}

/// Mirror hover and activation onto the document.
///
/// A hover change moves the highlight from the previous hotspot's section to
/// the current one; an activation scrolls its section into view. Hotspots
/// whose section does not exist do nothing.
pub fn apply_section_links<T: SectionTarget>(
    mut hover_changed: EventReader<HotspotHoverChanged>,
    mut activated: EventReader<HotspotActivated>,
    config: Res<SceneConfig>,
    mut target: NonSendMut<T>,
) {
    for change in hover_changed.read() {
        if let Some(section) = change
            .previous
            .as_ref()
            .and_then(|id| section_of(&config, id))
        {
            target.set_highlighted(section, false);
        }

        if let Some(current) = &change.current {
            match section_of(&config, current) {
                Some(section) if target.set_highlighted(section, true) => {}
                _ => debug!("Hotspot {current} has no section to highlight"),
            }
        }
    }

    for activation in activated.read() {
        if !target.scroll_into_view(&activation.section) {
            debug!(
                "Hotspot {} targets missing section {}",
                activation.hotspot, activation.section
            );
        }
    }
}
