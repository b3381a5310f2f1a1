use bevy::prelude::*;
use serde::Serialize;

use crate::document::SectionId;
use crate::engine::core::config::HotspotId;

/// The single hovered hotspot, if any.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Option<HotspotId>,
}

impl HoverState {
    pub fn current(&self) -> Option<&HotspotId> {
        self.current.as_ref()
    }

    pub fn is_hovered(&self, id: &HotspotId) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Hover `id`, replacing whatever was hovered before.
    pub fn enter(&mut self, id: HotspotId) -> Option<HotspotHoverChanged> {
        if self.is_hovered(&id) {
            return None;
        }
        let previous = self.current.replace(id.clone());
        Some(HotspotHoverChanged {
            previous,
            current: Some(id),
        })
    }

    /// Clear the hover only if `id` is the one hovered. A stale leave from a
    /// hotspot that already lost the hover is ignored.
    pub fn leave(&mut self, id: &HotspotId) -> Option<HotspotHoverChanged> {
        if !self.is_hovered(id) {
            return None;
        }
        self.clear()
    }

    pub fn clear(&mut self) -> Option<HotspotHoverChanged> {
        let previous = self.current.take()?;
        Some(HotspotHoverChanged {
            previous: Some(previous),
            current: None,
        })
    }
}

/// Raw pointer activity over a hotspot marker.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum HotspotPointerEvent {
    Enter(HotspotId),
    Leave(HotspotId),
    Click(HotspotId),
}

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotspotHoverChanged {
    pub previous: Option<HotspotId>,
    pub current: Option<HotspotId>,
}

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotspotActivated {
    pub hotspot: HotspotId,
    pub section: SectionId,
}

#[derive(Component, Debug, Clone)]
pub struct HotspotMarker {
    pub id: HotspotId,
}

/// Shared marker mesh and the idle/hovered materials.
#[derive(Resource, Debug, Clone)]
pub struct MarkerAssets {
    pub mesh: Handle<Mesh>,
    pub idle: Handle<StandardMaterial>,
    pub hovered: Handle<StandardMaterial>,
}

#[derive(Component)]
pub struct HotspotLabel;

#[derive(Component)]
pub struct HotspotLabelText;

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> HotspotId {
        HotspotId::new(value)
    }

    #[test]
    fn enter_replaces_previous_hover() {
        let mut hover = HoverState::default();
        hover.enter(id("power"));

        let change = hover.enter(id("sensing")).unwrap();
        assert_eq!(change.previous, Some(id("power")));
        assert_eq!(change.current, Some(id("sensing")));
        assert!(hover.is_hovered(&id("sensing")));
        assert!(!hover.is_hovered(&id("power")));
    }

    #[test]
    fn re_entering_the_same_hotspot_is_not_a_change() {
        let mut hover = HoverState::default();
        hover.enter(id("power"));
        assert_eq!(hover.enter(id("power")), None);
    }

    #[test]
    fn stale_leave_keeps_current_hover() {
        let mut hover = HoverState::default();
        hover.enter(id("power"));
        hover.enter(id("sensing"));

        assert_eq!(hover.leave(&id("power")), None);
        assert_eq!(hover.current(), Some(&id("sensing")));

        let change = hover.leave(&id("sensing")).unwrap();
        assert_eq!(change.previous, Some(id("sensing")));
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn clearing_nothing_is_not_a_change() {
        assert_eq!(HoverState::default().clear(), None);
    }
}
