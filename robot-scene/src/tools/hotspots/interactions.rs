use bevy::{prelude::*, window::PrimaryWindow};
use constants::hotspot::{CLICK_DRAG_TOLERANCE, MARKER_RADIUS};

use super::ray::nearest_sphere_hit;
use super::state::{
    HotspotActivated, HotspotHoverChanged, HotspotMarker, HotspotPointerEvent, HoverState,
};
use crate::engine::core::config::{HotspotId, SceneConfig};
use crate::engine::core::lifecycle::SceneLifecycleEvent;

/// Cursor pick and click tracking across frames.
///
/// Reset whenever the scene enters `Running`, so a fresh mount under a
/// stationary cursor still produces an `Enter`.
#[derive(Resource, Debug, Default)]
pub struct PickTracker {
    picked: Option<HotspotId>,
    /// Press that may become a click if released over the same hotspot.
    pending: Option<(HotspotId, Vec2)>,
}

impl PickTracker {
    pub fn picked(&self) -> Option<&HotspotId> {
        self.picked.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one frame of pointer input into pointer events.
    ///
    /// A changed pick yields `Leave(previous)` then `Enter(current)`. A click
    /// needs press and release over the same hotspot with at most
    /// `CLICK_DRAG_TOLERANCE` pixels of travel. Losing the cursor drops any
    /// pending press.
    pub fn update(
        &mut self,
        hit: Option<HotspotId>,
        cursor: Option<Vec2>,
        pressed: bool,
        released: bool,
    ) -> Vec<HotspotPointerEvent> {
        let mut events = Vec::new();

        if hit != self.picked {
            if let Some(previous) = self.picked.take() {
                events.push(HotspotPointerEvent::Leave(previous));
            }
            if let Some(current) = &hit {
                events.push(HotspotPointerEvent::Enter(current.clone()));
            }
            self.picked = hit.clone();
        }

        let Some(cursor) = cursor else {
            self.pending = None;
            return events;
        };

        if pressed {
            self.pending = hit.clone().map(|id| (id, cursor));
        }

        if released {
            if let Some((pressed_on, at)) = self.pending.take() {
                let released_on_same = hit.as_ref() == Some(&pressed_on);
                if released_on_same && at.distance(cursor) <= CLICK_DRAG_TOLERANCE {
                    events.push(HotspotPointerEvent::Click(pressed_on));
                }
            }
        }

        events
    }
}

/// Cast the cursor ray against every marker and emit pointer events.
///
/// Markers are tested as spheres at their current world scale, so the pulse
/// and hover enlargement change the pick area. The nearest hit wins.
pub fn pick_hotspot_under_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    markers: Query<(&HotspotMarker, &GlobalTransform)>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut tracker: ResMut<PickTracker>,
    mut pointer: EventWriter<HotspotPointerEvent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let cursor = window.cursor_position();
    let hit = cursor
        .and_then(|cursor| camera.viewport_to_world(camera_transform, cursor).ok())
        .and_then(|ray| {
            let spheres = markers.iter().map(|(marker, transform)| {
                let scale = transform.compute_transform().scale.max_element();
                (&marker.id, transform.translation(), MARKER_RADIUS * scale)
            });
            nearest_sphere_hit(ray.origin, *ray.direction, spheres)
        })
        .map(|(id, _)| id.clone());

    let events = tracker.update(
        hit,
        cursor,
        buttons.just_pressed(MouseButton::Left),
        buttons.just_released(MouseButton::Left),
    );
    pointer.write_batch(events);
}

pub fn reset_pick_tracker(mut tracker: ResMut<PickTracker>) {
    tracker.reset();
}

/// Fold pointer events into the hover state, in arrival order.
pub fn apply_pointer_events(
    mut pointer: EventReader<HotspotPointerEvent>,
    mut hover: ResMut<HoverState>,
    config: Res<SceneConfig>,
    mut hover_changed: EventWriter<HotspotHoverChanged>,
    mut activated: EventWriter<HotspotActivated>,
) {
    for event in pointer.read() {
        match event {
            HotspotPointerEvent::Enter(id) => {
                if let Some(change) = hover.enter(id.clone()) {
                    hover_changed.write(change);
                }
            }
            HotspotPointerEvent::Leave(id) => {
                if let Some(change) = hover.leave(id) {
                    hover_changed.write(change);
                }
            }
            HotspotPointerEvent::Click(id) => match config.hotspots.get(id) {
                Some(hotspot) => {
                    activated.write(HotspotActivated {
                        hotspot: hotspot.id.clone(),
                        section: hotspot.section.clone(),
                    });
                }
                None => debug!("Click on unknown hotspot {id}"),
            },
        }
    }
}

/// Drop the hover when the scene goes away so no highlight is left behind.
pub fn clear_hover_on_unmount(
    mut lifecycle: EventReader<SceneLifecycleEvent>,
    mut hover: ResMut<HoverState>,
    mut hover_changed: EventWriter<HotspotHoverChanged>,
) {
    for event in lifecycle.read() {
        if *event == SceneLifecycleEvent::Unmount {
            if let Some(change) = hover.clear() {
                hover_changed.write(change);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> HotspotId {
        HotspotId::new(value)
    }

    const AT: Option<Vec2> = Some(Vec2::new(100.0, 100.0));

    #[test]
    fn moving_between_hotspots_leaves_before_entering() {
        let mut tracker = PickTracker::default();

        assert_eq!(
            tracker.update(Some(id("power")), AT, false, false),
            vec![HotspotPointerEvent::Enter(id("power"))]
        );
        assert!(tracker.update(Some(id("power")), AT, false, false).is_empty());
        assert_eq!(
            tracker.update(Some(id("sensing")), AT, false, false),
            vec![
                HotspotPointerEvent::Leave(id("power")),
                HotspotPointerEvent::Enter(id("sensing")),
            ]
        );
        assert_eq!(
            tracker.update(None, AT, false, false),
            vec![HotspotPointerEvent::Leave(id("sensing"))]
        );
    }

    #[test]
    fn press_and_release_on_one_hotspot_clicks() {
        let mut tracker = PickTracker::default();
        tracker.update(Some(id("power")), AT, true, false);

        let events = tracker.update(Some(id("power")), Some(Vec2::new(103.0, 104.0)), false, true);
        assert_eq!(events, vec![HotspotPointerEvent::Click(id("power"))]);
    }

    #[test]
    fn release_over_another_hotspot_is_not_a_click() {
        let mut tracker = PickTracker::default();
        tracker.update(Some(id("power")), AT, true, false);

        let events = tracker.update(Some(id("sensing")), AT, false, true);
        assert!(!events.contains(&HotspotPointerEvent::Click(id("power"))));
        assert!(!events.contains(&HotspotPointerEvent::Click(id("sensing"))));
    }

    #[test]
    fn dragging_past_the_tolerance_is_not_a_click() {
        let mut tracker = PickTracker::default();
        tracker.update(Some(id("power")), AT, true, false);

        let events = tracker.update(Some(id("power")), Some(Vec2::new(106.0, 100.0)), false, true);
        assert!(events.is_empty());
    }

    #[test]
    fn losing_the_cursor_drops_the_pending_press() {
        let mut tracker = PickTracker::default();
        tracker.update(Some(id("power")), AT, true, false);

        assert_eq!(
            tracker.update(None, None, false, false),
            vec![HotspotPointerEvent::Leave(id("power"))]
        );
        let events = tracker.update(Some(id("power")), AT, false, true);
        assert_eq!(events, vec![HotspotPointerEvent::Enter(id("power"))]);
    }

    #[test]
    fn reset_re_enters_the_hotspot_under_a_still_cursor() {
        let mut tracker = PickTracker::default();
        tracker.update(Some(id("power")), AT, true, false);

        tracker.reset();

        assert_eq!(tracker.picked(), None);
        assert_eq!(
            tracker.update(Some(id("power")), AT, false, true),
            vec![HotspotPointerEvent::Enter(id("power"))]
        );
    }
}
