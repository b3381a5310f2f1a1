mod common;

use bevy::prelude::*;
use common::{count, fixture_config, headless_app, load_state, sections, update_until};
use robot_scene::document::SectionId;
use robot_scene::engine::core::app_state::AppState;
use robot_scene::engine::core::config::{HotspotDef, HotspotId};
use robot_scene::engine::core::lifecycle::SceneLifecycleEvent;
use robot_scene::tools::hotspots::{HotspotMarker, HotspotPointerEvent, HoverState, PickTracker};

fn send(app: &mut App, event: HotspotPointerEvent) {
    app.world_mut().send_event(event);
    app.update();
}

fn highlighted(app: &App) -> Vec<String> {
    sections(app)
        .highlighted()
        .map(|section| section.as_str().to_string())
        .collect()
}

#[test]
fn hover_highlights_the_linked_section_until_leave() {
    let mut app = headless_app(fixture_config());
    app.update();

    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("power")));
    assert!(sections(&app).is_highlighted(&SectionId::new("6")));
    assert_eq!(highlighted(&app), vec!["6"]);

    send(&mut app, HotspotPointerEvent::Leave(HotspotId::new("power")));
    assert!(highlighted(&app).is_empty());
    assert_eq!(app.world().resource::<HoverState>().current(), None);
}

#[test]
fn click_scrolls_the_linked_section() {
    let mut app = headless_app(fixture_config());
    app.update();

    send(&mut app, HotspotPointerEvent::Click(HotspotId::new("power")));
    assert_eq!(sections(&app).scroll_history(), &[SectionId::new("6")]);

    send(&mut app, HotspotPointerEvent::Click(HotspotId::new("sensing")));
    assert_eq!(
        sections(&app).scroll_history(),
        &[SectionId::new("6"), SectionId::new("3")]
    );
    // Clicking does not touch the highlight.
    assert!(highlighted(&app).is_empty());
}

#[test]
fn hovering_another_hotspot_moves_the_highlight() {
    let mut app = headless_app(fixture_config());
    app.update();

    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("power")));
    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("computation")));

    assert_eq!(highlighted(&app), vec!["5"]);
    assert_eq!(
        app.world().resource::<HoverState>().current(),
        Some(&HotspotId::new("computation"))
    );

    // A stale leave for the previous hotspot changes nothing.
    send(&mut app, HotspotPointerEvent::Leave(HotspotId::new("power")));
    assert_eq!(highlighted(&app), vec!["5"]);
}

#[test]
fn missing_section_is_a_silent_no_op() {
    let mut config = fixture_config();
    config
        .hotspots
        .hotspots
        .push(HotspotDef::new("tail", "Tail", [0.0, 0.0, 0.0], "42"));
    let mut app = headless_app(config);
    app.update();

    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("tail")));
    send(&mut app, HotspotPointerEvent::Click(HotspotId::new("tail")));

    assert!(highlighted(&app).is_empty());
    assert!(sections(&app).scroll_history().is_empty());
    assert_eq!(
        app.world().resource::<HoverState>().current(),
        Some(&HotspotId::new("tail"))
    );
}

#[test]
fn unmount_clears_the_highlight() {
    let mut app = headless_app(fixture_config());
    app.update();

    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("structure")));
    assert_eq!(highlighted(&app), vec!["4"]);

    app.world_mut().send_event(SceneLifecycleEvent::Unmount);
    app.update();
    app.update();

    assert!(highlighted(&app).is_empty());
    assert_eq!(app.world().resource::<HoverState>().current(), None);
}

#[test]
fn markers_spawn_once_the_model_is_loaded() {
    let mut app = headless_app(fixture_config());

    assert!(update_until(&mut app, |app| {
        *app.world().resource::<State<AppState>>().get() == AppState::Running
    }));
    app.update();

    assert!(load_state(&app).is_loaded());
    assert_eq!(count::<HotspotMarker>(&mut app), 5);
}

#[test]
fn disabled_hotspots_spawn_no_markers_and_ignore_pointer_events() {
    let mut app = headless_app(fixture_config().with_hotspots_enabled(false));

    assert!(update_until(&mut app, |app| {
        *app.world().resource::<State<AppState>>().get() == AppState::Running
    }));
    app.update();
    assert_eq!(count::<HotspotMarker>(&mut app), 0);

    send(&mut app, HotspotPointerEvent::Enter(HotspotId::new("power")));
    send(&mut app, HotspotPointerEvent::Click(HotspotId::new("power")));

    assert!(highlighted(&app).is_empty());
    assert!(sections(&app).scroll_history().is_empty());
}

#[test]
fn remount_forgets_the_previous_pick() {
    let mut app = headless_app(fixture_config());
    let running =
        |app: &mut App| *app.world().resource::<State<AppState>>().get() == AppState::Running;
    assert!(update_until(&mut app, running));

    app.world_mut().resource_mut::<PickTracker>().update(
        Some(HotspotId::new("power")),
        Some(Vec2::new(10.0, 10.0)),
        false,
        false,
    );

    app.world_mut().send_event(SceneLifecycleEvent::Unmount);
    app.update();
    app.update();
    app.world_mut().send_event(SceneLifecycleEvent::Mount);
    assert!(update_until(&mut app, running));

    let mut tracker = app.world_mut().resource_mut::<PickTracker>();
    assert_eq!(tracker.picked(), None);
    // The cursor never moved, yet the fresh markers are entered again.
    assert_eq!(
        tracker.update(Some(HotspotId::new("power")), Some(Vec2::new(10.0, 10.0)), false, false),
        vec![HotspotPointerEvent::Enter(HotspotId::new("power"))]
    );
}
