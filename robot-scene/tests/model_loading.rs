mod common;

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use common::{count, fixture_config, headless_app, load_state, update_until};
use robot_scene::engine::core::app_state::AppState;
use robot_scene::engine::core::lifecycle::SceneLifecycleEvent;
use robot_scene::engine::loading::{ModelLoadState, ModelLoader};
use robot_scene::engine::scene::placeholder::{LoadFailedNotice, LoadingPlaceholder};
use robot_scene::engine::scene::point_cloud::PointCloud;
use robot_scene::engine::scene::root::SceneRoot;

fn app_state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn point_counts(app: &mut App) -> Vec<usize> {
    let world = app.world_mut();
    let mut query = world.query::<&PointCloud>();
    query.iter(world).map(|cloud| cloud.point_count).collect()
}

#[test]
fn point_cloud_appears_only_after_loading() {
    let mut app = headless_app(fixture_config());
    app.update();

    assert_eq!(app_state(&app), AppState::Loading);
    assert!(point_counts(&mut app).is_empty());
    assert_eq!(count::<LoadingPlaceholder>(&mut app), 1);

    assert!(update_until(&mut app, |app| load_state(app).is_loaded()));
    app.update();

    assert_eq!(load_state(&app), ModelLoadState::Loaded { vertex_count: 4 });
    assert_eq!(app_state(&app), AppState::Running);
    assert_eq!(point_counts(&mut app), vec![4]);
    assert_eq!(count::<LoadingPlaceholder>(&mut app), 0);
}

#[test]
fn late_completion_after_unmount_spawns_nothing() {
    let mut app = headless_app(fixture_config());
    app.update();
    assert!(app.world().resource::<ModelLoader>().is_mounted());

    app.world_mut().send_event(SceneLifecycleEvent::Unmount);
    app.update();

    // Give the abandoned load every chance to finish.
    for _ in 0..50 {
        app.update();
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(point_counts(&mut app).is_empty());
    assert_eq!(count::<SceneRoot>(&mut app), 0);
    assert_eq!(load_state(&app), ModelLoadState::Idle);
    assert_eq!(app_state(&app), AppState::Unmounted);
}

#[test]
fn remount_loads_a_fresh_scene() {
    let mut app = headless_app(fixture_config());
    assert!(update_until(&mut app, |app| load_state(app).is_loaded()));

    app.world_mut().send_event(SceneLifecycleEvent::Unmount);
    app.update();
    app.update();
    assert_eq!(count::<SceneRoot>(&mut app), 0);

    app.world_mut().send_event(SceneLifecycleEvent::Mount);
    assert!(update_until(&mut app, |app| load_state(app).is_loaded()));
    app.update();

    assert_eq!(count::<SceneRoot>(&mut app), 1);
    assert_eq!(point_counts(&mut app), vec![4]);
    assert_eq!(app_state(&app), AppState::Running);
}

#[test]
fn missing_model_fails_after_three_attempts() {
    let mut config = fixture_config();
    config.model.asset_path = "missing.ply".to_string();
    let mut app = headless_app(config);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(200)));

    let mut attempts_seen = Vec::new();
    assert!(update_until(&mut app, |app| {
        if let ModelLoadState::Loading { attempt } = load_state(app) {
            if attempts_seen.last() != Some(&attempt) {
                attempts_seen.push(attempt);
            }
        }
        load_state(app).is_failed()
    }));
    app.update();
    app.update();

    assert_eq!(attempts_seen, vec![1, 2, 3]);
    assert!(matches!(
        load_state(&app),
        ModelLoadState::Failed { attempts: 3, .. }
    ));
    assert_eq!(app_state(&app), AppState::LoadFailed);
    assert_eq!(count::<LoadFailedNotice>(&mut app), 1);
    assert_eq!(count::<LoadingPlaceholder>(&mut app), 0);
    assert!(point_counts(&mut app).is_empty());
}
