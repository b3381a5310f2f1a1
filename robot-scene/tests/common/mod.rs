#![allow(dead_code)]

use std::time::{Duration, Instant};

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use robot_scene::ScenePlugin;
use robot_scene::document::{ContentDocument, DocumentSections};
use robot_scene::engine::core::config::SceneConfig;
use robot_scene::engine::loading::ModelLoadState;
use robot_scene::engine::render::PointCloudMaterial;
use robot_scene::tools::hotspots::{HotspotPlugin, SectionLinkPlugin};

pub const FIXTURE_MODEL: &str = "four_points.ply";

/// Authored scene pointed at the test fixture model.
pub fn fixture_config() -> SceneConfig {
    let mut config = SceneConfig::authored();
    config.model.asset_path = FIXTURE_MODEL.to_string();
    config
}

/// Scene, hotspots and a document-backed section target, without rendering.
pub fn headless_app(config: SceneConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        AssetPlugin {
            file_path: "tests/fixtures".to_string(),
            ..default()
        },
        StatesPlugin,
        InputPlugin,
        TransformPlugin,
    ))
    .init_asset::<Mesh>()
    .init_asset::<StandardMaterial>()
    .init_asset::<PointCloudMaterial>()
    .add_plugins(ScenePlugin { config })
    .add_plugins(HotspotPlugin)
    .insert_non_send_resource(DocumentSections::new(&ContentDocument::authored()))
    .add_plugins(SectionLinkPlugin::<DocumentSections>::default());

    app.finish();
    app.cleanup();
    app
}

/// Update until `done` holds, giving the asset task pool time between frames.
pub fn update_until(app: &mut App, mut done: impl FnMut(&mut App) -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        app.update();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

pub fn load_state(app: &App) -> ModelLoadState {
    app.world().resource::<ModelLoadState>().clone()
}

pub fn count<C: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<C>>();
    query.iter(world).count()
}

pub fn sections(app: &App) -> &DocumentSections {
    app.world().non_send_resource::<DocumentSections>()
}
