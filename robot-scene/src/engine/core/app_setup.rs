use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use constants::camera::CAMERA_FOV_DEGREES;
use constants::render_settings::AMBIENT_INTENSITY;

use crate::document::ContentDocument;
use crate::engine::assets::{PlyPointCloudLoader, PointCloudGeometry};
use crate::engine::camera::{OrbitCamera, orbit_camera_controller};
use crate::engine::core::app_state::{AppState, log_state_transitions};
use crate::engine::core::config::{AuthoredDocument, SceneConfig, report_section_links};
use crate::engine::core::lifecycle::{
    SceneLifecycleEvent, handle_lifecycle_events, request_initial_mount,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::{ModelLoadState, ModelLoader, RetryPolicy, poll_model_load};
use crate::engine::render::PointCloudMaterial;
use crate::engine::scene::placeholder::{
    despawn_load_failed_notice, despawn_loading_placeholder, spawn_load_failed_notice,
    spin_loading_placeholder,
};
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::hotspots::{HotspotPlugin, SectionLinkPlugin};

/// Scene state, model loading and lifecycle, independent of any renderer.
///
/// Expects `Assets<Mesh>`, `Assets<StandardMaterial>` and
/// `Assets<PointCloudMaterial>` to exist; [`create_app`] gets them from the
/// render plugins, headless apps register them directly.
pub struct ScenePlugin {
    pub config: SceneConfig,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        app.init_state::<AppState>()
            .insert_resource(OrbitCamera::from_settings(&config.orbit))
            .insert_resource(ModelLoader::new(
                config.model.asset_path.clone(),
                RetryPolicy::default(),
            ))
            .init_resource::<ModelLoadState>()
            .insert_resource(AuthoredDocument(ContentDocument::authored()))
            .insert_resource(config)
            .init_asset::<PointCloudGeometry>()
            .register_asset_loader(PlyPointCloudLoader)
            .add_event::<SceneLifecycleEvent>();

        app.add_systems(Startup, (report_section_links, request_initial_mount))
            .add_systems(
                Update,
                (
                    (handle_lifecycle_events, poll_model_load).chain(),
                    spin_loading_placeholder,
                    orbit_camera_controller,
                    log_state_transitions,
                ),
            )
            .add_systems(OnExit(AppState::Loading), despawn_loading_placeholder)
            .add_systems(OnEnter(AppState::LoadFailed), spawn_load_failed_notice)
            .add_systems(OnExit(AppState::LoadFailed), despawn_load_failed_notice);
    }
}

pub fn create_app(config: SceneConfig) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(MaterialPlugin::<PointCloudMaterial>::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(ScenePlugin { config })
        .add_plugins(HotspotPlugin)
        .add_plugins(WebRpcPlugin)
        .insert_resource(AmbientLight {
            brightness: AmbientLight::default().brightness * AMBIENT_INTENSITY,
            ..default()
        })
        .add_systems(Startup, spawn_camera);

    add_section_links(&mut app);

    app
}

/// Mount the content column into the host page and drive it from hotspots.
#[cfg(target_arch = "wasm32")]
fn add_section_links(app: &mut App) {
    use crate::document::DocumentSections;
    use crate::document::dom::DomSections;

    let document = ContentDocument::authored();
    match DomSections::mount(&document) {
        Ok(sections) => {
            app.insert_non_send_resource(sections)
                .add_plugins(SectionLinkPlugin::<DomSections>::default());
        }
        Err(e) => {
            error!("Content document not mounted, section links disabled: {}", e);
            app.insert_non_send_resource(DocumentSections::new(&document))
                .add_plugins(SectionLinkPlugin::<DocumentSections>::default());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn add_section_links(app: &mut App) {
    use crate::document::DocumentSections;

    app.insert_non_send_resource(DocumentSections::new(&ContentDocument::authored()))
        .add_plugins(SectionLinkPlugin::<DocumentSections>::default());
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

fn spawn_camera(mut commands: Commands, orbit: Res<OrbitCamera>) {
    commands.spawn((
        Name::new("Scene camera"),
        Camera3d::default(),
        Camera {
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Msaa::Sample4,
        orbit.transform(),
    ));
}
