use std::time::Duration;

use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;

use crate::engine::assets::PointCloudGeometry;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::ModelLoadState;
use crate::engine::loading::retry::RetryPolicy;
use crate::engine::render::PointCloudMaterial;
use crate::engine::scene::point_cloud::spawn_point_cloud;
use crate::engine::scene::root::ModelFrame;

/// Tracks the in-flight model request for the current mount.
#[derive(Resource, Debug)]
pub struct ModelLoader {
    asset_path: String,
    policy: RetryPolicy,
    handle: Option<Handle<PointCloudGeometry>>,
    attempt: u32,
    retry_at: Option<Duration>,
    mounted: bool,
    complete: bool,
}

impl ModelLoader {
    pub fn new(asset_path: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            asset_path: asset_path.into(),
            policy,
            handle: None,
            attempt: 0,
            retry_at: None,
            mounted: false,
            complete: false,
        }
    }

    pub fn asset_path(&self) -> &str {
        &self.asset_path
    }

    pub fn handle(&self) -> Option<&Handle<PointCloudGeometry>> {
        self.handle.as_ref()
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Start the first attempt for a fresh mount.
    pub fn mount(&mut self, handle: Handle<PointCloudGeometry>) {
        self.handle = Some(handle);
        self.attempt = 1;
        self.retry_at = None;
        self.mounted = true;
        self.complete = false;
    }

    /// Drop the request. Anything still in flight is ignored when it lands.
    pub fn unmount(&mut self) {
        self.handle = None;
        self.attempt = 0;
        self.retry_at = None;
        self.mounted = false;
        self.complete = false;
    }

    /// Record a failure of the current attempt at time `now`.
    ///
    /// Returns the delay before the next attempt, or `None` once the policy
    /// is exhausted. The failed handle is released either way so the next
    /// request starts a fresh load rather than hitting the cached failure.
    pub fn fail(&mut self, now: Duration) -> Option<Duration> {
        self.handle = None;
        let delay = self.policy.delay_after(self.attempt)?;
        self.retry_at = Some(now + delay);
        Some(delay)
    }

    pub fn retry_due(&self, now: Duration) -> bool {
        self.mounted
            && !self.complete
            && self.handle.is_none()
            && self.retry_at.is_some_and(|at| now >= at)
    }

    pub fn retry(&mut self, handle: Handle<PointCloudGeometry>) {
        self.handle = Some(handle);
        self.attempt += 1;
        self.retry_at = None;
    }

    fn finish(&mut self) {
        self.complete = true;
    }
}

/// Apply load results for the mounted scene.
pub fn poll_model_load(
    mut commands: Commands,
    mut loader: ResMut<ModelLoader>,
    mut load_state: ResMut<ModelLoadState>,
    mut next_state: ResMut<NextState<AppState>>,
    mut failures: EventReader<AssetLoadFailedEvent<PointCloudGeometry>>,
    asset_server: Res<AssetServer>,
    geometries: Res<Assets<PointCloudGeometry>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<PointCloudMaterial>>,
    frames: Query<Entity, With<ModelFrame>>,
    time: Res<Time>,
) {
    let now = time.elapsed();

    if !loader.is_mounted() || loader.is_complete() {
        failures.clear();
        return;
    }

    if loader.retry_due(now) {
        let path = loader.asset_path().to_owned();
        loader.retry(asset_server.load(path));
        info!("Retrying model load (attempt {})", loader.attempt());
        *load_state = ModelLoadState::Loading {
            attempt: loader.attempt(),
        };
        return;
    }

    let Some(handle) = loader.handle().cloned() else {
        failures.clear();
        return;
    };

    if let Some(geometry) = geometries.get(&handle) {
        let Ok(frame) = frames.single() else {
            return;
        };
        spawn_point_cloud(
            &mut commands,
            frame,
            geometry,
            &mut meshes,
            &mut materials,
        );
        loader.finish();

        if let Some((min, max)) = geometry.bounds() {
            debug!("Model bounds {min} .. {max}");
        }
        info!("✓ Model loaded: {} points", geometry.vertex_count());
        *load_state = ModelLoadState::Loaded {
            vertex_count: geometry.vertex_count(),
        };
        next_state.set(AppState::Running);
        return;
    }

    let failure = failures
        .read()
        .find(|failure| failure.id == handle.id())
        .map(|failure| failure.error.to_string());
    failures.clear();

    let Some(reason) = failure else {
        return;
    };

    let attempt = loader.attempt();
    match loader.fail(now) {
        Some(delay) => {
            warn!(
                "Model load attempt {attempt} failed: {reason}; retrying in {:.1}s",
                delay.as_secs_f32()
            );
            *load_state = ModelLoadState::Loading { attempt };
        }
        None => {
            error!("Model unavailable after {attempt} attempts: {reason}");
            *load_state = ModelLoadState::Failed {
                attempts: attempt,
                reason,
            };
            next_state.set(AppState::LoadFailed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted_loader() -> ModelLoader {
        let mut loader = ModelLoader::new("models/robot.ply", RetryPolicy::default());
        loader.mount(Handle::default());
        loader
    }

    #[test]
    fn failures_back_off_then_give_up() {
        let mut loader = mounted_loader();
        let start = Duration::from_secs(10);

        assert_eq!(loader.fail(start), Some(Duration::from_secs(1)));
        assert!(!loader.retry_due(start + Duration::from_millis(999)));
        assert!(loader.retry_due(start + Duration::from_secs(1)));

        loader.retry(Handle::default());
        assert_eq!(loader.attempt(), 2);
        assert_eq!(loader.fail(start), Some(Duration::from_secs(2)));

        loader.retry(Handle::default());
        assert_eq!(loader.attempt(), 3);
        assert_eq!(loader.fail(start), None);
        assert!(!loader.retry_due(start + Duration::from_secs(60)));
    }

    #[test]
    fn unmount_cancels_pending_retry() {
        let mut loader = mounted_loader();
        loader.fail(Duration::ZERO);
        loader.unmount();

        assert!(!loader.is_mounted());
        assert!(loader.handle().is_none());
        assert!(!loader.retry_due(Duration::from_secs(5)));
    }

    #[test]
    fn remount_starts_from_the_first_attempt() {
        let mut loader = mounted_loader();
        loader.fail(Duration::ZERO);
        loader.retry(Handle::default());
        loader.unmount();
        loader.mount(Handle::default());

        assert_eq!(loader.attempt(), 1);
        assert!(loader.handle().is_some());
    }
}
