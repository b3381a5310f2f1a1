use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::{input::mouse::MouseMotion, prelude::*, window::PrimaryWindow};
use constants::camera::PITCH_EPSILON;

use crate::engine::core::config::OrbitSettings;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Rotation about +Y; zero looks down -Z from +Z.
    pub yaw: f32,
    /// Elevation above the XZ plane.
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub is_dragging: bool,
}

impl OrbitCamera {
    pub fn from_settings(settings: &OrbitSettings) -> Self {
        let start = Vec3::from_array(settings.start);
        let radius = start.length();
        let pitch = if radius > 0.0 {
            (start.y / radius).asin()
        } else {
            0.0
        };

        Self {
            yaw: start.x.atan2(start.z),
            pitch: clamp_pitch(pitch),
            distance: radius.clamp(settings.min_distance, settings.max_distance),
            min_distance: settings.min_distance,
            max_distance: settings.max_distance,
            auto_rotate: settings.auto_rotate,
            auto_rotate_speed: settings.auto_rotate_speed,
            is_dragging: false,
        }
    }

    /// Apply a pointer drag. A drag of the full viewport height is one turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.yaw -= TAU * delta.x / viewport_height;
        self.pitch = clamp_pitch(self.pitch + TAU * delta.y / viewport_height);
    }

    /// Advance auto-rotation by `dt` seconds. Speed 1 is one turn per minute.
    pub fn advance(&mut self, dt: f32) {
        if self.auto_rotate && !self.is_dragging {
            self.yaw -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    pub fn transform(&self) -> Transform {
        orbit_transform(self.yaw, self.pitch, self.distance)
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-FRAC_PI_2 + PITCH_EPSILON, FRAC_PI_2 - PITCH_EPSILON)
}

/// Camera pose on a sphere around the origin, looking at the origin.
pub fn orbit_transform(yaw: f32, pitch: f32, distance: f32) -> Transform {
    let position = Vec3::new(
        distance * pitch.cos() * yaw.sin(),
        distance * pitch.sin(),
        distance * pitch.cos() * yaw.cos(),
    );
    Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
}

pub fn orbit_camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    orbit.is_dragging = mouse_button.pressed(MouseButton::Left);

    let drag: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if orbit.is_dragging && drag != Vec2::ZERO {
        if let Ok(window) = windows.single() {
            orbit.rotate(drag, window.height());
        }
    }

    orbit.advance(time.delta_secs());

    for mut transform in &mut camera_query {
        *transform = orbit.transform();
    }
}
