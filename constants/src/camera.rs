/// Initial camera position; the orbit target is the origin.
pub const CAMERA_START: [f32; 3] = [0.0, 0.0, 4.0];
/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

pub const MIN_DISTANCE: f32 = 2.0;
pub const MAX_DISTANCE: f32 = 8.0;

/// Auto-rotate speed; 2.0 is one revolution every 30 seconds.
pub const AUTO_ROTATE_SPEED: f32 = 2.0;

/// Keeps pitch strictly inside the poles.
pub const PITCH_EPSILON: f32 = 1e-6;
