/// Rotation applied to the model frame about X, in radians.
/// The scan is Z-up; the scene is Y-up (Z→Y, -Y→Z, X→X).
pub const MODEL_ROTATION_X: f32 = -std::f32::consts::FRAC_PI_2;

/// Uniform scale applied to the model frame.
pub const MODEL_SCALE: f32 = 2.5;
