use bevy::color::Color;

/// Point colour, #1a1a1a.
pub const POINT_COLOUR: Color = Color::srgb(0.102, 0.102, 0.102);
pub const POINT_OPACITY: f32 = 0.9;
/// Point size before perspective attenuation, in clip units at unit depth.
pub const POINT_SIZE: f32 = 0.008;

/// Label background (#1a1a1a) and text (#f5f2eb).
pub const LABEL_BACKGROUND: Color = Color::srgb(0.102, 0.102, 0.102);
pub const LABEL_TEXT: Color = Color::srgb(0.961, 0.949, 0.922);
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Loading placeholder torus, #888.
pub const PLACEHOLDER_COLOUR: Color = Color::srgb(0.533, 0.533, 0.533);
pub const PLACEHOLDER_MAJOR_RADIUS: f32 = 0.3;
pub const PLACEHOLDER_MINOR_RADIUS: f32 = 0.05;
/// Spin rate of the loading placeholder about Y, rad/s.
pub const PLACEHOLDER_SPIN_SPEED: f32 = 1.0;

/// Ambient light brightness relative to Bevy's default.
pub const AMBIENT_INTENSITY: f32 = 0.5;

/// Interval between `fps_update` notifications, in seconds.
pub const FPS_NOTIFY_INTERVAL_SECS: f32 = 0.5;
