use bevy::color::Color;

/// Marker sphere radius in model units.
pub const MARKER_RADIUS: f32 = 0.02;
pub const MARKER_SEGMENTS: u32 = 16;

/// Idle colour #7bb8e6 and hovered colour #5ba3d9.
pub const MARKER_COLOUR: Color = Color::srgba(0.482, 0.722, 0.902, 0.8);
pub const MARKER_HOVER_COLOUR: Color = Color::srgba(0.357, 0.639, 0.851, 1.0);

/// Pulse: scale = 1 + sin(t * PULSE_FREQUENCY) * PULSE_AMPLITUDE.
pub const PULSE_FREQUENCY: f32 = 3.0;
pub const PULSE_AMPLITUDE: f32 = 0.2;
pub const HOVER_SCALE: f32 = 1.5;

/// Label anchor relative to the marker, in model units.
pub const LABEL_OFFSET: [f32; 3] = [0.06, 0.03, 0.0];

/// Cursor travel in pixels between press and release beyond which a click is ignored.
pub const CLICK_DRAG_TOLERANCE: f32 = 5.0;
