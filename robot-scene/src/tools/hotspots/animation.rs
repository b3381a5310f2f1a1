use bevy::prelude::*;
use constants::hotspot::{HOVER_SCALE, PULSE_AMPLITUDE, PULSE_FREQUENCY};

use super::state::{HotspotMarker, HoverState, MarkerAssets};

/// Marker scale at `elapsed_secs`. Hovered markers hold a fixed enlargement.
pub fn marker_scale(elapsed_secs: f32, hovered: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else {
        1.0 + (elapsed_secs * PULSE_FREQUENCY).sin() * PULSE_AMPLITUDE
    }
}

pub fn animate_markers(
    time: Res<Time>,
    hover: Res<HoverState>,
    assets: Res<MarkerAssets>,
    mut markers: Query<(
        &HotspotMarker,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let elapsed = time.elapsed_secs();

    for (marker, mut transform, mut material) in &mut markers {
        let hovered = hover.is_hovered(&marker.id);
        transform.scale = Vec3::splat(marker_scale(elapsed, hovered));

        let wanted = if hovered { &assets.hovered } else { &assets.idle };
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}
