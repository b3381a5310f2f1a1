use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;
use constants::camera::{AUTO_ROTATE_SPEED, CAMERA_START, MAX_DISTANCE, MIN_DISTANCE};
use constants::coordinate_system::{MODEL_ROTATION_X, MODEL_SCALE};
use constants::path::MODEL_ASSET_PATH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{ContentDocument, SectionId};

/// Stable identifier of an authored hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotId(String);

impl HotspotId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HotspotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labelled marker on the model linked to a document section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotDef {
    pub id: HotspotId,
    pub label: String,
    /// Model-space position (width, depth, height), before the model frame.
    pub position: [f32; 3],
    pub section: SectionId,
}

impl HotspotDef {
    pub fn new(id: &str, label: &str, position: [f32; 3], section: &str) -> Self {
        Self {
            id: HotspotId::new(id),
            label: label.to_string(),
            position,
            section: SectionId::new(section),
        }
    }

    pub fn local_position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotConfig {
    /// When false no markers spawn and no hover or click handling runs.
    pub enabled: bool,
    pub hotspots: Vec<HotspotDef>,
}

impl HotspotConfig {
    pub fn get(&self, id: &HotspotId) -> Option<&HotspotDef> {
        self.hotspots.iter().find(|hotspot| &hotspot.id == id)
    }
}

/// Point cloud asset and the model frame shared by the cloud and its hotspots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub asset_path: String,
    pub rotation_x: f32,
    pub scale: f32,
}

impl ModelConfig {
    pub fn frame_transform(&self) -> Transform {
        Transform::from_rotation(Quat::from_rotation_x(self.rotation_x))
            .with_scale(Vec3::splat(self.scale))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitSettings {
    pub start: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

/// Immutable scene configuration, passed into the app at construction.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub hotspots: HotspotConfig,
    pub model: ModelConfig,
    pub orbit: OrbitSettings,
}

impl SceneConfig {
    /// The authored landing page scene.
    pub fn authored() -> Self {
        Self {
            hotspots: HotspotConfig {
                enabled: true,
                hotspots: vec![
                    HotspotDef::new("actuation", "Actuation", [0.12, 0.02, 0.31], "2"), // shoulder
                    HotspotDef::new("sensing", "Sensing", [-0.05, 0.0, 0.28], "3"), // hand
                    HotspotDef::new("structure", "Structure", [-0.07, -0.02, -0.15], "4"), // legs
                    HotspotDef::new("computation", "Computation", [0.0, 0.0, 0.45], "5"), // head
                    HotspotDef::new("power", "Power", [0.0, 0.0, 0.1], "6"), // chest
                ],
            },
            model: ModelConfig {
                asset_path: MODEL_ASSET_PATH.to_string(),
                rotation_x: MODEL_ROTATION_X,
                scale: MODEL_SCALE,
            },
            orbit: OrbitSettings {
                start: CAMERA_START,
                min_distance: MIN_DISTANCE,
                max_distance: MAX_DISTANCE,
                auto_rotate: true,
                auto_rotate_speed: AUTO_ROTATE_SPEED,
            },
        }
    }

    pub fn with_hotspots_enabled(mut self, enabled: bool) -> Self {
        self.hotspots.enabled = enabled;
        self
    }

    /// Check every hotspot against the document it links into.
    pub fn check_section_links(&self, document: &ContentDocument) -> Vec<SectionLinkIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for hotspot in &self.hotspots.hotspots {
            if !seen.insert(&hotspot.id) {
                issues.push(SectionLinkIssue::DuplicateHotspot {
                    hotspot: hotspot.id.clone(),
                });
            }

            match document.sections_with_id(&hotspot.section) {
                1 => {}
                0 => issues.push(SectionLinkIssue::MissingSection {
                    hotspot: hotspot.id.clone(),
                    section: hotspot.section.clone(),
                }),
                count => issues.push(SectionLinkIssue::AmbiguousSection {
                    hotspot: hotspot.id.clone(),
                    section: hotspot.section.clone(),
                    count,
                }),
            }
        }

        issues
    }
}

/// Configuration defects between hotspots and the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionLinkIssue {
    /// Hover and click will silently do nothing.
    #[error("hotspot {hotspot} targets section {section}, which does not exist")]
    MissingSection { hotspot: HotspotId, section: SectionId },

    #[error("hotspot {hotspot} targets section {section}, which matches {count} sections")]
    AmbiguousSection {
        hotspot: HotspotId,
        section: SectionId,
        count: usize,
    },

    #[error("hotspot id {hotspot} is defined more than once")]
    DuplicateHotspot { hotspot: HotspotId },
}

/// Log every section link defect at startup.
pub fn report_section_links(config: Res<SceneConfig>, document: Res<AuthoredDocument>) {
    let issues = config.check_section_links(&document.0);
    if issues.is_empty() {
        info!(
            "{} hotspots linked to document sections",
            config.hotspots.hotspots.len()
        );
    }
    for issue in issues {
        warn!("{}", issue);
    }
}

/// The content document the scene links into.
#[derive(Resource, Debug, Clone)]
pub struct AuthoredDocument(pub ContentDocument);
