use bevy::prelude::*;
use serde::Serialize;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelLoadState {
    /// Nothing requested; the scene is not mounted.
    #[default]
    Idle,
    Loading {
        attempt: u32,
    },
    Loaded {
        vertex_count: usize,
    },
    Failed {
        attempts: u32,
        reason: String,
    },
}

impl ModelLoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelLoadState::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ModelLoadState::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_state_tag() {
        let value = serde_json::to_value(ModelLoadState::Loaded { vertex_count: 4 }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "state": "loaded", "vertex_count": 4 })
        );

        let value = serde_json::to_value(ModelLoadState::Idle).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "idle" }));
    }
}
