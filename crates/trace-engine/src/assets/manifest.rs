use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::api::types::SoundEvent;

/// Asset manifest describing the audio clips a game can trigger.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    #[serde(default)]
    pub event_id: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Resolve a clip name to the sound event that plays it.
    /// Unknown clips, and clips without an event id, resolve to None.
    pub fn sound_id(&self, name: &str) -> Option<SoundEvent> {
        self.sounds
            .get(name)
            .and_then(|desc| desc.event_id)
            .map(SoundEvent)
    }
}
