use serde::Deserialize;
use trace_engine::{AssetManifest, SoundEvent};

// Sound ids used until a manifest says otherwise (Rust → front-end)
pub const SOUND_STROKE_COMPLETED: SoundEvent = SoundEvent(1);
pub const SOUND_TRACE_RESET: SoundEvent = SoundEvent(2);
pub const SOUND_LETTER_COMPLETED: SoundEvent = SoundEvent(3);

/// Clip names as written in the letter library.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClipNames {
    #[serde(default)]
    pub stroke_completed: Option<String>,
    #[serde(default)]
    pub trace_reset: Option<String>,
    #[serde(default)]
    pub letter_completed: Option<String>,
}

/// The clips the game plays, resolved to sound events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundClips {
    pub stroke_completed: Option<SoundEvent>,
    pub trace_reset: Option<SoundEvent>,
    pub letter_completed: Option<SoundEvent>,
}

impl Default for SoundClips {
    fn default() -> Self {
        Self {
            stroke_completed: Some(SOUND_STROKE_COMPLETED),
            trace_reset: Some(SOUND_TRACE_RESET),
            letter_completed: Some(SOUND_LETTER_COMPLETED),
        }
    }
}

impl SoundClips {
    /// Resolve named clips through a manifest. A clip that isn't named, or
    /// that the manifest doesn't know, stays silent.
    pub fn from_manifest(names: &ClipNames, manifest: &AssetManifest) -> Self {
        let lookup = |name: &Option<String>| {
            let name = name.as_deref()?;
            let id = manifest.sound_id(name);
            if id.is_none() {
                log::warn!("sound '{}' not found in manifest", name);
            }
            id
        };
        Self {
            stroke_completed: lookup(&names.stroke_completed),
            trace_reset: lookup(&names.trace_reset),
            letter_completed: lookup(&names.letter_completed),
        }
    }
}
