use std::collections::BTreeMap;

use glam::Vec2;
use serde::Deserialize;

use crate::error::LetterError;
use crate::feedback::Rgba;
use crate::letter::LetterProgress;
use crate::region::Region;
use crate::session::SessionConfig;
use crate::sounds::{ClipNames, SoundClips};
use crate::stroke::{
    StrokeStyle, TraceStroke, DEFAULT_COMPLETED_COLOR, DEFAULT_GUIDE_COLOR, DEFAULT_THRESHOLD,
};

const BUILTIN_LETTERS: &str = include_str!("../assets/letters.json");

/// Top-level letter library as stored on disk.
#[derive(Debug, Deserialize)]
struct LibraryFile {
    #[serde(default = "default_win_panel")]
    win_panel: bool,
    #[serde(default)]
    sounds: ClipNames,
    letters: BTreeMap<String, LetterDef>,
}

/// Definition of one letter: its strokes in tracing order.
#[derive(Debug, Clone, Deserialize)]
pub struct LetterDef {
    /// Pickup distance for waypoints, in world units.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    pub strokes: Vec<StrokeDef>,
}

/// Definition of one stroke.
#[derive(Debug, Clone, Deserialize)]
pub struct StrokeDef {
    pub name: String,
    /// Waypoints in tracing order, as [x, y] world coordinates.
    pub waypoints: Vec<[f32; 2]>,
    /// Interactive area. Absent means the pointer can't leave.
    #[serde(default)]
    pub region: Option<RegionDef>,
    #[serde(default = "default_completed_color")]
    pub completed_color: Rgba,
    #[serde(default = "default_guide_color")]
    pub guide_color: Rgba,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionDef {
    Polygon { points: Vec<[f32; 2]> },
    Corridor { half_width: f32 },
}

fn default_win_panel() -> bool {
    true
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

fn default_completed_color() -> Rgba {
    DEFAULT_COMPLETED_COLOR
}

fn default_guide_color() -> Rgba {
    DEFAULT_GUIDE_COLOR
}

fn to_vec2(points: &[[f32; 2]]) -> Vec<Vec2> {
    points.iter().map(|&p| Vec2::from(p)).collect()
}

/// All the letters the game knows how to teach.
#[derive(Debug, Clone)]
pub struct LetterLibrary {
    win_panel: bool,
    clip_names: ClipNames,
    letters: BTreeMap<char, LetterDef>,
}

impl LetterLibrary {
    /// Parse and validate a letter library.
    pub fn from_json(json: &str) -> Result<Self, LetterError> {
        let file: LibraryFile = serde_json::from_str(json)?;
        let mut letters = BTreeMap::new();
        for (key, def) in file.letters {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(LetterError::BadKey(key));
            };
            validate(ch, &def)?;
            letters.insert(ch, def);
        }
        Ok(Self {
            win_panel: file.win_panel,
            clip_names: file.sounds,
            letters,
        })
    }

    /// The letters bundled with the game (A, B, C on an 800x600 world).
    pub fn builtin() -> Result<Self, LetterError> {
        Self::from_json(BUILTIN_LETTERS)
    }

    /// A library with no letters.
    pub fn empty() -> Self {
        Self {
            win_panel: true,
            clip_names: ClipNames::default(),
            letters: BTreeMap::new(),
        }
    }

    pub fn clip_names(&self) -> &ClipNames {
        &self.clip_names
    }

    /// Letters in the library, in order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.keys().copied()
    }

    /// Session settings for scenes built from this library.
    pub fn session_config(&self, clips: &SoundClips) -> SessionConfig {
        SessionConfig {
            win_surface: self.win_panel,
            letter_completed_sound: clips.letter_completed,
        }
    }

    /// Build the runtime progress tracker for a letter.
    pub fn build(&self, ch: char, clips: &SoundClips) -> Option<LetterProgress> {
        let def = self.letters.get(&ch)?;
        let strokes = def
            .strokes
            .iter()
            .map(|s| {
                let waypoints = to_vec2(&s.waypoints);
                let region = match &s.region {
                    None => Region::Unbounded,
                    Some(RegionDef::Polygon { points }) => Region::Polygon(to_vec2(points)),
                    Some(RegionDef::Corridor { .. }) if waypoints.is_empty() => {
                        log::warn!(
                            "letter '{}' stroke '{}': corridor has no path, leaving it unbounded",
                            ch,
                            s.name
                        );
                        Region::Unbounded
                    }
                    Some(RegionDef::Corridor { half_width }) => Region::Corridor {
                        path: waypoints.clone(),
                        half_width: *half_width,
                    },
                };
                let style = StrokeStyle {
                    completed_color: s.completed_color,
                    guide_color: s.guide_color,
                    completed_sound: clips.stroke_completed,
                    reset_sound: clips.trace_reset,
                };
                TraceStroke::new(s.name.clone(), waypoints, def.threshold)
                    .with_region(region)
                    .with_style(style)
            })
            .collect();
        Some(LetterProgress::new(ch.to_string(), strokes))
    }
}

fn validate(letter: char, def: &LetterDef) -> Result<(), LetterError> {
    if !(def.threshold.is_finite() && def.threshold > 0.0) {
        return Err(LetterError::InvalidThreshold {
            letter,
            value: def.threshold,
        });
    }
    for stroke in &def.strokes {
        match &stroke.region {
            Some(RegionDef::Polygon { points }) if points.len() < 3 => {
                return Err(LetterError::DegeneratePolygon {
                    letter,
                    stroke: stroke.name.clone(),
                });
            }
            Some(RegionDef::Corridor { half_width }) if !(*half_width > 0.0) => {
                return Err(LetterError::InvalidCorridor {
                    letter,
                    stroke: stroke.name.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
