use std::fmt;

/// A screen the player can be on. Displays as "Home" or "Letter A".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    /// Letter picker.
    #[default]
    Home,
    /// Tracing one letter.
    Letter(char),
}

impl Scene {
    /// Scene code used on the wire: 0 for Home, the letter's scalar value otherwise.
    pub fn code(self) -> u32 {
        match self {
            Scene::Home => 0,
            Scene::Letter(ch) => ch as u32,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Scene::Home),
            _ => char::from_u32(code).map(Scene::Letter),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::Home => write!(f, "Home"),
            Scene::Letter(ch) => write!(f, "Letter {ch}"),
        }
    }
}

/// Keeps track of which scene is showing.
#[derive(Debug, Clone, Default)]
pub struct SceneLoader {
    current: Scene,
}

impl SceneLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Switch to `scene`. Returns the scene that was showing.
    pub fn load(&mut self, scene: Scene) -> Scene {
        log::info!("loading scene '{}'", scene);
        std::mem::replace(&mut self.current, scene)
    }
}
