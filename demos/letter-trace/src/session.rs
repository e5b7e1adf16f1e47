use trace_engine::SoundEvent;

use crate::error::ConfigError;
use crate::feedback::{self, Presenter};
use crate::letter::LetterProgress;

/// What the session was given to work with.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Whether the scene has a win panel to show.
    pub win_surface: bool,
    /// Played when the letter is finished.
    pub letter_completed_sound: Option<SoundEvent>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            win_surface: true,
            letter_completed_sound: None,
        }
    }
}

/// Shows the win screen once the letter is done.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    /// Name of the letter this session watches.
    letter: Option<String>,
    won: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            letter: None,
            won: false,
        }
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Name of the letter this session is bound to.
    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    /// Bind to a letter and hide the win surface.
    ///
    /// Returns the first configuration problem found. Everything that can be
    /// set up still is: a missing win surface leaves the letter bound, a
    /// missing letter leaves the session inert.
    pub fn initialize(
        &mut self,
        letter: Option<&LetterProgress>,
        out: &mut dyn Presenter,
    ) -> Result<(), ConfigError> {
        self.won = false;
        self.letter = letter.map(|l| l.name().to_owned());

        if self.config.win_surface {
            out.set_visible(false);
        }

        if self.letter.is_none() {
            return Err(ConfigError::MissingLetter);
        }
        if !self.config.win_surface {
            return Err(ConfigError::MissingWinSurface);
        }
        Ok(())
    }

    /// React to the bound letter being finished.
    pub fn on_letter_completed(&mut self, letter: &str, out: &mut dyn Presenter) {
        if self.letter.as_deref() != Some(letter) {
            log::debug!("session ignoring completion of unbound letter '{}'", letter);
            return;
        }
        log::info!("letter '{}' completed, showing win panel", letter);
        self.won = true;
        if self.config.win_surface {
            out.set_visible(true);
        }
        feedback::play_one_shot(out, self.config.letter_completed_sound);
    }
}
