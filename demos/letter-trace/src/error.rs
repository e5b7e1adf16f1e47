use thiserror::Error;

/// A scene was wired up without something it needs. Never fatal: the
/// affected feature goes inert and the rest of the scene keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no letter is assigned to the game session")]
    MissingLetter,
    #[error("no win surface is configured; the win screen will not be shown")]
    MissingWinSurface,
    #[error("no letter asset for '{0}'")]
    UnknownLetter(char),
}

/// Problems loading a letter library.
#[derive(Debug, Error)]
pub enum LetterError {
    #[error("invalid letter JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("letter key '{0}' must be a single character")]
    BadKey(String),
    #[error("letter '{letter}': threshold must be a positive number, got {value}")]
    InvalidThreshold { letter: char, value: f32 },
    #[error("letter '{letter}', stroke '{stroke}': region polygon needs at least 3 points")]
    DegeneratePolygon { letter: char, stroke: String },
    #[error("letter '{letter}', stroke '{stroke}': corridor half width must be positive")]
    InvalidCorridor { letter: char, stroke: String },
}
