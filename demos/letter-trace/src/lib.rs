use wasm_bindgen::prelude::*;
use trace_engine::*;

pub mod error;
pub mod feedback;
pub mod game;
pub mod letter;
pub mod letters;
pub mod presenter;
pub mod region;
pub mod scenes;
pub mod session;
pub mod sounds;
pub mod stroke;
pub mod waypoint;

pub use error::{ConfigError, LetterError};
pub use game::{LetterTrace, CUSTOM_LOAD_SCENE};
pub use letter::{LetterProgress, LetterResult};
pub use letters::LetterLibrary;
pub use scenes::Scene;
pub use session::GameSession;
pub use stroke::{StrokeState, TraceResult, TraceStroke};

trace_web::export_game!(LetterTrace, "letter-trace");
