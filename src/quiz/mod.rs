//! Quiz state machine and question authoring.

pub mod controller;
pub mod draft;
pub mod error;
pub mod question;
pub mod state;

pub use controller::{AuthoringPolicy, ControllerError, QuizController};
pub use draft::{DraftQuestion, OPTION_SLOTS};
pub use error::QuizError;
pub use question::{Question, default_questions};
pub use state::{Advance, Phase, QuizState};
