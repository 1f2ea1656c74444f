pub mod email_guess;
pub mod envelope;
pub mod finder_input;
pub mod finder_response;
pub mod normalized_input;
pub mod pattern_label;

pub use email_guess::{Confidence, EmailGuess};
pub use envelope::FinderEnvelope;
pub use finder_input::FinderInput;
pub use finder_response::FinderResponse;
pub use normalized_input::{ClueSignals, NormalizedInput};
pub use pattern_label::{InitialStyle, PatternLabel, SeparatorStyle};
