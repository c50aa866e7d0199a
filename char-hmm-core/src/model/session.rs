use super::predictor::{PredictionOutcome, Predictor};
use super::state::State;

/// One editing session over a text buffer.
///
/// The session owns the raw input text and recomputes predictions on
/// demand after each edit. The current state is always derived from the
/// buffer (classification of its last character); it is never stored or
/// independently settable, so the session carries no hidden mutable
/// model state. Sessions are not persisted: drop one, start fresh.
#[derive(Clone, Debug)]
pub struct PredictorSession {
	predictor: Predictor,
	input: String,
}

impl PredictorSession {
	/// Creates a session with an empty input buffer.
	///
	/// # Errors
	/// Propagates table validation failures from [`Predictor::new`].
	pub fn new() -> Result<Self, String> {
		Ok(Self {
			predictor: Predictor::new()?,
			input: String::new(),
		})
	}

	/// The current input buffer.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Replaces the whole buffer (external edit events that rewrite the
	/// field, e.g. paste or programmatic updates).
	pub fn set_input(&mut self, text: &str) {
		self.input.clear();
		self.input.push_str(text);
	}

	/// Appends one typed character.
	pub fn push(&mut self, character: char) {
		self.input.push(character);
	}

	/// Removes the last character (backspace). Returns it, or `None`
	/// if the buffer was already empty.
	pub fn backspace(&mut self) -> Option<char> {
		self.input.pop()
	}

	/// The derived current state: START for an empty buffer, otherwise
	/// the classification of the last character.
	pub fn current_state(&self) -> State {
		Predictor::current_state(&self.input)
	}

	/// Runs one full prediction pass over the current buffer.
	///
	/// Purely derived from the buffer contents; calling this twice
	/// without an edit in between returns identical outcomes.
	pub fn outcome(&self) -> PredictionOutcome {
		self.predictor.predict(&self.input)
	}

	/// Access to the underlying predictor (transition rows, sampling).
	pub fn predictor(&self) -> &Predictor {
		&self.predictor
	}
}
