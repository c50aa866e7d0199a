use serde::{Deserialize, Serialize};

/// Character category used as a hidden state of the model.
///
/// Every character of the input maps to exactly one of the five real
/// categories. `Start` is synthetic: it is the source state before any
/// input exists and is never a valid classification result nor a valid
/// transition target.
///
/// ## Invariants
/// - The discriminant order (`index`) matches the row/column order of the
///   transition matrix and the emission table.
/// - `Start` always has index 5 (the last column, kept all-zero).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
	Vowel,
	Consonant,
	Space,
	Digit,
	Punctuation,
	Start,
}

impl State {
	/// The five real states, in enumeration order.
	///
	/// `Start` is excluded: it is never a transition target and has no
	/// emission distribution. Iteration order matters for tie-breaking
	/// (stable sort over candidates generated in this order).
	pub const REAL: [State; 5] = [
		State::Vowel,
		State::Consonant,
		State::Space,
		State::Digit,
		State::Punctuation,
	];

	/// Row/column index of the state in the probability tables.
	pub fn index(self) -> usize {
		match self {
			State::Vowel => 0,
			State::Consonant => 1,
			State::Space => 2,
			State::Digit => 3,
			State::Punctuation => 4,
			State::Start => 5,
		}
	}

	/// Display name, as exposed to renderers.
	pub fn name(self) -> &'static str {
		match self {
			State::Vowel => "VOWEL",
			State::Consonant => "CONSONANT",
			State::Space => "SPACE",
			State::Digit => "DIGIT",
			State::Punctuation => "PUNCTUATION",
			State::Start => "START",
		}
	}

	/// Parses a display name back into a state (case-insensitive).
	///
	/// Returns `None` for unknown names.
	pub fn from_name(name: &str) -> Option<State> {
		match name.to_uppercase().as_str() {
			"VOWEL" => Some(State::Vowel),
			"CONSONANT" => Some(State::Consonant),
			"SPACE" => Some(State::Space),
			"DIGIT" => Some(State::Digit),
			"PUNCTUATION" => Some(State::Punctuation),
			"START" => Some(State::Start),
			_ => None,
		}
	}

	/// Whether the state is one of the five real categories.
	pub fn is_real(self) -> bool {
		self != State::Start
	}
}
