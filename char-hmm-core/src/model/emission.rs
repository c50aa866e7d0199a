use super::state::State;
use super::transition::SUM_TOLERANCE;

/// Sparse emission distributions per real state, in ranking order.
///
/// Only representative high-frequency characters are modeled; anything
/// absent has probability 0. Slice order is significant: it is the
/// candidate generation order, which stable sorting preserves on ties.
const VOWEL: &[(char, f64)] = &[
	('a', 0.25),
	('e', 0.25),
	('i', 0.15),
	('o', 0.15),
	('u', 0.15),
	('A', 0.05),
];

const CONSONANT: &[(char, f64)] = &[
	('t', 0.12),
	('n', 0.10),
	('s', 0.10),
	('r', 0.08),
	('l', 0.08),
	('h', 0.07),
	('d', 0.07),
	('c', 0.06),
	('m', 0.06),
	('f', 0.05),
	('p', 0.05),
	('g', 0.04),
	('w', 0.04),
	('y', 0.04),
	('b', 0.04),
];

const SPACE: &[(char, f64)] = &[(' ', 1.0)];

const DIGIT: &[(char, f64)] = &[
	('1', 0.15),
	('2', 0.12),
	('3', 0.11),
	('0', 0.11),
	('5', 0.10),
	('4', 0.09),
	('9', 0.08),
	('8', 0.08),
	('7', 0.08),
	('6', 0.08),
];

const PUNCTUATION: &[(char, f64)] = &[
	('.', 0.4),
	(',', 0.25),
	('!', 0.1),
	('?', 0.1),
	(';', 0.05),
	(':', 0.05),
	('(', 0.025),
	(')', 0.025),
];

/// Per-state emission distributions over representative characters.
///
/// # Responsibilities
/// - Answer `probability(state, character)` lookups (0.0 when absent)
/// - Expose each state's ordered distribution for candidate generation
/// - Validate at construction that each distribution sums to 1
///
/// # Invariants
/// - Distributions are immutable, fixed at construction
/// - For every real state, Σ over its enumerated characters == 1.0 ± 1e-6
/// - START has no distribution (empty slice)
#[derive(Clone, Debug)]
pub struct EmissionTable {
	distributions: [&'static [(char, f64)]; 5],
}

impl EmissionTable {
	/// Builds the table from the baked-in constants and validates it.
	///
	/// # Errors
	/// Returns an error naming the offending state if one of the five
	/// distributions does not sum to 1.0 within tolerance.
	pub fn new() -> Result<Self, String> {
		let table = Self {
			distributions: [VOWEL, CONSONANT, SPACE, DIGIT, PUNCTUATION],
		};
		table.validate()?;
		Ok(table)
	}

	/// Checks every distribution sum.
	fn validate(&self) -> Result<(), String> {
		for state in State::REAL {
			let sum: f64 = self.entries(state).iter().map(|(_, p)| p).sum();
			if (sum - 1.0).abs() > SUM_TOLERANCE {
				return Err(format!(
					"Emission distribution for {} sums to {} instead of 1.0",
					state.name(),
					sum
				));
			}
		}
		Ok(())
	}

	/// The ordered distribution for `state`. Empty for `Start`.
	pub fn entries(&self, state: State) -> &'static [(char, f64)] {
		if state.is_real() {
			self.distributions[state.index()]
		} else {
			&[]
		}
	}

	/// Probability that `state` emits `character`.
	///
	/// Returns 0.0 when the character is absent from the state's
	/// distribution (the table is sparse) and for `Start`.
	pub fn probability(&self, state: State, character: char) -> f64 {
		self.entries(state)
			.iter()
			.find(|(c, _)| *c == character)
			.map(|(_, p)| *p)
			.unwrap_or(0.0)
	}
}
