use super::state::State;

/// Tolerance used when checking that a probability row sums to 1.
pub(crate) const SUM_TOLERANCE: f64 = 1e-6;

/// Transition probabilities `[from][to]`, indexed by `State::index`.
///
/// The last column (START) is all-zero: START is never a destination.
const MATRIX: [[f64; 6]; 6] = [
	// VOWEL to: [V, C, S, D, P, START]
	[0.2, 0.5, 0.2, 0.05, 0.05, 0.0],
	// CONSONANT to:
	[0.6, 0.2, 0.15, 0.03, 0.02, 0.0],
	// SPACE to:
	[0.3, 0.5, 0.1, 0.05, 0.05, 0.0],
	// DIGIT to:
	[0.1, 0.1, 0.2, 0.5, 0.1, 0.0],
	// PUNCTUATION to:
	[0.2, 0.3, 0.4, 0.05, 0.05, 0.0],
	// START to:
	[0.3, 0.5, 0.1, 0.05, 0.05, 0.0],
];

/// Static first-order transition matrix between character states.
///
/// # Responsibilities
/// - Answer `probability(from, to)` lookups in O(1)
/// - Expose a full row (real targets only) for renderers
/// - Validate at construction that every row sums to 1 over real targets
///
/// # Invariants
/// - The matrix is baked in at construction and never mutated
/// - For every source state, Σ over the five real targets == 1.0 ± 1e-6
/// - The START column is always 0
#[derive(Clone, Debug)]
pub struct TransitionTable {
	matrix: [[f64; 6]; 6],
}

impl TransitionTable {
	/// Builds the table from the baked-in constants and validates it.
	///
	/// # Errors
	/// Returns an error naming the offending source state if a row does
	/// not sum to 1.0 within tolerance. This is a fatal configuration
	/// error: the engine must not be used with an invalid table.
	pub fn new() -> Result<Self, String> {
		let table = Self { matrix: MATRIX };
		table.validate()?;
		Ok(table)
	}

	/// Checks every row sum over the real target states.
	fn validate(&self) -> Result<(), String> {
		for from in [
			State::Vowel,
			State::Consonant,
			State::Space,
			State::Digit,
			State::Punctuation,
			State::Start,
		] {
			let sum: f64 = State::REAL
				.iter()
				.map(|to| self.matrix[from.index()][to.index()])
				.sum();
			if (sum - 1.0).abs() > SUM_TOLERANCE {
				return Err(format!(
					"Transition row for {} sums to {} instead of 1.0",
					from.name(),
					sum
				));
			}
		}
		Ok(())
	}

	/// Probability of moving from `from` to `to`.
	///
	/// Asking for `to = Start` is legal and always returns 0.0.
	pub fn probability(&self, from: State, to: State) -> f64 {
		self.matrix[from.index()][to.index()]
	}

	/// The full outgoing row for `from`, real targets only, in
	/// enumeration order. This is the renderer-facing view (transition
	/// percentages, graph edges).
	pub fn row(&self, from: State) -> [(State, f64); 5] {
		State::REAL.map(|to| (to, self.probability(from, to)))
	}
}

#[cfg(test)]
mod tests {
	use super::{SUM_TOLERANCE, TransitionTable};
	use crate::model::state::State;

	#[test]
	fn construction_validates() {
		assert!(TransitionTable::new().is_ok());
	}

	#[test]
	fn every_row_sums_to_one() {
		let table = TransitionTable::new().unwrap();
		for from in [
			State::Vowel,
			State::Consonant,
			State::Space,
			State::Digit,
			State::Punctuation,
			State::Start,
		] {
			let sum: f64 = table.row(from).iter().map(|(_, p)| p).sum();
			assert!(
				(sum - 1.0).abs() <= SUM_TOLERANCE,
				"row {} sums to {}",
				from.name(),
				sum
			);
		}
	}

	#[test]
	fn start_is_unreachable() {
		let table = TransitionTable::new().unwrap();
		for from in [
			State::Vowel,
			State::Consonant,
			State::Space,
			State::Digit,
			State::Punctuation,
			State::Start,
		] {
			assert_eq!(table.probability(from, State::Start), 0.0);
		}
	}

	#[test]
	fn known_entries() {
		let table = TransitionTable::new().unwrap();
		assert_eq!(table.probability(State::Vowel, State::Consonant), 0.5);
		assert_eq!(table.probability(State::Consonant, State::Vowel), 0.6);
		assert_eq!(table.probability(State::Start, State::Consonant), 0.5);
		assert_eq!(table.probability(State::Digit, State::Digit), 0.5);
	}
}
