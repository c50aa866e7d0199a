use rand::Rng;
use serde::Serialize;

use super::classifier;
use super::emission::EmissionTable;
use super::state::State;
use super::transition::TransitionTable;

/// Maximum number of ranked predictions returned per call.
pub const MAX_PREDICTIONS: usize = 8;

/// One ranked next-character candidate.
///
/// `probability` is the product of the transition probability into
/// `state` and the emission probability of `character` under `state`.
/// Predictions are ephemeral: recomputed on every input change, never
/// mutated in place.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Prediction {
	pub character: char,
	pub state: State,
	pub probability: f64,
}

/// Complete result of one prediction pass, as consumed by renderers.
///
/// - `current_state`: classification of the input's last character, or
///   START for empty input.
/// - `predictions`: at most [`MAX_PREDICTIONS`] candidates, sorted by
///   probability descending (stable on ties).
/// - `entropy_bits`: uncertainty over the returned (renormalized) list.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
	pub current_state: State,
	pub predictions: Vec<Prediction>,
	pub entropy_bits: f64,
}

/// First-order hidden-state next-character predictor.
///
/// # Responsibilities
/// - Derive the current state from the last input character
/// - Combine transition and emission probabilities into scored candidates
/// - Rank candidates, truncate to the top [`MAX_PREDICTIONS`], and
///   compute the entropy of the truncated list
/// - Optionally sample one character from the ranked list (weighted)
///
/// # Invariants
/// - `predict` is a pure function: no internal state is advanced, and
///   identical inputs always produce identical outcomes
/// - The model does not walk the full input history; each prediction
///   depends only on the last character (deliberate simplification,
///   not a sequential HMM decode)
#[derive(Clone, Debug)]
pub struct Predictor {
	transitions: TransitionTable,
	emissions: EmissionTable,
}

impl Predictor {
	/// Builds a predictor over the validated static tables.
	///
	/// # Errors
	/// Propagates table validation failures (fatal configuration errors,
	/// see [`TransitionTable::new`] and [`EmissionTable::new`]).
	pub fn new() -> Result<Self, String> {
		Ok(Self {
			transitions: TransitionTable::new()?,
			emissions: EmissionTable::new()?,
		})
	}

	/// Derives the current state from the input buffer.
	///
	/// Empty input means no character has been typed yet, so the
	/// synthetic START state applies; otherwise the last character is
	/// classified. Total: every input has a defined current state.
	pub fn current_state(input: &str) -> State {
		match input.chars().last() {
			None => State::Start,
			Some(last) => classifier::classify(last),
		}
	}

	/// Ranks the most probable next characters for the given input.
	///
	/// Candidates are generated for every real state in enumeration
	/// order and every character of that state's distribution in table
	/// order, scored as transition × emission, stably sorted by score
	/// descending and truncated to [`MAX_PREDICTIONS`].
	pub fn predict(&self, input: &str) -> PredictionOutcome {
		let current_state = Self::current_state(input);

		let mut predictions = Vec::new();
		for state in State::REAL {
			let transition = self.transitions.probability(current_state, state);
			for &(character, emission) in self.emissions.entries(state) {
				predictions.push(Prediction {
					character,
					state,
					probability: transition * emission,
				});
			}
		}

		// Stable sort: equal probabilities keep generation order.
		predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
		predictions.truncate(MAX_PREDICTIONS);

		let entropy_bits = entropy_bits(&predictions);

		PredictionOutcome {
			current_state,
			predictions,
			entropy_bits,
		}
	}

	/// The full transition row out of `from`, for renderers.
	pub fn transition_row(&self, from: State) -> [(State, f64); 5] {
		self.transitions.row(from)
	}

	/// Draws one character from the ranked prediction list, weighted by
	/// probability.
	///
	/// Each call re-derives the state from the input's last character
	/// only, so repeated sampling walks the chain one independent step
	/// at a time. Returns `None` if no candidate has positive weight.
	pub fn sample(&self, input: &str) -> Option<char> {
		let outcome = self.predict(input);

		let total: f64 = outcome.predictions.iter().map(|p| p.probability).sum();
		if total <= 0.0 {
			return None;
		}

		let mut r = rand::rng().random_range(0.0..total);

		let mut fallback: Option<char> = None;
		for prediction in &outcome.predictions {
			if r < prediction.probability {
				return Some(prediction.character);
			}
			r -= prediction.probability;
			fallback = Some(prediction.character);
		}

		// Fallback: should not happen, but kept for safety.
		fallback
	}
}

/// Entropy in bits of a ranked prediction list.
///
/// The probabilities are renormalized to sum to 1 over the (already
/// truncated) list before summing −p·log2(p). This measures top-K
/// prediction uncertainty, not the model's theoretical entropy; the
/// truncated-list renormalization is intentional and must be preserved.
///
/// A single-element list has entropy exactly 0; so does an empty one.
pub fn entropy_bits(predictions: &[Prediction]) -> f64 {
	let total: f64 = predictions.iter().map(|p| p.probability).sum();
	if total <= 0.0 {
		return 0.0;
	}

	let mut entropy = 0.0;
	for prediction in predictions {
		if prediction.probability > 0.0 {
			let p = prediction.probability / total;
			entropy -= p * p.log2();
		}
	}
	entropy
}

#[cfg(test)]
mod tests {
	use super::{MAX_PREDICTIONS, Prediction, Predictor, entropy_bits};
	use crate::model::state::State;
	use pretty_assertions::assert_eq;

	fn predictor() -> Predictor {
		Predictor::new().unwrap()
	}

	#[test]
	fn empty_input_starts_from_start_state() {
		let outcome = predictor().predict("");
		assert_eq!(outcome.current_state, State::Start);
		assert!(!outcome.predictions.is_empty());
		// START transitions to every real state, so the top of the list
		// mixes candidates weighted by its full row.
		assert_eq!(outcome.predictions.len(), MAX_PREDICTIONS);
	}

	#[test]
	fn vowel_input_ranking() {
		let outcome = predictor().predict("a");
		assert_eq!(outcome.current_state, State::Vowel);

		// transition(VOWEL → SPACE) × emission(SPACE, ' ')
		// = 0.2 × 1.0 = 0.2 dominates every other product.
		let top = &outcome.predictions[0];
		assert_eq!(top.character, ' ');
		assert_eq!(top.state, State::Space);
		assert!((top.probability - 0.2).abs() < 1e-12);

		// Best consonant: transition(VOWEL → CONSONANT) × emission('t')
		// = 0.5 × 0.12 = 0.06, ranked right behind the space.
		let second = &outcome.predictions[1];
		assert_eq!(second.character, 't');
		assert_eq!(second.state, State::Consonant);
		assert!((second.probability - 0.06).abs() < 1e-12);

		for prediction in &outcome.predictions {
			assert!(prediction.probability <= top.probability);
		}
	}

	#[test]
	fn space_input_classifies_as_space() {
		let outcome = predictor().predict(" ");
		assert_eq!(outcome.current_state, State::Space);
	}

	#[test]
	fn last_character_alone_drives_the_state() {
		let engine = predictor();
		// Only the final character matters, not the history before it.
		assert_eq!(engine.predict("xyz a").current_state, State::Vowel);
		assert_eq!(engine.predict("a").current_state, State::Vowel);
		assert_eq!(
			engine.predict("hello, world 42").predictions,
			engine.predict("2").predictions
		);
	}

	#[test]
	fn predictions_are_capped_and_sorted() {
		let engine = predictor();
		for input in ["", "a", "t", " ", "7", ".", "@"] {
			let outcome = engine.predict(input);
			assert!(outcome.predictions.len() <= MAX_PREDICTIONS);
			for pair in outcome.predictions.windows(2) {
				assert!(pair[0].probability >= pair[1].probability);
			}
		}
	}

	#[test]
	fn predict_is_idempotent() {
		let engine = predictor();
		let first = engine.predict("hello");
		let second = engine.predict("hello");
		assert_eq!(first.current_state, second.current_state);
		assert_eq!(first.predictions, second.predictions);
		assert_eq!(first.entropy_bits, second.entropy_bits);
	}

	#[test]
	fn single_prediction_has_zero_entropy() {
		let single = [Prediction {
			character: ' ',
			state: State::Space,
			probability: 0.3,
		}];
		assert_eq!(entropy_bits(&single), 0.0);
		assert_eq!(entropy_bits(&[]), 0.0);
	}

	#[test]
	fn uniform_pair_has_one_bit_of_entropy() {
		let pair = [
			Prediction {
				character: 'a',
				state: State::Vowel,
				probability: 0.2,
			},
			Prediction {
				character: 'e',
				state: State::Vowel,
				probability: 0.2,
			},
		];
		assert!((entropy_bits(&pair) - 1.0).abs() < 1e-12);
	}

	#[test]
	fn entropy_uses_the_truncated_list_only() {
		let outcome = predictor().predict("a");
		// Recompute from the returned list: the engine must renormalize
		// over these (at most 8) entries, not the full candidate set.
		let total: f64 = outcome.predictions.iter().map(|p| p.probability).sum();
		let expected: f64 = outcome
			.predictions
			.iter()
			.map(|p| {
				let q = p.probability / total;
				-q * q.log2()
			})
			.sum();
		assert!((outcome.entropy_bits - expected).abs() < 1e-12);
		// Upper bound for an 8-entry distribution.
		assert!(outcome.entropy_bits <= 3.0 + 1e-12);
	}

	#[test]
	fn sampled_characters_come_from_the_ranked_list() {
		let engine = predictor();
		let outcome = engine.predict("a");
		for _ in 0..50 {
			let c = engine.sample("a").unwrap();
			assert!(
				outcome.predictions.iter().any(|p| p.character == c),
				"sampled {c:?} outside the ranked list"
			);
		}
	}
}
