use super::state::State;

/// ASCII vowels, both cases.
const VOWELS: &str = "aeiouAEIOU";

/// Punctuation characters the model knows about.
const PUNCTUATION: &str = ".,!?;:()[]{}\"-'";

/// Classifies a single character into a real model state.
///
/// Rules, in order:
/// - ASCII vowel (either case) → `Vowel`
/// - any other ASCII letter → `Consonant`
/// - the space character → `Space`
/// - ASCII digit → `Digit`
/// - one of the fixed punctuation set → `Punctuation`
/// - anything else (unrecognized symbols, non-ASCII) → `Consonant`
///
/// The last rule is a deliberate policy: unclassified input is treated as
/// consonant-equivalent so the function stays total. Never returns `Start`.
pub fn classify(character: char) -> State {
	if VOWELS.contains(character) {
		State::Vowel
	} else if character.is_ascii_alphabetic() {
		State::Consonant
	} else if character == ' ' {
		State::Space
	} else if character.is_ascii_digit() {
		State::Digit
	} else if PUNCTUATION.contains(character) {
		State::Punctuation
	} else {
		State::Consonant
	}
}

#[cfg(test)]
mod tests {
	use super::classify;
	use crate::model::state::State;
	use pretty_assertions::assert_eq;

	#[test]
	fn vowels_both_cases() {
		for c in "aeiouAEIOU".chars() {
			assert_eq!(classify(c), State::Vowel, "vowel {c:?}");
		}
	}

	#[test]
	fn consonant_letters() {
		for c in "bcdfghjklmnpqrstvwxyzBCDFGHJKLMNPQRSTVWXYZ".chars() {
			assert_eq!(classify(c), State::Consonant, "consonant {c:?}");
		}
	}

	#[test]
	fn space_digits_punctuation() {
		assert_eq!(classify(' '), State::Space);
		for c in "0123456789".chars() {
			assert_eq!(classify(c), State::Digit, "digit {c:?}");
		}
		for c in ".,!?;:()[]{}\"-'".chars() {
			assert_eq!(classify(c), State::Punctuation, "punctuation {c:?}");
		}
	}

	#[test]
	fn fallback_is_consonant() {
		// Unrecognized symbols and non-ASCII fall back to Consonant.
		for c in ['@', '#', '~', '\t', '\n', 'é', 'ß', '日'] {
			assert_eq!(classify(c), State::Consonant, "fallback {c:?}");
		}
	}

	#[test]
	fn never_returns_start() {
		for c in (0u8..=255).map(char::from) {
			assert!(classify(c).is_real(), "char {c:?} classified as START");
		}
	}
}
