use char_hmm_core::model::predictor::Predictor;
use char_hmm_core::model::session::PredictorSession;
use char_hmm_core::model::state::State;

fn print_outcome(label: &str, outcome: &char_hmm_core::model::predictor::PredictionOutcome) {
    println!("--- {} ---", label);
    println!("Current state: {}", outcome.current_state.name());
    for prediction in &outcome.predictions {
        // The space character is made visible for terminal output
        let shown = if prediction.character == ' ' { '␣' } else { prediction.character };
        println!(
            "  {}  {:<11}  {:>5.1}%",
            shown,
            prediction.state.name(),
            prediction.probability * 100.0
        );
    }
    println!("Entropy: {:.3} bits", outcome.entropy_bits);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build the predictor; the static tables are validated here once
    // (row sums and distribution sums must equal 1.0)
    let predictor = Predictor::new()?;

    // Empty input: predictions come from the synthetic START state
    print_outcome("no input yet", &predictor.predict(""));

    // A single vowel: the most likely follow-up is a space, then 't'
    print_outcome("after 'a'", &predictor.predict("a"));

    // Only the last character matters, the rest of the buffer is context
    // for the caller, not for the model
    print_outcome("after 'hello world'", &predictor.predict("hello world"));

    // The full transition row for the current state, as a renderer
    // would display it next to the prediction list
    println!("--- transitions out of VOWEL ---");
    for (target, probability) in predictor.transition_row(State::Vowel) {
        println!("  -> {:<11}  {:>5.1}%", target.name(), probability * 100.0);
    }

    // A session owns the input buffer and re-derives everything per edit
    let mut session = PredictorSession::new()?;
    for character in "hi".chars() {
        session.push(character);
    }
    println!(
        "Session {:?}: state {}",
        session.input(),
        session.current_state().name()
    );

    // Backspace drops the last character; the state follows the buffer
    session.backspace();
    println!(
        "Session {:?}: state {}",
        session.input(),
        session.current_state().name()
    );

    // Weighted sampling over the ranked list can walk out a short
    // sequence, one independent step at a time
    let mut generated = String::new();
    for _ in 0..30 {
        match predictor.sample(&generated) {
            Some(next) => generated.push(next),
            None => break,
        }
    }
    println!("Sampled sequence: {:?}", generated);

    Ok(())
}
