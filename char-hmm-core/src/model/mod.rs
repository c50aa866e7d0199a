//! Top-level module for the character prediction system.
//!
//! This crate provides a static first-order hidden-state character
//! predictor, including:
//! - The closed state enumeration (`State`)
//! - Character-to-state classification (`classifier`)
//! - The fixed transition matrix (`TransitionTable`)
//! - Sparse per-state emission distributions (`EmissionTable`)
//! - Scoring, ranking, and entropy (`Predictor`)
//! - Per-input-session bookkeeping (`PredictorSession`)

/// Closed enumeration of character states.
///
/// Five real categories plus the synthetic START source state.
/// Carries the index mapping shared by both probability tables.
pub mod state;

/// Total character-to-state classification.
///
/// A pure function over all characters; unrecognized input falls back
/// to the consonant category by policy.
pub mod classifier;

/// Static state-transition probability matrix.
///
/// Validated at construction (row sums), immutable afterwards.
pub mod transition;

/// Sparse per-state emission distributions.
///
/// Validated at construction (distribution sums), immutable afterwards.
pub mod emission;

/// The prediction engine: scoring, top-K ranking, entropy, sampling.
///
/// Exposes the renderer-facing `PredictionOutcome` contract.
pub mod predictor;

/// Editing-session wrapper owning the input buffer.
///
/// The current state is derived from the buffer, never stored.
pub mod session;
