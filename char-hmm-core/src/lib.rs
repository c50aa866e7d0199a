//! Hidden-state next-character prediction library.
//!
//! This crate provides a small predictive text model including:
//! - Character-to-state classification over a closed category set
//! - A static first-order transition matrix between categories
//! - Sparse per-category emission distributions
//! - Top-K ranked next-character prediction with an entropy metric
//!
//! All probabilities are fixed constants validated at construction;
//! there is no training, persistence, or lookahead. Rendering is left
//! to external consumers of the `PredictionOutcome` contract.

/// Core model types and the prediction engine.
pub mod model;
