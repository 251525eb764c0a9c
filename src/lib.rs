#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Default circuit parameters and sampling constants.
pub mod constants;
/// Shared numerical aliases and helpers.
pub mod math;
/// Closed-form free response and its envelopes.
pub mod oscillator;
/// Evenly spaced time grids.
pub mod sampling;
/// Sampled curves and CSV export.
pub mod waveform;
/// SVG chart rendering.
pub mod plot;
/// Run configuration tying evaluation and rendering together.
pub mod config;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
