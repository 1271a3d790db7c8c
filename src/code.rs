//! Linear block code analysis.
//!
//! The entry point is [`LinearCode`], built from a parity-check matrix and
//! an alphabet size. The submodules hold the pure computations it memoizes:
//!
//! - [`space`]: exhaustive enumeration of all valid codewords
//! - [`generator`]: systematic generator-matrix derivation
//! - [`distance`]: minimum pairwise Hamming distance
//!
//! Enumeration and distance analysis are deliberately brute force,
//! `O(limit^n)` and `O(|codewords|^2)` respectively. They are meant for
//! small demonstrative codes; past roughly 10^7 candidate vectors the
//! enumeration logs a warning and will not finish in reasonable time.

pub mod distance;
pub mod generator;
pub mod linear;
pub mod space;

pub use distance::{hamming_distance, minimum_distance};
pub use generator::derive_generator;
pub use linear::{CodeSummary, LinearCode};
pub use space::enumerate_codewords;
