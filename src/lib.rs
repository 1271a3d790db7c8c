//! Analysis of linear block codes over integer residue rings.
//!
//! A linear block code is described here by its parity-check matrix `H` over
//! the integers modulo `limit`: a vector `c` of length `n` is a codeword iff
//! `Hc ≡ 0 (mod limit)`. Given `H` in the bracketed numeric notation
//! (`{{1,1,1,1,0},{0,1,0,0,1}}`) this crate tests codeword validity,
//! enumerates the full code space, derives a systematic generator matrix
//! when `H = [-A | I]`, and measures the minimum Hamming distance along with
//! information rate and redundancy.
//!
//! # Examples
//!
//! ```rust
//! use paritycheck::LinearCode;
//!
//! let code = LinearCode::new("{{1,1,1,1,0},{0,1,0,0,1}}", 2).unwrap();
//! assert_eq!(code.codeword_count(), 8);
//! assert_eq!(code.hamming_distance(), 2);
//! assert!(code.is_valid_codeword(&[0, 0, 0, 0, 0]));
//! ```

pub mod code;
pub mod error;
pub mod matrix;

pub use code::{CodeSummary, LinearCode};
pub use error::{Error, Result};
pub use matrix::Matrix;
