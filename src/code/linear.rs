//! The [`LinearCode`] analysis object.
//!
//! Construction parses and validates the parity-check matrix once; every
//! derived artifact (code space, generator matrix, minimum distance) is a
//! pure function of the immutable matrix and `limit`, computed on first
//! request and memoized in a [`OnceCell`] for the object's lifetime.

use std::cell::OnceCell;
use std::fmt;

use crate::code::distance::minimum_distance;
use crate::code::generator::derive_generator;
use crate::code::space::{enumerate_codewords, satisfies_all_checks};
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// A linear block code described by its parity-check matrix over the
/// integers modulo `limit`.
#[derive(Debug)]
pub struct LinearCode {
    parity_check: Matrix,
    limit: i64,
    codewords: OnceCell<Vec<Vec<i64>>>,
    generator: OnceCell<Option<Matrix>>,
    distance: OnceCell<usize>,
}

impl LinearCode {
    /// Builds a code from a parity-check matrix in bracket notation.
    ///
    /// # Arguments
    ///
    /// * `parity_check` - matrix string, e.g. `"{{1,1,1,1,0},{0,1,0,0,1}}"`
    /// * `limit` - alphabet size, at least 2 (2 for binary codes)
    ///
    /// Fails with [`Error::InvalidConfiguration`] for `limit < 2` and with
    /// [`Error::Parse`] / [`Error::InvalidMatrix`] for malformed input.
    /// There is no fallback to a default matrix here; that is a caller
    /// decision.
    pub fn new(parity_check: &str, limit: i64) -> Result<Self> {
        if limit < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "limit must be at least 2, got {limit}"
            )));
        }
        let parity_check = Matrix::parse(parity_check, limit)?;
        Self::from_matrix(parity_check, limit)
    }

    /// Builds a code from an already-parsed grid. Entries are re-reduced
    /// modulo `limit` so the residue invariant holds regardless of how the
    /// matrix was produced.
    pub fn from_matrix(parity_check: Matrix, limit: i64) -> Result<Self> {
        let parity_check = Matrix::from_rows(parity_check.rows().to_vec(), limit)?;
        Ok(LinearCode {
            parity_check,
            limit,
            codewords: OnceCell::new(),
            generator: OnceCell::new(),
            distance: OnceCell::new(),
        })
    }

    /// The normalized parity-check matrix.
    pub fn parity_check(&self) -> &Matrix {
        &self.parity_check
    }

    /// The alphabet size.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Codeword length `n` (column count of the parity-check matrix).
    pub fn block_length(&self) -> usize {
        self.parity_check.col_count()
    }

    /// Whether `word` satisfies all parity constraints. Vectors of the
    /// wrong length are simply invalid.
    pub fn is_valid_codeword(&self, word: &[i64]) -> bool {
        satisfies_all_checks(&self.parity_check, self.limit, word)
    }

    /// Validity test for a codeword written as a column vector in bracket
    /// notation, e.g. `"{{1},{0},{0},{0},{1}}"`.
    ///
    /// Returns `Ok(false)` for well-formed input that is not a column or
    /// not a codeword; propagates parse failures.
    pub fn check_word(&self, word: &str) -> Result<bool> {
        let parsed = Matrix::parse(word, self.limit)?;
        if parsed.col_count() != 1 {
            return Ok(false);
        }
        let vector: Vec<i64> = parsed.rows().iter().map(|row| row[0]).collect();
        Ok(self.is_valid_codeword(&vector))
    }

    /// All valid codewords in enumeration order. Computed on first call,
    /// then cached.
    pub fn codewords(&self) -> &[Vec<i64>] {
        self.codewords
            .get_or_init(|| enumerate_codewords(&self.parity_check, self.limit))
    }

    /// Number of valid codewords.
    pub fn codeword_count(&self) -> usize {
        self.codewords().len()
    }

    /// The systematic generator matrix, if the parity-check matrix has the
    /// `[-A | I]` shape. `None` means "not derivable by this method"; a
    /// generator may still exist under a different column ordering.
    pub fn generator_matrix(&self) -> Option<&Matrix> {
        let count = self.codeword_count();
        self.generator
            .get_or_init(|| derive_generator(&self.parity_check, self.limit, count))
            .as_ref()
    }

    /// Minimum Hamming distance of the code; 0 when fewer than two
    /// codewords exist.
    pub fn hamming_distance(&self) -> usize {
        *self
            .distance
            .get_or_init(|| minimum_distance(self.codewords()))
    }

    /// Information rate and redundancy metrics.
    pub fn summary(&self) -> CodeSummary {
        let message_length = floor_log(self.codeword_count(), self.limit);
        let block_length = self.block_length();
        CodeSummary {
            message_length,
            block_length,
            information_rate: message_length as f64 / block_length as f64,
            redundancy: block_length - message_length,
        }
    }
}

/// Information rate and redundancy of an analyzed code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeSummary {
    /// Message length `k = floor(log_limit(codeword count))`.
    pub message_length: usize,
    /// Codeword length `n`.
    pub block_length: usize,
    /// `k / n`.
    pub information_rate: f64,
    /// `n - k`, the number of added check symbols.
    pub redundancy: usize,
}

impl fmt::Display for CodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a {k} x 1 message word maps to a {n} x 1 codeword; \
             information rate {k}/{n} = {rate}; redundancy {red}",
            k = self.message_length,
            n = self.block_length,
            rate = self.information_rate,
            red = self.redundancy,
        )
    }
}

/// Largest `k` with `limit^k <= count`, by repeated division.
fn floor_log(count: usize, limit: i64) -> usize {
    let limit = limit as usize;
    let mut remaining = count;
    let mut k = 0;
    while remaining >= limit {
        remaining /= limit;
        k += 1;
    }
    k
}
