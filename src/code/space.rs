//! Exhaustive code space enumeration.
//!
//! Every vector of length `n` over `{0, .., limit-1}` is generated in
//! base-`limit` counting order (most significant digit first) and tested
//! against all parity constraints. The ordering is part of the contract:
//! distance analysis and report formatting rely on it being reproduced
//! exactly on every run.

use num_integer::Integer;
use num_traits::checked_pow;

use crate::matrix::Matrix;

/// Candidate count past which enumeration is not expected to finish in
/// reasonable time. Crossing it logs a warning; there is no hard cap.
const FEASIBLE_CANDIDATES: u128 = 10_000_000;

/// Enumerates all valid codewords of the code defined by `parity_check`
/// over the integers modulo `limit`.
///
/// Visits all `limit^n` candidates where `n` is the column count, retaining
/// those satisfying every parity row. `O(limit^n * m * n)`.
pub fn enumerate_codewords(parity_check: &Matrix, limit: i64) -> Vec<Vec<i64>> {
    let n = parity_check.col_count();
    match checked_pow(limit as u128, n) {
        Some(total) if total <= FEASIBLE_CANDIDATES => {}
        _ => log::warn!(
            "enumerating {limit}^{n} candidate vectors exceeds the practical \
             bound of {FEASIBLE_CANDIDATES}; this may run for a very long time"
        ),
    }

    let mut codewords = Vec::new();
    let mut candidate = vec![0i64; n];
    loop {
        if satisfies_all_checks(parity_check, limit, &candidate) {
            codewords.push(candidate.clone());
        }
        if !increment(&mut candidate, limit) {
            break;
        }
    }
    codewords
}

/// Whether `word` satisfies every parity constraint: for each row `r` of
/// the matrix, `Σ r[i]·word[i] ≡ 0 (mod limit)`.
///
/// A length mismatch is a plain `false`, not an error.
pub fn satisfies_all_checks(parity_check: &Matrix, limit: i64, word: &[i64]) -> bool {
    if word.len() != parity_check.col_count() {
        return false;
    }
    parity_check.rows().iter().all(|row| {
        let residue = row
            .iter()
            .zip(word)
            .fold(0i64, |acc, (h, c)| (acc + h * c).mod_floor(&limit));
        residue == 0
    })
}

/// Advances `digits` as a base-`limit` odometer with the least significant
/// digit last. Returns `false` once the counter wraps back to all zeros.
fn increment(digits: &mut [i64], limit: i64) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < limit {
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parity_5x2() -> Matrix {
        Matrix::parse("{{1,1,1,1,0},{0,1,0,0,1}}", 2).unwrap()
    }

    #[test]
    fn test_enumerates_expected_codeword_count() {
        let codewords = enumerate_codewords(&parity_5x2(), 2);
        assert_eq!(codewords.len(), 8);
    }

    #[test]
    fn test_zero_vector_is_always_valid() {
        let matrix = parity_5x2();
        assert!(satisfies_all_checks(&matrix, 2, &[0, 0, 0, 0, 0]));

        let ternary = Matrix::parse("{{2,1},{1,2}}", 3).unwrap();
        assert!(satisfies_all_checks(&ternary, 3, &[0, 0]));
    }

    #[test]
    fn test_detects_invalid_codeword() {
        let matrix = parity_5x2();
        assert!(!satisfies_all_checks(&matrix, 2, &[1, 0, 0, 0, 0]));
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        let matrix = parity_5x2();
        assert!(!satisfies_all_checks(&matrix, 2, &[0, 0, 0]));
        assert!(!satisfies_all_checks(&matrix, 2, &[]));
    }

    #[test]
    fn test_enumeration_order_is_base_limit_counting() {
        // A single all-zero parity row accepts everything, so the result is
        // the full space in counting order.
        let matrix = Matrix::parse("{{0,0}}", 3).unwrap();
        let codewords = enumerate_codewords(&matrix, 3);

        let expected: Vec<Vec<i64>> = (0..9).map(|i| vec![i / 3, i % 3]).collect();
        assert_eq!(codewords, expected);
    }

    #[test]
    fn test_enumeration_over_ternary_alphabet() {
        // Single constraint c0 + c1 ≡ 0 (mod 3): 3 solutions out of 9.
        let matrix = Matrix::parse("{{1,1}}", 3).unwrap();
        let codewords = enumerate_codewords(&matrix, 3);
        assert_eq!(codewords, vec![vec![0, 0], vec![1, 2], vec![2, 1]]);
    }
}
