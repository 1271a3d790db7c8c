//! Systematic generator matrix derivation.
//!
//! When the parity-check matrix has the systematic shape `H = [-A | I_m]`
//! the generator matrix follows directly: stack the `k x k` identity on top
//! of `-A mod limit`, where `k` is the message length. Absence of the
//! systematic shape is a normal outcome, not an error; a generator may
//! still exist under a different column ordering, which this derivation
//! does not search for.

use crate::matrix::{reduce, Matrix};

/// Attempts to derive a systematic generator matrix from `parity_check`.
///
/// `codeword_count` must be the size of the enumerated code space. The
/// message length `k` is recovered from it by integer-exact repeated
/// division; a count that is not an exact power of `limit` means the code
/// cannot be systematic and yields `None`. The structural test then checks,
/// fully bounds-checked, that columns `[k, k+m)` form the identity.
pub fn derive_generator(
    parity_check: &Matrix,
    limit: i64,
    codeword_count: usize,
) -> Option<Matrix> {
    let m = parity_check.row_count();
    let n = parity_check.col_count();

    let k = exact_log(codeword_count, limit)?;
    if k == 0 || k + m > n {
        return None;
    }
    if !has_identity_block(parity_check, k) {
        return None;
    }

    // G = [I_k] stacked over [-A mod limit], where A is the left k columns.
    let mut rows = Vec::with_capacity(k + m);
    for i in 0..k {
        let mut row = vec![0i64; k];
        row[i] = 1;
        rows.push(row);
    }
    for i in 0..m {
        let row = parity_check.row(i)[..k]
            .iter()
            .map(|&a| reduce(-a, limit))
            .collect();
        rows.push(row);
    }

    Matrix::from_rows(rows, limit).ok()
}

/// Whether columns `[k, k+m)` of the matrix form the `m x m` identity.
/// The caller guarantees `k + m <= n`.
fn has_identity_block(parity_check: &Matrix, k: usize) -> bool {
    let m = parity_check.row_count();
    (0..m).all(|i| {
        (k..k + m).all(|j| {
            let expected = if i == j - k { 1 } else { 0 };
            parity_check.row(i)[j] == expected
        })
    })
}

/// Integer-exact logarithm: `Some(k)` iff `limit^k == count` exactly.
///
/// Repeated division avoids the rounding hazards of floating-point logs at
/// large `limit^k`.
fn exact_log(count: usize, limit: i64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let limit = limit as usize;
    let mut remaining = count;
    let mut k = 0;
    while remaining > 1 {
        if remaining % limit != 0 {
            return None;
        }
        remaining /= limit;
        k += 1;
    }
    Some(k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::space::enumerate_codewords;

    const HAMMING_8_4: &str =
        "{{0,1,1,1,1,0,0,0},{1,0,1,1,0,1,0,0},{1,1,0,1,0,0,1,0},{1,1,1,0,0,0,0,1}}";

    #[test]
    fn test_exact_log() {
        assert_eq!(exact_log(1, 2), Some(0));
        assert_eq!(exact_log(8, 2), Some(3));
        assert_eq!(exact_log(16, 2), Some(4));
        assert_eq!(exact_log(27, 3), Some(3));
        assert_eq!(exact_log(12, 2), None);
        assert_eq!(exact_log(0, 2), None);
    }

    #[test]
    fn test_derives_generator_for_systematic_matrix() {
        let parity_check = Matrix::parse(HAMMING_8_4, 2).unwrap();
        let count = enumerate_codewords(&parity_check, 2).len();
        assert_eq!(count, 16);

        let generator = derive_generator(&parity_check, 2, count).unwrap();
        assert_eq!(generator.row_count(), 8);
        assert_eq!(generator.col_count(), 4);

        // Top block is the identity; bottom block is -A mod 2 = A.
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(generator.row(i)[j], expected);
            }
        }
        assert_eq!(generator.row(4), &[0, 1, 1, 1]);
        assert_eq!(generator.row(5), &[1, 0, 1, 1]);
        assert_eq!(generator.row(6), &[1, 1, 0, 1]);
        assert_eq!(generator.row(7), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_negates_parity_block_modulo_limit() {
        // H = [-A | I_1] over Z/3 with A = [[1,2]], so -A mod 3 = [[2,1]].
        let parity_check = Matrix::parse("{{1,2,1}}", 3).unwrap();
        let count = enumerate_codewords(&parity_check, 3).len();
        assert_eq!(count, 9);

        let generator = derive_generator(&parity_check, 3, count).unwrap();
        assert_eq!(generator.rows(), &[vec![1, 0], vec![0, 1], vec![2, 1]]);
    }

    #[test]
    fn test_derives_generator_for_two_row_systematic_matrix() {
        // Columns [3, 5) are the 2x2 identity, so G = [I_3; A] with
        // A the left 3 columns (self-negating mod 2).
        let parity_check = Matrix::parse("{{1,1,1,1,0},{0,1,0,0,1}}", 2).unwrap();
        let count = enumerate_codewords(&parity_check, 2).len();
        assert_eq!(count, 8);

        let generator = derive_generator(&parity_check, 2, count).unwrap();
        assert_eq!(generator.row_count(), 5);
        assert_eq!(generator.col_count(), 3);
        assert_eq!(generator.row(3), &[1, 1, 1]);
        assert_eq!(generator.row(4), &[0, 1, 0]);
    }

    #[test]
    fn test_no_generator_without_identity_block() {
        // Same code size, but columns [3, 5) hold a swapped identity.
        let parity_check = Matrix::parse("{{1,1,1,0,1},{0,1,0,1,0}}", 2).unwrap();
        let count = enumerate_codewords(&parity_check, 2).len();
        assert_eq!(count, 8);

        assert!(derive_generator(&parity_check, 2, count).is_none());
    }

    #[test]
    fn test_no_generator_when_count_is_not_a_power_of_limit() {
        let parity_check = Matrix::parse(HAMMING_8_4, 2).unwrap();
        assert!(derive_generator(&parity_check, 2, 12).is_none());
    }

    #[test]
    fn test_no_generator_when_identity_block_would_overflow_columns() {
        // k = 2 and m = 2 need 4 columns but the matrix has 3.
        let parity_check = Matrix::parse("{{1,0,1},{0,1,1}}", 2).unwrap();
        assert!(derive_generator(&parity_check, 2, 4).is_none());
    }

    #[test]
    fn test_no_generator_for_single_codeword_space() {
        // H = I_2 admits only the zero codeword; k would be 0.
        let parity_check = Matrix::parse("{{1,0},{0,1}}", 2).unwrap();
        assert!(derive_generator(&parity_check, 2, 1).is_none());
    }
}
