//! Minimum Hamming distance analysis.
//!
//! The minimum distance of the code is found by exhaustive comparison of
//! all unordered codeword pairs, `O(|codewords|^2 * n)`. The scan is pure,
//! so the pair space is split across threads by the first index.

use rayon::prelude::*;

/// Number of coordinate positions where two equal-length vectors differ.
pub fn hamming_distance(a: &[i64], b: &[i64]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Minimum Hamming distance over all unordered pairs of distinct
/// codewords. Zero when fewer than two codewords exist.
pub fn minimum_distance(codewords: &[Vec<i64>]) -> usize {
    if codewords.len() < 2 {
        return 0;
    }
    (0..codewords.len() - 1)
        .into_par_iter()
        .map(|i| {
            (i + 1..codewords.len())
                .map(|j| hamming_distance(&codewords[i], &codewords[j]))
                .min()
                .unwrap_or(usize::MAX)
        })
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::space::enumerate_codewords;
    use crate::matrix::Matrix;

    #[test]
    fn test_hamming_distance_counts_differing_positions() {
        assert_eq!(hamming_distance(&[0, 0, 0], &[0, 0, 0]), 0);
        assert_eq!(hamming_distance(&[1, 0, 1], &[0, 0, 1]), 1);
        assert_eq!(hamming_distance(&[1, 2, 0], &[2, 1, 0]), 2);
    }

    #[test]
    fn test_minimum_distance_of_example_code() {
        let matrix = Matrix::parse("{{1,1,1,1,0},{0,1,0,0,1}}", 2).unwrap();
        let codewords = enumerate_codewords(&matrix, 2);
        assert_eq!(minimum_distance(&codewords), 2);
    }

    #[test]
    fn test_minimum_distance_of_repetition_code() {
        // {000, 111}: the two codewords differ everywhere.
        let matrix = Matrix::parse("{{1,1,0},{0,1,1}}", 2).unwrap();
        let codewords = enumerate_codewords(&matrix, 2);
        assert_eq!(codewords.len(), 2);
        assert_eq!(minimum_distance(&codewords), 3);
    }

    #[test]
    fn test_degenerate_code_spaces_have_distance_zero() {
        assert_eq!(minimum_distance(&[]), 0);
        assert_eq!(minimum_distance(&[vec![0, 0, 0]]), 0);
    }
}
