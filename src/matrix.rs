//! Matrix parsing, validation and formatting.
//!
//! Matrices travel as strings in a bracketed numeric grammar:
//! `"{" row ("," row)* "}"` where `row = "{" integer ("," integer)* "}"`.
//! Integers may carry a leading `-`; whitespace is ignored everywhere.
//! Every entry of a constructed [`Matrix`] is the canonical non-negative
//! residue of the input value modulo `limit`, and every row has the same
//! length. Both invariants are established at construction and never change
//! afterwards.

use std::fmt;

use num_integer::Integer;

use crate::error::{Error, Result};

/// A rectangular grid of integers reduced into `[0, limit)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Parses a matrix from the bracketed numeric grammar, reducing every
    /// entry modulo `limit`.
    ///
    /// Fails with [`Error::Parse`] when the string does not start with `{`,
    /// contains a non-integer token, or uses LaTeX notation (which is
    /// recognized and rejected explicitly, never approximated). Ragged rows
    /// fail with [`Error::InvalidMatrix`].
    pub fn parse(input: &str, limit: i64) -> Result<Self> {
        let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        if stripped.starts_with('\\') {
            return Err(Error::Parse(
                "LaTeX matrix notation is not supported".to_string(),
            ));
        }
        let inner = stripped
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| {
                Error::Parse("expected matrix enclosed in '{' and '}'".to_string())
            })?;

        let rows = inner
            .split("},{")
            .map(parse_row)
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(rows, limit)
    }

    /// Builds a matrix from raw rows, reducing every entry modulo `limit`.
    ///
    /// Fails with [`Error::InvalidMatrix`] when there are no rows, a row is
    /// empty, or rows have differing lengths, and with
    /// [`Error::InvalidConfiguration`] when `limit < 2`.
    pub fn from_rows(rows: Vec<Vec<i64>>, limit: i64) -> Result<Self> {
        if limit < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "limit must be at least 2, got {limit}"
            )));
        }
        if rows.is_empty() {
            return Err(Error::InvalidMatrix("matrix has no rows".to_string()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(Error::InvalidMatrix("matrix has no columns".to_string()));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidMatrix(
                "rows have differing lengths".to_string(),
            ));
        }

        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|v| reduce(v, limit)).collect())
            .collect();

        Ok(Matrix { rows })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.rows[0].len()
    }

    /// A single row as a slice.
    pub fn row(&self, index: usize) -> &[i64] {
        &self.rows[index]
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }
}

impl fmt::Display for Matrix {
    /// Re-serializes the matrix into the same bracket grammar it was
    /// parsed from, e.g. `{{1,0},{0,1}}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, entry) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{entry}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

/// Canonical non-negative residue of `value` modulo `limit`.
///
/// Floored division keeps negative inputs in range: `reduce(-1, 3) == 2`.
pub fn reduce(value: i64, limit: i64) -> i64 {
    value.mod_floor(&limit)
}

// Raw integers only; reduction happens once in `from_rows`.
fn parse_row(chunk: &str) -> Result<Vec<i64>> {
    chunk
        .replace(['{', '}'], "")
        .split(',')
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                Error::Parse(format!("invalid integer token '{token}'"))
            })
        })
        .collect()
}
