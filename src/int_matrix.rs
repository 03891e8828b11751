use std::fmt::{self, Display};

use crate::config::{self, Value};
use crate::error::MatrixError;
use crate::matrix::SquareMatrix;

/// Square integer matrix: the type every step of the program works on.
///
/// Arithmetic and the `with_*` transforms always build a fresh matrix;
/// the receiver is never modified by them. Sums and products use native
/// `i32` arithmetic, overflow is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntMatrix(SquareMatrix<Value>);

impl IntMatrix {
    /// Zero-size matrix with no storage.
    pub fn empty() -> IntMatrix {
        IntMatrix(SquareMatrix::new(0, 0))
    }

    /// `size` x `size` matrix filled with zeros.
    pub fn zeroed(size: usize) -> IntMatrix {
        IntMatrix(SquareMatrix::new(size, 0))
    }

    pub fn size(&self) -> usize {
        self.0.side_length()
    }

    /// Element at `(row, col)`. Indices must be below `size()`.
    pub fn at(&self, row: usize, col: usize) -> Value {
        self.0[(row, col)]
    }

    /// Mutable element at `(row, col)`. Indices must be below `size()`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Value {
        &mut self.0[(row, col)]
    }

    /// Fills the matrix in row-major order from `tokens`.
    ///
    /// On exhausted or malformed input the elements read so far stay in
    /// place and the matrix should be discarded by the caller.
    pub fn read_from<'a, I>(&mut self, tokens: &mut I) -> Result<(), MatrixError>
    where
        I: Iterator<Item = &'a str>,
    {
        let expected = self.size() * self.size();
        for idx in 0..expected {
            let token = tokens.next().ok_or(MatrixError::NotEnoughData {
                expected,
                found: idx,
            })?;
            let value = token
                .parse()
                .map_err(|_| MatrixError::BadToken(token.to_owned()))?;
            self.0.values_mut()[idx] = value;
        }
        Ok(())
    }

    pub fn sum_main_diagonal(&self) -> Value {
        let mut sum = 0;
        for i in 0..self.size() {
            sum += self.at(i, i);
        }
        sum
    }

    pub fn sum_secondary_diagonal(&self) -> Value {
        let n = self.size();
        let mut sum = 0;
        for i in 0..n {
            sum += self.at(i, n - 1 - i);
        }
        sum
    }

    /// Element-wise sum. Fails when the sizes differ.
    pub fn add(&self, other: &IntMatrix) -> Result<IntMatrix, MatrixError> {
        self.check_size("addition", other)?;
        let mut result = IntMatrix::zeroed(self.size());
        let pairs = self.0.values().iter().zip(other.0.values());
        for (out, (a, b)) in result.0.values_mut().iter_mut().zip(pairs) {
            *out = a + b;
        }
        Ok(result)
    }

    /// Standard square matrix product. Fails when the sizes differ.
    pub fn multiply(&self, other: &IntMatrix) -> Result<IntMatrix, MatrixError> {
        self.check_size("multiplication", other)?;
        let n = self.size();
        let mut result = IntMatrix::zeroed(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = 0;
                for k in 0..n {
                    sum += self.at(i, k) * other.at(k, j);
                }
                *result.at_mut(i, j) = sum;
            }
        }
        Ok(result)
    }

    fn check_size(&self, op: &'static str, other: &IntMatrix) -> Result<(), MatrixError> {
        if self.size() != other.size() {
            return Err(MatrixError::SizeMismatch {
                op,
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Copy of the matrix with rows `r1` and `r2` exchanged.
    /// An out-of-range index leaves the copy untouched and prints a
    /// diagnostic to stderr.
    pub fn with_swapped_rows(&self, r1: usize, r2: usize) -> IntMatrix {
        let mut copy = self.clone();
        if r1 >= self.size() || r2 >= self.size() {
            eprintln!("Invalid row indices for row swap. No swap performed.");
            return copy;
        }
        copy.0.swap_rows(r1, r2);
        copy
    }

    /// Copy of the matrix with columns `c1` and `c2` exchanged.
    /// Same out-of-range policy as `with_swapped_rows`.
    pub fn with_swapped_columns(&self, c1: usize, c2: usize) -> IntMatrix {
        let mut copy = self.clone();
        if c1 >= self.size() || c2 >= self.size() {
            eprintln!("Invalid column indices for column swap. No swap performed.");
            return copy;
        }
        copy.0.swap_columns(c1, c2);
        copy
    }

    /// Copy of the matrix with the element at `(row, col)` set to `value`.
    /// Same out-of-range policy as `with_swapped_rows`.
    pub fn with_updated_element(&self, row: usize, col: usize, value: Value) -> IntMatrix {
        let mut copy = self.clone();
        if row >= self.size() || col >= self.size() {
            eprintln!("Invalid indices for element update. No update performed.");
            return copy;
        }
        *copy.at_mut(row, col) = value;
        copy
    }

    /// Rows as owned vectors, for the run report.
    pub fn to_rows(&self) -> Vec<Vec<Value>> {
        (0..self.size()).map(|row| self.0.row(row).to_vec()).collect()
    }
}

impl Display for IntMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "[empty matrix]");
        }

        let width = self
            .0
            .values()
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0)
            .max(config::MIN_PRINT_WIDTH);

        for row in 0..self.size() {
            for col in 0..self.size() {
                write!(f, "{:>w$}", self.at(row, col), w = width + 1)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&[Value]]) -> IntMatrix {
        let mut m = IntMatrix::zeroed(rows.len());
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), rows.len());
            for (c, &value) in row.iter().enumerate() {
                *m.at_mut(r, c) = value;
            }
        }
        m
    }

    fn identity(size: usize) -> IntMatrix {
        let mut m = IntMatrix::zeroed(size);
        for i in 0..size {
            *m.at_mut(i, i) = 1;
        }
        m
    }

    #[test]
    fn zeroed_starts_with_all_zeros() {
        let m = IntMatrix::zeroed(3);
        assert_eq!(m.size(), 3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(m.at(row, col), 0);
            }
        }
    }

    #[test]
    fn empty_matrix_has_size_zero() {
        let m = IntMatrix::empty();
        assert_eq!(m.size(), 0);
        assert_eq!(m, IntMatrix::zeroed(0));
    }

    #[test]
    fn add_is_element_wise() {
        let a = from_rows(&[&[1, 2], &[3, 4]]);
        let b = from_rows(&[&[5, 6], &[7, 8]]);
        let sum = a.add(&b).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(sum.at(row, col), a.at(row, col) + b.at(row, col));
            }
        }
        assert_eq!(sum, from_rows(&[&[6, 8], &[10, 12]]));
    }

    #[test]
    fn add_rejects_mismatched_sizes() {
        let a = IntMatrix::zeroed(2);
        let b = IntMatrix::zeroed(3);
        assert!(matches!(
            a.add(&b),
            Err(MatrixError::SizeMismatch {
                op: "addition",
                left: 2,
                right: 3,
            })
        ));
    }

    #[test]
    fn multiply_matches_hand_computed_product() {
        let a = from_rows(&[&[1, 2], &[3, 4]]);
        let b = from_rows(&[&[5, 6], &[7, 8]]);
        let product = a.multiply(&b).unwrap();
        assert_eq!(product, from_rows(&[&[19, 22], &[43, 50]]));
    }

    #[test]
    fn multiply_rejects_mismatched_sizes() {
        let a = IntMatrix::zeroed(3);
        let b = IntMatrix::zeroed(2);
        assert!(matches!(
            a.multiply(&b),
            Err(MatrixError::SizeMismatch {
                op: "multiplication",
                ..
            })
        ));
    }

    #[test]
    fn multiply_by_identity_is_identity_operation() {
        let a = from_rows(&[&[2, -3, 4], &[0, 5, 1], &[7, -8, 9]]);
        assert_eq!(a.multiply(&identity(3)).unwrap(), a);
        assert_eq!(identity(3).multiply(&a).unwrap(), a);

        let empty = IntMatrix::empty();
        assert_eq!(empty.multiply(&identity(0)).unwrap(), empty);
    }

    #[test]
    fn diagonal_sums() {
        let m = from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(m.sum_main_diagonal(), 15);
        assert_eq!(m.sum_secondary_diagonal(), 15);
    }

    #[test]
    fn diagonal_sums_of_empty_matrix_are_zero() {
        let m = IntMatrix::empty();
        assert_eq!(m.sum_main_diagonal(), 0);
        assert_eq!(m.sum_secondary_diagonal(), 0);
    }

    #[test]
    fn read_from_fills_in_row_major_order() {
        let mut m = IntMatrix::zeroed(2);
        let mut tokens = "1 2 3 4".split_whitespace();
        m.read_from(&mut tokens).unwrap();
        assert_eq!(m, from_rows(&[&[1, 2], &[3, 4]]));
    }

    #[test]
    fn read_from_reports_exhausted_input_and_keeps_partial_fill() {
        let mut m = IntMatrix::zeroed(2);
        let mut tokens = "1 2 3".split_whitespace();
        assert!(matches!(
            m.read_from(&mut tokens),
            Err(MatrixError::NotEnoughData {
                expected: 4,
                found: 3,
            })
        ));
        // Already consumed values stay written.
        assert_eq!(m.at(0, 0), 1);
        assert_eq!(m.at(0, 1), 2);
        assert_eq!(m.at(1, 0), 3);
        assert_eq!(m.at(1, 1), 0);
    }

    #[test]
    fn read_from_rejects_non_integer_tokens() {
        let mut m = IntMatrix::zeroed(2);
        let mut tokens = "1 2 x 4".split_whitespace();
        assert!(matches!(
            m.read_from(&mut tokens),
            Err(MatrixError::BadToken(token)) if token == "x"
        ));
    }

    #[test]
    fn swapped_rows_copy_leaves_original_untouched() {
        let m = from_rows(&[&[1, 2], &[3, 4]]);
        let original = m.clone();
        let swapped = m.with_swapped_rows(0, 1);
        assert_eq!(swapped, from_rows(&[&[3, 4], &[1, 2]]));
        assert_eq!(m, original);
    }

    #[test]
    fn row_swap_is_an_involution() {
        let m = from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(m.with_swapped_rows(0, 2).with_swapped_rows(0, 2), m);
        assert_eq!(m.with_swapped_rows(1, 1), m);
    }

    #[test]
    fn column_swap_is_an_involution() {
        let m = from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let swapped = m.with_swapped_columns(0, 1);
        assert_eq!(swapped, from_rows(&[&[2, 1, 3], &[5, 4, 6], &[8, 7, 9]]));
        assert_eq!(swapped.with_swapped_columns(0, 1), m);
        assert_eq!(m.with_swapped_columns(2, 2), m);
    }

    #[test]
    fn out_of_range_transform_indices_return_unchanged_copy() {
        let m = from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.with_swapped_rows(0, 2), m);
        assert_eq!(m.with_swapped_columns(5, 0), m);
        assert_eq!(m.with_updated_element(2, 0, 42), m);
        assert_eq!(m.with_updated_element(0, usize::MAX, 42), m);
    }

    #[test]
    fn updated_element_copy_changes_one_cell() {
        let m = from_rows(&[&[1, 2], &[3, 4]]);
        let updated = m.with_updated_element(0, 1, 100);
        assert_eq!(updated, from_rows(&[&[1, 100], &[3, 4]]));
        assert_eq!(m.at(0, 1), 2);
    }

    #[test]
    fn display_aligns_columns_to_widest_value() {
        let m = from_rows(&[&[1, -10], &[200, 3]]);
        assert_eq!(m.to_string(), "   1 -10\n 200   3\n");
    }

    #[test]
    fn display_uses_minimum_field_width() {
        let m = from_rows(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.to_string(), "  1  2\n  3  4\n");
    }

    #[test]
    fn display_of_empty_matrix_is_a_marker_line() {
        assert_eq!(IntMatrix::empty().to_string(), "[empty matrix]\n");
    }
}
