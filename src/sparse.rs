//! # Sparse binary matrices
//!
//! This module implements a representation for sparse binary matrices, used
//! to hold lifted LDPC parity check matrices. It supports evaluating the
//! parity check equations on a codeword and exporting the matrix in alist
//! format.

use crate::encoder::FILLER_BIT;
use std::slice::Iter;

/// A sparse binary matrix
///
/// The matrix stores the positions of its ones both by rows and by columns,
/// following the alist format.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SparseMatrix {
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
}

impl SparseMatrix {
    /// Create a new sparse matrix of a given size
    ///
    /// The matrix is initialized to the zero matrix.
    ///
    /// # Examples
    /// ```
    /// # use nr_ldpc_encoder::sparse::SparseMatrix;
    /// let h = SparseMatrix::new(84, 104);
    /// assert_eq!(h.num_rows(), 84);
    /// assert_eq!(h.num_cols(), 104);
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> SparseMatrix {
        SparseMatrix {
            rows: vec![Vec::new(); nrows],
            cols: vec![Vec::new(); ncols],
        }
    }

    /// Returns the number of rows of the matrix
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns of the matrix
    pub fn num_cols(&self) -> usize {
        self.cols.len()
    }

    /// Returns the number of ones in `row`
    pub fn row_weight(&self, row: usize) -> usize {
        self.rows[row].len()
    }

    /// Returns the number of ones in `col`
    pub fn col_weight(&self, col: usize) -> usize {
        self.cols[col].len()
    }

    /// Returns `true` if the entry at a particular row and column is a one
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cols[col].contains(&row)
    }

    /// Inserts a one in a particular row and column
    pub fn insert(&mut self, row: usize, col: usize) {
        self.rows[row].push(col);
        self.cols[col].push(row);
    }

    /// Returns an [Iterator] over the columns of the ones in a row
    pub fn iter_row(&self, row: usize) -> Iter<'_, usize> {
        self.rows[row].iter()
    }

    /// Returns an [Iterator] over the rows of the ones in a column
    pub fn iter_col(&self, col: usize) -> Iter<'_, usize> {
        self.cols[col].iter()
    }

    /// Computes the syndrome of a codeword
    ///
    /// The codeword holds one bit per byte. Bytes equal to
    /// [`FILLER_BIT`] count as zeros. The returned vector has one bit per
    /// row of the matrix.
    ///
    /// # Panics
    /// This function panics if the length of `codeword` is different from the
    /// number of columns of the matrix.
    pub fn syndrome(&self, codeword: &[u8]) -> Vec<u8> {
        assert_eq!(codeword.len(), self.num_cols());
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| match codeword[c] {
                        FILLER_BIT => 0,
                        b => b & 1,
                    })
                    .fold(0, |acc, b| acc ^ b)
            })
            .collect()
    }

    /// Returns `true` if the codeword satisfies all the parity checks
    pub fn syndrome_is_zero(&self, codeword: &[u8]) -> bool {
        self.syndrome(codeword).iter().all(|&s| s == 0)
    }

    /// Writes the matrix in alist format to a writer
    ///
    /// # Errors
    /// If a call to `write!()` returns an error, this function returns
    /// such an error.
    pub fn write_alist<W: std::fmt::Write>(&self, w: &mut W) -> std::fmt::Result {
        writeln!(w, "{} {}", self.num_cols(), self.num_rows())?;
        let max_weight = |lists: &[Vec<usize>]| lists.iter().map(Vec::len).max().unwrap_or(0);
        writeln!(w, "{} {}", max_weight(&self.cols), max_weight(&self.rows))?;
        for lists in [&self.cols, &self.rows] {
            write_list(w, lists.iter().map(Vec::len))?;
        }
        for lists in [&self.cols, &self.rows] {
            for list in lists {
                let mut sorted = list.clone();
                sorted.sort_unstable();
                write_list(w, sorted.into_iter().map(|x| x + 1))?;
            }
        }
        Ok(())
    }

    /// Returns a [`String`] with the alist representation of the matrix
    pub fn alist(&self) -> String {
        let mut s = String::new();
        // writing to a String cannot fail
        let _ = self.write_alist(&mut s);
        s
    }
}

fn write_list<W, I>(w: &mut W, items: I) -> std::fmt::Result
where
    W: std::fmt::Write,
    I: Iterator<Item = usize>,
{
    let items = items.map(|x| x.to_string()).collect::<Vec<_>>();
    writeln!(w, "{}", items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert() {
        let mut h = SparseMatrix::new(100, 300);
        assert!(!h.contains(27, 154));
        h.insert(27, 154);
        assert!(h.contains(27, 154));
        assert!(!h.contains(28, 154));
        assert_eq!(h.row_weight(27), 1);
        assert_eq!(h.col_weight(154), 1);
        assert_eq!(h.iter_col(154).copied().collect::<Vec<_>>(), vec![27]);
    }

    #[test]
    fn syndrome() {
        let mut h = SparseMatrix::new(2, 4);
        h.insert(0, 0);
        h.insert(0, 1);
        h.insert(1, 1);
        h.insert(1, 2);
        h.insert(1, 3);
        assert_eq!(h.syndrome(&[1, 1, 0, 1]), vec![0, 0]);
        assert_eq!(h.syndrome(&[1, 0, 0, 1]), vec![1, 1]);
        assert!(h.syndrome_is_zero(&[0, 0, 1, 1]));
        // filler bits count as zeros
        assert!(h.syndrome_is_zero(&[FILLER_BIT, FILLER_BIT, 1, 1]));
    }

    #[test]
    fn alist() {
        let mut h = SparseMatrix::new(4, 12);
        for j in 0..4 {
            h.insert(j, j);
            h.insert(j, j + 4);
            h.insert(j, j + 8);
        }
        let expected = "12 4
1 3
1 1 1 1 1 1 1 1 1 1 1 1
3 3 3 3
1
2
3
4
1
2
3
4
1
2
3
4
1 5 9
2 6 10
3 7 11
4 8 12
";
        assert_eq!(h.alist(), expected);
    }
}
