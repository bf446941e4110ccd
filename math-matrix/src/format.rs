//! Fixed-width text output for vectors and matrices
//!
//! Each entry is right-aligned in a 10-character field followed by a space,
//! one line per matrix row. A column vector is laid out on a single line.

use crate::scalar::Scalar;
use ndarray::Array2;

/// Decimals printed when the caller has no preference
pub const DEFAULT_PRECISION: usize = 5;

const FIELD_WIDTH: usize = 10;

/// One line of values, no trailing newline.
pub fn format_row<'a, T, I>(values: I, precision: usize) -> String
where
    T: Scalar,
    I: IntoIterator<Item = &'a T>,
{
    let mut line = String::new();
    for v in values {
        line.push_str(&format!(
            "{:>width$.prec$} ",
            v,
            width = FIELD_WIDTH,
            prec = precision
        ));
    }
    line
}

/// Every row on its own line, each terminated by `\n`.
pub fn format_matrix<T: Scalar>(matrix: &Array2<T>, precision: usize) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        out.push_str(&format_row(row.iter(), precision));
        out.push('\n');
    }
    out
}

/// The first column of `column` on a single line terminated by `\n`.
pub fn format_column<T: Scalar>(column: &Array2<T>, precision: usize) -> String {
    let mut out = if column.ncols() == 0 {
        String::new()
    } else {
        format_row(column.column(0).iter(), precision)
    };
    out.push('\n');
    out
}
