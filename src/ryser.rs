//! Permanent of a complex square matrix via Ryser's algorithm.
//!
//! Ryser's inclusion-exclusion formula evaluates the permanent in
//! O(n^2 * 2^n) time instead of the n! terms of the Leibniz expansion:
//!
//!   perm(A) = (-1)^n * sum over S of (-1)^|S| * prod_i (sum_{j in S} A[j][i])
//!
//! where S ranges over all subsets of the row index set. Subsets are
//! enumerated as bit masks of a `u64`, each column accumulator is a plain
//! double-precision complex sum, and the leading (-1)^n factor is folded
//! into a single sign flip after the mask loop.

use num_complex::Complex64;

use crate::matrix::SquareMatrix;

/// Largest dimension the u64 subset mask can enumerate. The boundary layer
/// rejects anything above this before the kernel runs; the exponential cost
/// makes such inputs infeasible long before the mask runs out of bits.
pub const MAX_DIM: usize = 63;

/// Computes the permanent of `matrix`.
///
/// The permanent of the empty 0x0 matrix is 1, matching the empty-product
/// convention of Ryser's formula.
pub fn permanent(matrix: &SquareMatrix) -> Complex64 {
    let n = matrix.dim();
    if n == 0 {
        return Complex64::new(1.0, 0.0);
    }
    debug_assert!(n <= MAX_DIM);

    let mut total = Complex64::new(0.0, 0.0);
    for mask in 0..(1u64 << n) {
        // Product over columns of the mask-selected row sums.
        let mut product = Complex64::new(1.0, 0.0);
        for col in 0..n {
            let mut sum = Complex64::new(0.0, 0.0);
            for row in 0..n {
                if mask & (1 << row) != 0 {
                    sum += matrix.get(row, col);
                }
            }
            product *= sum;
        }
        // Inclusion-exclusion sign from the subset's bit parity.
        if mask.count_ones() % 2 == 0 {
            total += product;
        } else {
            total -= product;
        }
    }
    if n % 2 == 1 {
        total = -total;
    }
    total
}
