//! Rust extension computing matrix permanents for NumPy callers.
//!
//! The module exposes a single function, `permanent`, which takes a square
//! `complex128` array and returns its permanent computed with Ryser's
//! algorithm. All validation happens here at the boundary; the kernel in
//! [`ryser`](crate::ryser) is pure Rust and never sees Python.

use numpy::{Complex64, PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

pub mod matrix;
pub mod ryser;

use matrix::SquareMatrix;

/// Python module exposing the permanent kernel.
#[pymodule]
fn permanent_ext(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(permanent, m)?)?;
    Ok(())
}

// =============================================================================
// permanent
// =============================================================================

/// Evaluates the permanent of a complex square matrix.
///
/// The input must be a two-dimensional square `complex128` array. Non-array
/// input, a wrong dtype, or a wrong rank raises `TypeError`; a non-square
/// shape raises `ValueError`. Validation runs before any computation.
#[pyfunction]
fn permanent(matrix: &Bound<'_, PyAny>) -> PyResult<Complex64> {
    let array: PyReadonlyArray2<Complex64> = matrix
        .extract()
        .map_err(|_| PyTypeError::new_err("expected a two-dimensional complex128 array"))?;

    // Check both dimensions rather than trusting the first one alone.
    let shape = array.shape();
    let (rows, cols) = (shape[0], shape[1]);
    if rows != cols {
        return Err(PyValueError::new_err(format!(
            "matrix must be square, got {rows}x{cols}"
        )));
    }
    if rows > ryser::MAX_DIM {
        return Err(PyValueError::new_err(format!(
            "matrix dimension {rows} exceeds the supported maximum of {}",
            ryser::MAX_DIM
        )));
    }

    // Copy in logical row-major order; this also handles non-contiguous
    // views such as slices and transposes.
    let data: Vec<Complex64> = array.as_array().iter().copied().collect();
    let matrix =
        SquareMatrix::from_vec(rows, data).map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(ryser::permanent(&matrix))
}
