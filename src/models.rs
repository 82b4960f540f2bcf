//! Data types and associated functions and methods

use crate::error::CorrelationError;
use crate::types::{datum, Datum};

use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Request data for correlation operations
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RequestData {
    /// First dataset array
    #[serde(rename = "arrayX")]
    pub array_x: Vec<Datum>,
    /// Second dataset array
    #[serde(rename = "arrayY")]
    pub array_y: Vec<Datum>,
}

/// Validate a pair of dataset arrays and convert them to numeric arrays.
///
/// The checks are ordered so that error reporting is deterministic: the empty check precedes the
/// length check, which precedes the element type checks, which precede the minimum size check.
///
/// # Arguments
///
/// * `array_x`: First dataset array
/// * `array_y`: Second dataset array
pub fn validate_arrays(
    array_x: &[Datum],
    array_y: &[Datum],
) -> Result<(Array1<f64>, Array1<f64>), CorrelationError> {
    if array_x.is_empty() || array_y.is_empty() {
        return Err(CorrelationError::EmptyInput);
    }
    if array_x.len() != array_y.len() {
        return Err(CorrelationError::LengthMismatch);
    }
    let x = numeric_values(array_x).ok_or(CorrelationError::NonNumericX)?;
    let y = numeric_values(array_y).ok_or(CorrelationError::NonNumericY)?;
    if x.len() < 2 {
        return Err(CorrelationError::InsufficientData);
    }
    Ok((x, y))
}

/// Convert an array of [Datum] to a numeric array, or `None` if any element is non-numeric.
fn numeric_values(values: &[Datum]) -> Option<Array1<f64>> {
    values
        .iter()
        .map(datum::as_numeric)
        .collect::<Option<Vec<f64>>>()
        .map(Array1::from)
}

/// Result of a single correlation computation.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct CorrelationResult {
    /// Correlation coefficient in [-1, 1], rounded to 6 decimal digits
    pub coefficient: f64,
    /// Coefficient as a percentage string, rounded to 4 decimal digits
    pub percentage: String,
}

impl CorrelationResult {
    /// Return a CorrelationResult with the rounding and formatting applied.
    ///
    /// # Arguments
    ///
    /// * `coefficient`: Raw correlation coefficient
    pub fn new(coefficient: f64) -> Self {
        CorrelationResult {
            coefficient: round_to(coefficient, 6),
            percentage: format_percentage(round_to(coefficient * 100.0, 4)),
        }
    }
}

/// Result of computing both correlation coefficients.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct BothResult {
    /// Pearson product-moment correlation
    pub pearson: CorrelationResult,
    /// Spearman rank correlation
    pub spearman: CorrelationResult,
}

/// Round a value to the given number of decimal digits.
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Format a percentage value with a trailing `%`.
///
/// Integral values keep one decimal place, so 100 renders as "100.0%".
fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}%")
    } else {
        format!("{value}%")
    }
}
