//! Correlation operations.
//!
//! Each operation is implemented as a struct that implements the
//! [Operation](crate::operation::Operation) trait.

use crate::error::CorrelationError;
use crate::operation::Operation;

use ndarray::{Array1, ArrayView1, Axis};
use ndarray_stats::CorrelationExt;

/// Pearson product-moment correlation coefficient.
pub struct Pearson {}

impl Operation for Pearson {
    const NAME: &'static str = "Pearson";

    fn coefficient<'a>(x: ArrayView1<'a, f64>, y: ArrayView1<'a, f64>) -> Result<f64, CorrelationError> {
        // Two rows of observations, one per random variable.
        let observations = ndarray::stack(Axis(0), &[x, y])?;
        let correlation = observations
            .pearson_correlation()
            .map_err(|_| CorrelationError::EmptyInput)?;
        Ok(correlation[[0, 1]])
    }
}

/// Spearman rank correlation coefficient.
///
/// The Pearson coefficient of the rank-transformed samples, measuring monotonic rather than
/// linear association.
pub struct Spearman {}

impl Operation for Spearman {
    const NAME: &'static str = "Spearman";

    fn coefficient<'a>(x: ArrayView1<'a, f64>, y: ArrayView1<'a, f64>) -> Result<f64, CorrelationError> {
        let ranks_x = rank(x);
        let ranks_y = rank(y);
        Pearson::coefficient(ranks_x.view(), ranks_y.view())
    }
}

/// Return the 1-based ranks of a sample, with tied values assigned their average rank.
fn rank(values: ArrayView1<f64>) -> Array1<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));

    let mut ranks = Array1::zeros(values.len());
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // Average of the 1-based positions start+1..=end+1.
        let average = (start + end) as f64 / 2.0 + 1.0;
        for &position in &order[start..=end] {
            ranks[position] = average;
        }
        start = end + 1;
    }
    ranks
}
