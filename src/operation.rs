use crate::error::CorrelationError;
use crate::models;

use ndarray::ArrayView1;

/// Trait for correlation operations.
///
/// This forms the contract between the API layer and operations. Each operation is a pure
/// function from a pair of dataset arrays to a formatted result or a typed failure.
pub trait Operation {
    /// Operation name used in error messages.
    const NAME: &'static str;

    /// Return the raw correlation coefficient of two equal-length numeric samples.
    ///
    /// Returns NaN when the correlation is undefined.
    fn coefficient<'a>(x: ArrayView1<'a, f64>, y: ArrayView1<'a, f64>) -> Result<f64, CorrelationError>;

    /// Execute the operation.
    ///
    /// Validates the request data, computes the coefficient and applies the result formatting.
    ///
    /// # Arguments
    ///
    /// * `request_data`: RequestData object for the request
    fn execute(
        request_data: &models::RequestData,
    ) -> Result<models::CorrelationResult, CorrelationError> {
        let (x, y) = models::validate_arrays(&request_data.array_x, &request_data.array_y)?;
        let coefficient = Self::coefficient(x.view(), y.view())?;
        if coefficient.is_nan() {
            // Zero variance in either sample makes the coefficient 0/0.
            return Err(CorrelationError::DegenerateInput {
                operation: Self::NAME,
            });
        }
        Ok(models::CorrelationResult::new(coefficient))
    }
}
