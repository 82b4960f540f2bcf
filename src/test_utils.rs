use crate::models::RequestData;
use crate::types::Datum;

/// Create a RequestData object from numeric slices.
pub(crate) fn get_test_request_data(array_x: &[f64], array_y: &[f64]) -> RequestData {
    RequestData {
        array_x: to_data(array_x),
        array_y: to_data(array_y),
    }
}

/// Convert a numeric slice to a dataset array.
pub(crate) fn to_data(values: &[f64]) -> Vec<Datum> {
    values.iter().map(|value| Datum::from(*value)).collect()
}
