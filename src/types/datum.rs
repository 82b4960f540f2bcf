//! Data value representing a single element of a dataset array.

/// A single element of a dataset array, as received on the wire.
///
/// This is an alias of the Value type from serde_json. Arrays are accepted as arbitrary JSON so
/// that non-numeric elements survive deserialisation and can be reported with a specific
/// validation error, rather than being rejected by serde with a generic type error.
///
/// JSON `true` and `false` decode as the Bool variant, never as Number, so boolean values are
/// never numerically coerced.
pub type Datum = serde_json::Value;

/// Return the numeric value of a [Datum], or `None` if it is not a JSON number.
pub fn as_numeric(value: &Datum) -> Option<f64> {
    match value {
        Datum::Number(number) => number.as_f64(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_as_numeric_int() {
        assert_eq!(Some(42.0), as_numeric(&json!(42)));
    }

    #[test]
    fn test_as_numeric_negative_int() {
        assert_eq!(Some(-42.0), as_numeric(&json!(-42)));
    }

    #[test]
    fn test_as_numeric_float() {
        assert_eq!(Some(1.5), as_numeric(&json!(1.5)));
    }

    #[test]
    fn test_as_numeric_bool() {
        assert_eq!(None, as_numeric(&json!(true)));
        assert_eq!(None, as_numeric(&json!(false)));
    }

    #[test]
    fn test_as_numeric_string() {
        assert_eq!(None, as_numeric(&json!("42")));
    }

    #[test]
    fn test_as_numeric_null() {
        assert_eq!(None, as_numeric(&json!(null)));
    }

    #[test]
    fn test_as_numeric_nested_array() {
        assert_eq!(None, as_numeric(&json!([1, 2])));
    }
}
