//! Column value conversion shared by the sqlx connectors

use serde_json::Value;

/// Wrap a decoded column value, mapping decode failures (including SQL NULL) to `null`
pub(crate) fn or_null<T, E>(decoded: Result<T, E>, convert: impl FnOnce(T) -> Value) -> Value {
    decoded.map(convert).unwrap_or(Value::Null)
}

/// JSON number for a float, `null` for NaN and infinities
pub(crate) fn float(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// JSON number for any integer width
pub(crate) fn int(v: impl Into<i64>) -> Value {
    Value::Number(v.into().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_or_null() {
        assert_eq!(or_null(Ok::<_, ()>("a"), |v| json!(v)), json!("a"));
        assert_eq!(or_null(Err::<&str, _>("decode"), |v| json!(v)), Value::Null);
    }

    #[test]
    fn test_float_rejects_nan() {
        assert_eq!(float(1.5), json!(1.5));
        assert_eq!(float(f64::NAN), Value::Null);
    }

    #[test]
    fn test_int_widths() {
        assert_eq!(int(7_i16), json!(7));
        assert_eq!(int(-3_i32), json!(-3));
        assert_eq!(int(i64::MAX), json!(i64::MAX));
    }
}
