use crate::model::Field;
use serde_json::Value;

/// Read the `area_ha` property.
///
/// Handles:
/// - missing or `null` -> Absent
/// - `12.5`, `0` -> Valid
/// - `-3` -> Invalid (negative areas are not authoritative)
/// - `"12.5"`, `true`, ... -> Invalid (only JSON numbers count)
pub fn parse_area_ha(value: Option<&Value>) -> Field<f64> {
    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(area) if area.is_finite() && area >= 0.0 => Field::Valid(area),
            Some(area) => Field::Invalid(format!("area_ha {area} is negative")),
            None => Field::Invalid(format!("area_ha {n} is not representable")),
        },
        Some(other) => Field::Invalid(format!("area_ha {other} is not a number")),
    }
}

/// Read the `year` property without normalizing it.
///
/// Handles:
/// - `2019`, `19` -> Valid
/// - `2019.0` -> Valid(2019) (fractional years are truncated)
/// - `"2015"`, `" 15 "` -> Valid
/// - `""`, `"abc"`, `"20x5"` -> Invalid
pub fn parse_year(value: Option<&Value>) -> Field<i32> {
    match value {
        None | Some(Value::Null) => Field::Absent,
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return i32::try_from(i)
                    .map(Field::Valid)
                    .unwrap_or_else(|_| Field::Invalid(format!("year {i} is out of range")));
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.abs() <= i32::MAX as f64 => {
                    Field::Valid(f.trunc() as i32)
                }
                _ => Field::Invalid(format!("year {n} is not a finite number")),
            }
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Field::Invalid("year is an empty string".into());
            }
            trimmed
                .parse::<i32>()
                .map(Field::Valid)
                .unwrap_or_else(|_| Field::Invalid(format!("year '{s}' is not an integer")))
        }
        Some(other) => Field::Invalid(format!("year {other} is neither a number nor a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_area_number() {
        assert_eq!(parse_area_ha(Some(&json!(12.5))), Field::Valid(12.5));
        assert_eq!(parse_area_ha(Some(&json!(0))), Field::Valid(0.0));
    }

    #[test]
    fn test_area_missing_or_null() {
        assert!(parse_area_ha(None).is_absent());
        assert!(parse_area_ha(Some(&Value::Null)).is_absent());
    }

    #[test]
    fn test_area_negative_is_invalid() {
        assert!(matches!(parse_area_ha(Some(&json!(-3))), Field::Invalid(_)));
    }

    #[test]
    fn test_area_string_is_invalid() {
        assert!(matches!(
            parse_area_ha(Some(&json!("12.5"))),
            Field::Invalid(_)
        ));
    }

    #[test]
    fn test_year_number() {
        assert_eq!(parse_year(Some(&json!(19))), Field::Valid(19));
        assert_eq!(parse_year(Some(&json!(2019.0))), Field::Valid(2019));
    }

    #[test]
    fn test_year_string() {
        assert_eq!(parse_year(Some(&json!("2015"))), Field::Valid(2015));
        assert_eq!(parse_year(Some(&json!(" 15 "))), Field::Valid(15));
    }

    #[test]
    fn test_year_garbage_is_invalid() {
        assert!(matches!(parse_year(Some(&json!("abc"))), Field::Invalid(_)));
        assert!(matches!(parse_year(Some(&json!(""))), Field::Invalid(_)));
        assert!(matches!(parse_year(Some(&json!([2019]))), Field::Invalid(_)));
    }
}
