//! Column type to SQL type mapping.

use crate::schema::ColumnType;

/// Map a column type and optional length to its SQL type fragment.
///
/// Only varchar is parameterized; a missing or zero length falls back to
/// 255. Unrecognized types degrade to the default string type.
pub fn sql_type(typ: ColumnType, length: Option<u32>) -> String {
    match typ {
        ColumnType::Varchar => {
            let n = match length {
                Some(n) if n > 0 => n,
                _ => 255,
            };
            format!("VARCHAR({})", n)
        }
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::Float => "FLOAT".to_string(),
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Datetime => "DATETIME".to_string(),
        ColumnType::Time => "TIME".to_string(),
        ColumnType::Uuid => "UUID".to_string(),
        ColumnType::Json => "JSON".to_string(),
        ColumnType::Bigint => "BIGINT".to_string(),
        ColumnType::Unknown => "VARCHAR(255)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varchar_default_length() {
        assert_eq!(sql_type(ColumnType::Varchar, None), "VARCHAR(255)");
    }

    #[test]
    fn test_varchar_explicit_length() {
        assert_eq!(sql_type(ColumnType::Varchar, Some(50)), "VARCHAR(50)");
    }

    #[test]
    fn test_varchar_zero_length_falls_back() {
        assert_eq!(sql_type(ColumnType::Varchar, Some(0)), "VARCHAR(255)");
    }

    #[test]
    fn test_fixed_keywords() {
        assert_eq!(sql_type(ColumnType::Text, None), "TEXT");
        assert_eq!(sql_type(ColumnType::Integer, None), "INTEGER");
        assert_eq!(sql_type(ColumnType::Float, None), "FLOAT");
        assert_eq!(sql_type(ColumnType::Boolean, None), "BOOLEAN");
        assert_eq!(sql_type(ColumnType::Date, None), "DATE");
        assert_eq!(sql_type(ColumnType::Datetime, None), "DATETIME");
        assert_eq!(sql_type(ColumnType::Time, None), "TIME");
        assert_eq!(sql_type(ColumnType::Uuid, None), "UUID");
        assert_eq!(sql_type(ColumnType::Json, None), "JSON");
        assert_eq!(sql_type(ColumnType::Bigint, None), "BIGINT");
    }

    #[test]
    fn test_length_ignored_for_fixed_types() {
        assert_eq!(sql_type(ColumnType::Integer, Some(11)), "INTEGER");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(sql_type(ColumnType::Unknown, Some(42)), "VARCHAR(255)");
    }
}
