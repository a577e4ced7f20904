//! Conversions from Polars values into country record cells.

use polars::prelude::{AnyValue, DataType};

use geoquiz_model::{CellValue, ColumnType};

/// Maps an inferred Polars column type onto a storage type.
pub(crate) fn column_type_of(dtype: &DataType) -> ColumnType {
    if dtype.is_integer() {
        ColumnType::Integer
    } else if dtype.is_float() {
        ColumnType::Real
    } else {
        ColumnType::Text
    }
}

/// Converts a Polars value into a cell of the given column type.
pub(crate) fn any_to_cell(value: AnyValue<'_>, column_type: ColumnType) -> CellValue {
    if matches!(value, AnyValue::Null) {
        return CellValue::Null;
    }
    match column_type {
        ColumnType::Integer => any_to_i64(value).map_or(CellValue::Null, CellValue::Integer),
        ColumnType::Real => any_to_f64(value).map_or(CellValue::Null, CellValue::Real),
        ColumnType::Text => CellValue::Text(any_to_string(value)),
    }
}

/// Converts a Polars value to its text form. Null becomes the empty string.
pub(crate) fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => v.to_string(),
        AnyValue::Float64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts a Polars value to f64, returning None for non-numeric or null values.
pub(crate) fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Converts a Polars value to i64, returning None for non-integer or null values.
pub(crate) fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
