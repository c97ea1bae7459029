//! Scalar coercion between value kinds.

use std::sync::Arc;

use crate::convert::date_utils::{parse_date_string, parse_datetime_string};
use crate::convert::types::{ConvertError, DateFormatConfig, Result};
use crate::shape::{EnumDescriptor, FieldKind};
use crate::value::{EnumValue, Value};

/// Convert a value to the given destination kind using standard rules
///
/// Handles every kind except record and sequence kinds, which the mapping
/// engine converts structurally before falling back here. Absent values pass
/// through unchanged; absence always propagates.
pub fn coerce_value(value: &Value, target: &FieldKind, config: &DateFormatConfig) -> Result<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match target {
        FieldKind::Nullable(inner) => coerce_value(value, inner, config),
        FieldKind::Bool => coerce_bool(value),
        FieldKind::Int => coerce_int(value),
        FieldKind::UInt => coerce_uint(value),
        FieldKind::Float => coerce_float(value),
        FieldKind::Str => value
            .render_text(config)
            .map(Value::Str)
            .ok_or_else(|| unsupported(value, target)),
        FieldKind::Date => coerce_date(value, config),
        FieldKind::DateTime => coerce_datetime(value, config),
        FieldKind::Enum(descriptor) => parse_enum(value, descriptor, config),
        FieldKind::Record(_) | FieldKind::Seq(_) | FieldKind::Array(..) => {
            Err(unsupported(value, target))
        }
    }
}

fn unsupported(value: &Value, target: &FieldKind) -> ConvertError {
    ConvertError::Unsupported {
        from: value.kind_name().to_string(),
        to: target.to_string(),
    }
}

fn coerce_bool(value: &Value) -> Result<Value> {
    let result = match value {
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::UInt(u) => *u != 0,
        Value::Float(f) => *f != 0.0,
        Value::Str(s) => s
            .parse::<bool>()
            .map_err(|_| ConvertError::Conversion(format!("'{s}' is not a boolean")))?,
        _ => return Err(unsupported(value, &FieldKind::Bool)),
    };
    Ok(Value::Bool(result))
}

fn coerce_int(value: &Value) -> Result<Value> {
    let result = match value {
        Value::Int(i) => *i,
        Value::UInt(u) => i64::try_from(*u)
            .map_err(|_| ConvertError::Conversion(format!("{u} is out of range for Int")))?,
        Value::Float(f) => float_to_i64(*f)?,
        Value::Bool(b) => i64::from(*b),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ConvertError::Conversion(format!("'{s}' is not an integer")))?,
        Value::Enum(e) => e.index() as i64,
        _ => return Err(unsupported(value, &FieldKind::Int)),
    };
    Ok(Value::Int(result))
}

fn coerce_uint(value: &Value) -> Result<Value> {
    let result = match value {
        Value::UInt(u) => *u,
        Value::Int(i) => u64::try_from(*i)
            .map_err(|_| ConvertError::Conversion(format!("{i} is out of range for UInt")))?,
        Value::Float(f) => {
            let rounded = float_to_i64(*f)?;
            u64::try_from(rounded).map_err(|_| {
                ConvertError::Conversion(format!("{f} is out of range for UInt"))
            })?
        }
        Value::Bool(b) => u64::from(*b),
        Value::Str(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConvertError::Conversion(format!("'{s}' is not an unsigned integer")))?,
        Value::Enum(e) => e.index() as u64,
        _ => return Err(unsupported(value, &FieldKind::UInt)),
    };
    Ok(Value::UInt(result))
}

fn coerce_float(value: &Value) -> Result<Value> {
    let result = match value {
        Value::Float(f) => *f,
        Value::Int(i) => *i as f64,
        Value::UInt(u) => *u as f64,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ConvertError::Conversion(format!("'{s}' is not a number")))?,
        _ => return Err(unsupported(value, &FieldKind::Float)),
    };
    Ok(Value::Float(result))
}

fn coerce_date(value: &Value, config: &DateFormatConfig) -> Result<Value> {
    match value {
        Value::Date(d) => Ok(Value::Date(*d)),
        Value::DateTime(dt) => Ok(Value::Date(dt.date())),
        Value::Str(s) => parse_date_string(s, config)
            .map(Value::Date)
            .ok_or_else(|| ConvertError::DateParsing(format!("'{s}' matched no date format"))),
        _ => Err(unsupported(value, &FieldKind::Date)),
    }
}

fn coerce_datetime(value: &Value, config: &DateFormatConfig) -> Result<Value> {
    match value {
        Value::DateTime(dt) => Ok(Value::DateTime(*dt)),
        Value::Date(d) => Ok(Value::DateTime(d.and_time(chrono::NaiveTime::MIN))),
        Value::Str(s) => parse_datetime_string(s, config)
            .map(Value::DateTime)
            .ok_or_else(|| {
                ConvertError::DateParsing(format!("'{s}' matched no date-time format"))
            }),
        _ => Err(unsupported(value, &FieldKind::DateTime)),
    }
}

fn parse_enum(
    value: &Value,
    descriptor: &Arc<EnumDescriptor>,
    config: &DateFormatConfig,
) -> Result<Value> {
    let text = value
        .render_text(config)
        .ok_or_else(|| unsupported(value, &FieldKind::Enum(descriptor.clone())))?;
    EnumValue::parse(descriptor, &text)
        .map(Value::Enum)
        .ok_or_else(|| ConvertError::UnknownVariant {
            name: descriptor.name().to_string(),
            text,
        })
}

fn float_to_i64(f: f64) -> Result<i64> {
    let rounded = f.round();
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(ConvertError::Conversion(format!(
            "{f} is out of range for an integer kind"
        )));
    }
    Ok(rounded as i64)
}
