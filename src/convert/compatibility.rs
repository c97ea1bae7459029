//! Field-kind compatibility classification.
//!
//! Classifies a (source kind, destination kind) pair without performing the
//! conversion, and names the strategy the engine would use. This backs the
//! pre-flight shape compatibility report; the engine itself converts
//! optimistically and recovers per field.

use crate::convert::types::{ConversionStrategy, KindCompatibility};
use crate::shape::FieldKind;

/// Check whether two field kinds are compatible for conversion
#[must_use]
pub fn check_kind_compatibility(from: &FieldKind, to: &FieldKind) -> KindCompatibility {
    if from == to {
        return KindCompatibility::Exact;
    }
    match determine_strategy(from, to) {
        Some(_) => KindCompatibility::Compatible,
        None => KindCompatibility::Incompatible,
    }
}

/// Determine the conversion strategy for a (source, destination) kind pair
///
/// Returns `None` when no conversion rule exists. Nullable wrappers are
/// transparent on both sides.
#[must_use]
pub fn determine_strategy(from: &FieldKind, to: &FieldKind) -> Option<ConversionStrategy> {
    let from = from.nullable_inner().unwrap_or(from);
    let to = to.nullable_inner().unwrap_or(to);

    if from == to {
        return Some(ConversionStrategy::DirectCopy);
    }

    match (from, to) {
        // Sequences map element-wise when the element kinds do
        (FieldKind::Seq(a) | FieldKind::Array(a, _), FieldKind::Seq(b) | FieldKind::Array(b, _)) => {
            determine_strategy(a, b).map(|_| ConversionStrategy::SequenceMapping)
        }

        // Nested records recurse through the engine
        (FieldKind::Record(_), FieldKind::Record(_)) => Some(ConversionStrategy::NestedMapping),

        // Anything with a textual rendering can parse into an enum
        (FieldKind::Str | FieldKind::Enum(_), FieldKind::Enum(_)) => {
            Some(ConversionStrategy::EnumParsing)
        }

        // Numeric conversions (widening and checked narrowing)
        (a, b) if a.is_numeric() && b.is_numeric() => Some(ConversionStrategy::NumericConversion),

        // Text parses into temporal and numeric kinds
        (FieldKind::Str, b) if b.is_temporal() => Some(ConversionStrategy::DateParsing),
        (FieldKind::Str, b) if b.is_numeric() => Some(ConversionStrategy::NumericConversion),
        (FieldKind::Str, FieldKind::Bool) => Some(ConversionStrategy::BooleanConversion),

        // Temporal kinds render as text and interconvert
        (a, FieldKind::Str) if a.is_temporal() => Some(ConversionStrategy::DateFormatting),
        (FieldKind::Date, FieldKind::DateTime) | (FieldKind::DateTime, FieldKind::Date) => {
            Some(ConversionStrategy::DateParsing)
        }

        // Booleans convert to numeric and textual kinds
        (FieldKind::Bool, b) if b.is_numeric() => Some(ConversionStrategy::BooleanConversion),
        (b, FieldKind::Bool) if b.is_numeric() => Some(ConversionStrategy::BooleanConversion),

        // Enums render as their variant name or index
        (FieldKind::Enum(_), b) if b.is_numeric() => Some(ConversionStrategy::NumericConversion),

        // Remaining scalars render as text
        (a, FieldKind::Str)
            if a.is_numeric() || matches!(a, FieldKind::Bool | FieldKind::Enum(_)) =>
        {
            Some(ConversionStrategy::StringConversion)
        }

        _ => None,
    }
}
