//! Kind-directed value conversion.
//!
//! This is the conversion half of the engine: given a source value and a
//! destination field kind, produce a value of the destination kind using
//! standard conversion rules (numeric widening and narrowing, string to
//! temporal parsing, textual rendering, enum parsing). The compatibility
//! helpers classify conversions ahead of time without performing them.

mod coerce;
pub mod compatibility;
pub mod date_utils;
pub mod shape_compat;
pub mod types;

// Re-export the main types and functions for easier access
pub use coerce::coerce_value;
pub use compatibility::{check_kind_compatibility, determine_strategy};
pub use date_utils::{detect_date_format, parse_date_string, parse_datetime_string};
pub use shape_compat::{check_shape_compatibility, FieldMappingPlan, ShapeCompatibilityReport, ShapeIssue};
pub use types::{ConversionStrategy, ConvertError, DateFormatConfig, KindCompatibility, Result};
