//! A Rust library for metadata-driven mapping between record shapes, with
//! per-pair custom overrides and per-field value transformation.
//!
//! Shapes are static field-descriptor tables; values are tagged variants.
//! The engine walks a destination shape's writable fields, pairs them with
//! source fields by case-insensitive name, and converts each value by
//! destination kind: direct copy, nested-record recursion, element-wise
//! sequence mapping, enum parsing, or scalar coercion.

pub mod config;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod registry;
pub mod shape;
pub mod value;

// Re-export the most common types for easier use
// Core types
pub use config::MapperConfig;
pub use error::{ConversionFailure, MapperError, Result};
pub use mapper::{Mapper, ValueTransformer};
pub use registry::{MappingOverride, MappingRegistry};

// Shape metadata
pub use shape::{EnumDescriptor, FieldDescriptor, FieldKind, Shape, ShapeBuilder};

// Runtime values
pub use value::{EnumValue, Record, Value};

// Conversion utilities
pub use convert::{
    ConversionStrategy, ConvertError, DateFormatConfig, KindCompatibility,
    ShapeCompatibilityReport, check_kind_compatibility, check_shape_compatibility, coerce_value,
    parse_date_string,
};
