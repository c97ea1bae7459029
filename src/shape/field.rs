//! Field kinds and field descriptors.

use std::fmt;
use std::sync::Arc;

use crate::shape::{EnumDescriptor, Shape};

/// Classification of a field's value kind
///
/// This enum standardizes value kinds across shapes and selects the
/// conversion strategy used when a destination field is populated from a
/// source field of a different kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Boolean value
    Bool,
    /// Signed integer value
    Int,
    /// Unsigned integer value
    UInt,
    /// Floating point value
    Float,
    /// Text value
    Str,
    /// Calendar date value
    Date,
    /// Date and time value
    DateTime,
    /// Enumerated value drawn from a named variant list
    Enum(Arc<EnumDescriptor>),
    /// Optional wrapper around another kind
    Nullable(Box<FieldKind>),
    /// Nested record of another shape
    Record(Arc<Shape>),
    /// Ordered sequence of an element kind
    Seq(Box<FieldKind>),
    /// Fixed-length sequence of an element kind
    Array(Box<FieldKind>, usize),
}

impl FieldKind {
    /// Identifies whether this kind is numeric
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::UInt | Self::Float)
    }

    /// Identifies whether this kind is textual
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Str)
    }

    /// Identifies whether this kind is a date or date-time kind
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// Identifies record-like kinds, through at most one nullable wrapper
    #[must_use]
    pub fn is_record(&self) -> bool {
        match self {
            Self::Record(_) => true,
            Self::Nullable(inner) => matches!(**inner, Self::Record(_)),
            _ => false,
        }
    }

    /// The nested shape of a record-like kind, through at most one
    /// nullable wrapper
    #[must_use]
    pub fn nested_shape(&self) -> Option<&Arc<Shape>> {
        match self {
            Self::Record(shape) => Some(shape),
            Self::Nullable(inner) => match &**inner {
                Self::Record(shape) => Some(shape),
                _ => None,
            },
            _ => None,
        }
    }

    /// The element kind of a sequence kind, with the declared length for
    /// fixed-length sequences
    #[must_use]
    pub fn sequence_element(&self) -> Option<(&FieldKind, Option<usize>)> {
        match self {
            Self::Seq(element) => Some((element, None)),
            Self::Array(element, len) => Some((element, Some(*len))),
            _ => None,
        }
    }

    /// The wrapped kind of a nullable kind
    #[must_use]
    pub fn nullable_inner(&self) -> Option<&FieldKind> {
        match self {
            Self::Nullable(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "Bool"),
            Self::Int => write!(f, "Int"),
            Self::UInt => write!(f, "UInt"),
            Self::Float => write!(f, "Float"),
            Self::Str => write!(f, "Str"),
            Self::Date => write!(f, "Date"),
            Self::DateTime => write!(f, "DateTime"),
            Self::Enum(desc) => write!(f, "Enum({})", desc.name()),
            Self::Nullable(inner) => write!(f, "Nullable({inner})"),
            Self::Record(shape) => write!(f, "Record({})", shape.name()),
            Self::Seq(element) => write!(f, "Seq({element})"),
            Self::Array(element, len) => write!(f, "Array({element}; {len})"),
        }
    }
}

/// A single field of a shape
///
/// Carries the field's name, kind classification, and read/write capability.
/// The engine copies into writable destination fields from readable source
/// fields only.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Name of the field within its shape
    pub name: String,
    /// Description of the field
    pub description: String,
    /// Kind classification of the field
    pub kind: FieldKind,
    /// Whether the field can be read from a source instance
    pub readable: bool,
    /// Whether the field can be written on a destination instance
    pub writable: bool,
}

impl FieldDescriptor {
    /// Create a new readable, writable field descriptor
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            readable: true,
            writable: true,
        }
    }

    /// Add a description to this field
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark this field as readable but not writable
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Mark this field as writable but not readable
    #[must_use]
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    /// Check if the given name matches this field, ignoring ASCII case
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
