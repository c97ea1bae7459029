//! Runtime values and records.
//!
//! A [`Value`] is the tagged variant the engine reads from sources and
//! writes to destinations; a [`Record`] is an instance of a [`Shape`] with a
//! value per field.

mod serde;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::convert::DateFormatConfig;
use crate::shape::{EnumDescriptor, FieldKind, Shape};

/// A dynamically kinded value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer value
    Int(i64),
    /// Unsigned integer value
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// Text value
    Str(String),
    /// Calendar date value
    Date(NaiveDate),
    /// Date and time value
    DateTime(NaiveDateTime),
    /// Enumerated value
    Enum(EnumValue),
    /// Nested record value
    Record(Record),
    /// Ordered sequence of values
    Seq(Vec<Value>),
}

impl Value {
    /// Whether this value is absent
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value's kind, for diagnostics
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Enum(_) => "enum",
            Self::Record(_) => "record",
            Self::Seq(_) => "seq",
        }
    }

    /// The default value a freshly constructed field of the given kind holds
    ///
    /// Scalars default to their zero value, enums to their first variant, and
    /// nullable, record, and sequence kinds to absent.
    #[must_use]
    pub fn default_for(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Bool => Self::Bool(false),
            FieldKind::Int => Self::Int(0),
            FieldKind::UInt => Self::UInt(0),
            FieldKind::Float => Self::Float(0.0),
            FieldKind::Str => Self::Str(String::new()),
            FieldKind::Enum(desc) => match desc.variant(0) {
                Some(_) => Self::Enum(EnumValue {
                    descriptor: desc.clone(),
                    index: 0,
                }),
                None => Self::Null,
            },
            FieldKind::Date
            | FieldKind::DateTime
            | FieldKind::Nullable(_)
            | FieldKind::Record(_)
            | FieldKind::Seq(_)
            | FieldKind::Array(..) => Self::Null,
        }
    }

    /// Textual rendering of a scalar value, used for string conversion and
    /// enum parsing; records, sequences, and absent values have none
    #[must_use]
    pub fn render_text(&self, config: &DateFormatConfig) -> Option<String> {
        match self {
            Self::Null | Self::Record(_) | Self::Seq(_) => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::UInt(u) => Some(u.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::Date(d) => Some(d.format(&config.default_date_format).to_string()),
            Self::DateTime(dt) => Some(dt.format(&config.default_datetime_format).to_string()),
            Self::Enum(e) => Some(e.variant().to_string()),
        }
    }

    /// Borrow the record value, if this is one
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Borrow the sequence elements, if this is a sequence
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the string value, if this is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The signed integer value, if this is one
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<EnumValue> for Value {
    fn from(v: EnumValue) -> Self {
        Self::Enum(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Seq(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// A value of an enumerated kind
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    descriptor: Arc<EnumDescriptor>,
    index: usize,
}

impl EnumValue {
    /// Parse a variant name into an enum value; exact match only
    #[must_use]
    pub fn parse(descriptor: &Arc<EnumDescriptor>, text: &str) -> Option<Self> {
        descriptor.variant_index(text).map(|index| Self {
            descriptor: descriptor.clone(),
            index,
        })
    }

    /// The enum descriptor this value belongs to
    #[must_use]
    pub fn descriptor(&self) -> &Arc<EnumDescriptor> {
        &self.descriptor
    }

    /// The variant index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The variant name
    #[must_use]
    pub fn variant(&self) -> &str {
        debug_assert!(
            self.index < self.descriptor.variants().len(),
            "enum value index {} out of range for {}",
            self.index,
            self.descriptor.name()
        );
        self.descriptor
            .variant(self.index)
            .unwrap_or_default()
    }
}

/// An instance of a [`Shape`]: one value per field, in declared field order
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    shape: Arc<Shape>,
    values: Vec<Value>,
}

impl Record {
    /// Construct a default-valued record for the given shape
    #[must_use]
    pub fn new(shape: &Arc<Shape>) -> Self {
        let values = shape
            .fields()
            .iter()
            .map(|f| Value::default_for(&f.kind))
            .collect();
        Self {
            shape: shape.clone(),
            values,
        }
    }

    /// The record's shape
    #[must_use]
    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    /// Exact-name field read
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.shape.field_index(name).map(|i| &self.values[i])
    }

    /// Exact-name field write; returns false if the shape has no such field
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> bool {
        match self.shape.field_index(name) {
            Some(index) => {
                self.values[index] = value.into();
                true
            }
            None => false,
        }
    }

    /// Field read by declared index
    #[must_use]
    pub fn value_at(&self, index: usize) -> &Value {
        &self.values[index]
    }

    /// Field write by declared index
    pub fn set_at(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }

    /// Iterate (field name, value) pairs in declared order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.shape
            .fields()
            .iter()
            .map(|f| f.name.as_str())
            .zip(self.values.iter())
    }
}
