//! Shape and enum descriptors.

use std::sync::Arc;

use itertools::Itertools;

use crate::shape::FieldDescriptor;

/// Descriptor for an enumerated kind: a named, ordered variant list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: String,
    variants: Vec<String>,
}

impl EnumDescriptor {
    /// Create a new enum descriptor
    pub fn new(name: impl Into<String>, variants: Vec<impl Into<String>>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        })
    }

    /// Name of the enumerated kind
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared variants, in order
    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Exact-match lookup of a variant by name
    #[must_use]
    pub fn variant_index(&self, text: &str) -> Option<usize> {
        self.variants.iter().position(|v| v == text)
    }

    /// The variant name at the given index
    #[must_use]
    pub fn variant(&self, index: usize) -> Option<&str> {
        self.variants.get(index).map(String::as_str)
    }
}

/// A named, ordered field-descriptor table
///
/// This is the structural description of a value's fields, independent of
/// what the value represents. Shapes are immutable once built and shared
/// behind `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl Shape {
    /// Start building a shape with the given name
    pub fn builder(name: impl Into<String>) -> ShapeBuilder {
        ShapeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Name of the shape; shape identity is name identity
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fields in declared order
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Exact-name field lookup
    #[must_use]
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Exact-name field descriptor lookup
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.field_index(name).map(|i| &self.fields[i])
    }

    /// First readable field whose name matches, ignoring ASCII case
    #[must_use]
    pub fn match_readable(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.readable && f.matches_name(name))
    }

    /// Check that this shape can be default-constructed
    ///
    /// A shape whose field names collide (ignoring ASCII case) has no usable
    /// descriptor table; returns the first duplicated name.
    pub fn check_constructible(&self) -> std::result::Result<(), String> {
        match self
            .fields
            .iter()
            .map(|f| f.name.to_ascii_lowercase())
            .duplicates()
            .next()
        {
            Some(duplicate) => Err(duplicate),
            None => Ok(()),
        }
    }
}

/// Builder for [`Shape`]
#[derive(Debug)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl ShapeBuilder {
    /// Append a field in declared order
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Finish the shape
    #[must_use]
    pub fn build(self) -> Arc<Shape> {
        Arc::new(Shape {
            name: self.name,
            fields: self.fields,
        })
    }
}
