//! Shape metadata: field kinds, field descriptors, and shape tables.
//!
//! Shapes are static field-descriptor tables supplied by the host program.
//! The engine never discovers fields at runtime; every shape it maps from or
//! into is described ahead of time with a [`Shape`] built through
//! [`Shape::builder`].

mod descriptor;
mod field;

pub use descriptor::{EnumDescriptor, Shape, ShapeBuilder};
pub use field::{FieldDescriptor, FieldKind};
