//! The mapping engine.
//!
//! [`Mapper::map`] produces a freshly constructed destination record from a
//! source value: registered overrides run first, then a generic field loop
//! pairs writable destination fields with readable source fields by
//! case-insensitive name and converts each value by destination kind. The
//! same loop serves top-level calls, nested record fields, and sequence
//! elements.

use std::sync::Arc;

use log::warn;
use smallvec::SmallVec;

use crate::config::MapperConfig;
use crate::convert::{ConvertError, coerce_value};
use crate::error::{ConversionFailure, MapperError, Result};
use crate::registry::MappingRegistry;
use crate::shape::{FieldDescriptor, FieldKind, Shape};
use crate::value::{Record, Value};

/// Per-field hook that may replace a converted value before assignment
///
/// Invoked with the destination field name and the converted value for every
/// field that converts successfully, including nested and element fields.
pub type ValueTransformer<'a> = &'a dyn Fn(&str, Value) -> Value;

type Failures = SmallVec<[ConversionFailure; 4]>;

/// The mapping engine
///
/// Owns its configuration and a shared [`MappingRegistry`]. Mapping reads
/// but never mutates the source; concurrent `map` calls are independent.
pub struct Mapper {
    config: MapperConfig,
    registry: Arc<MappingRegistry>,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper {
    /// Create a mapper with default configuration and an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    /// Create a mapper with the given configuration and an empty registry
    #[must_use]
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            registry: Arc::new(MappingRegistry::new()),
        }
    }

    /// Create a mapper sharing an existing registry
    #[must_use]
    pub fn with_registry(config: MapperConfig, registry: Arc<MappingRegistry>) -> Self {
        Self { config, registry }
    }

    /// The mapper's override registry
    #[must_use]
    pub fn registry(&self) -> &MappingRegistry {
        &self.registry
    }

    /// The mapper's configuration
    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map `source` to a new instance of the `dest` shape
    ///
    /// An absent source maps to an absent result with no field processing.
    /// Per-field conversion failures leave the field at its prior value and
    /// never fail the call, unless strict mode is configured.
    pub fn map(&self, source: &Value, dest: &Arc<Shape>) -> Result<Value> {
        self.map_with(source, dest, None)
    }

    /// Map with a per-field value transformer
    ///
    /// The transformer is forwarded into nested record and sequence element
    /// mapping, exactly as overrides and conversion rules are.
    pub fn map_with(
        &self,
        source: &Value,
        dest: &Arc<Shape>,
        transformer: Option<ValueTransformer<'_>>,
    ) -> Result<Value> {
        if source.is_null() {
            return Ok(Value::Null);
        }

        let mut failures = Failures::new();
        let record = self.map_record(source, dest, transformer, "", &mut failures)?;

        if self.config.strict && !failures.is_empty() {
            return Err(MapperError::Conversion(failures.into_vec()));
        }
        Ok(Value::Record(record))
    }

    /// One mapping step: construct, run the override, copy field by field
    fn map_record(
        &self,
        source: &Value,
        dest: &Arc<Shape>,
        transformer: Option<ValueTransformer<'_>>,
        path: &str,
        failures: &mut Failures,
    ) -> Result<Record> {
        if let Err(duplicate) = dest.check_constructible() {
            return Err(MapperError::Shape(format!(
                "shape '{}' has duplicate field name '{duplicate}'",
                dest.name()
            )));
        }

        let mut destination = Record::new(dest);

        let Some(src) = source.as_record() else {
            // A source without fields maps to an untouched default instance
            return Ok(destination);
        };

        if let Some(action) = self.registry.lookup(src.shape().name(), dest.name()) {
            action(src, &mut destination);
        }

        for (index, field) in dest.fields().iter().enumerate() {
            if !field.writable {
                continue;
            }
            let Some(source_index) = src.shape().match_readable(&field.name) else {
                continue;
            };
            let source_field = &src.shape().fields()[source_index];
            let source_value = src.value_at(source_index);

            // Absence always propagates, never defaults to a placeholder
            if source_value.is_null() {
                destination.set_at(index, Value::Null);
                continue;
            }

            match self.convert_field(field, source_field, source_value, transformer, path, failures)
            {
                Ok(mut value) => {
                    if let Some(transform) = transformer {
                        value = transform(&field.name, value);
                    }
                    destination.set_at(index, value);
                }
                Err(error) => {
                    let field_path = join_path(path, &field.name);
                    if self.config.log_failures {
                        warn!("leaving '{field_path}' unset: {error}");
                    }
                    failures.push(ConversionFailure {
                        path: field_path,
                        error,
                    });
                }
            }
        }

        Ok(destination)
    }

    /// Classify one field conversion by destination kind and perform it
    fn convert_field(
        &self,
        field: &FieldDescriptor,
        source_field: &FieldDescriptor,
        source_value: &Value,
        transformer: Option<ValueTransformer<'_>>,
        path: &str,
        failures: &mut Failures,
    ) -> std::result::Result<Value, ConvertError> {
        if let Some((element, fixed_len)) = field.kind.sequence_element() {
            let field_path = join_path(path, &field.name);
            return self.convert_sequence(
                source_value,
                element,
                fixed_len,
                transformer,
                &field_path,
                failures,
            );
        }

        if self.config.recursive && field.kind.is_record() && source_field.kind.is_record() {
            if let Some(shape) = field.kind.nested_shape() {
                let field_path = join_path(path, &field.name);
                let nested = self
                    .map_record(source_value, shape, transformer, &field_path, failures)
                    .map_err(|e| ConvertError::Conversion(e.to_string()))?;
                return Ok(Value::Record(nested));
            }
        }

        coerce_value(source_value, &field.kind, &self.config.date_format_config)
    }

    /// Map a source sequence element-wise, preserving order
    fn convert_sequence(
        &self,
        source_value: &Value,
        element: &FieldKind,
        fixed_len: Option<usize>,
        transformer: Option<ValueTransformer<'_>>,
        path: &str,
        failures: &mut Failures,
    ) -> std::result::Result<Value, ConvertError> {
        let Some(items) = source_value.as_seq() else {
            // Non-iterable source for a sequence field: raw unconverted copy
            return Ok(source_value.clone());
        };

        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            if item.is_null() {
                out.push(Value::Null);
                continue;
            }
            let mapped = if let Some(shape) = element.nested_shape() {
                let element_path = format!("{path}[{i}]");
                let record = self
                    .map_record(item, shape, transformer, &element_path, failures)
                    .map_err(|e| ConvertError::Conversion(e.to_string()))?;
                Value::Record(record)
            } else {
                coerce_value(item, element, &self.config.date_format_config)?
            };
            out.push(mapped);
        }

        if let Some(expected) = fixed_len {
            if out.len() != expected {
                return Err(ConvertError::Conversion(format!(
                    "expected {expected} elements, got {}",
                    out.len()
                )));
            }
        }
        Ok(Value::Seq(out))
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
