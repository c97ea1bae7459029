//! Pre-flight compatibility reporting between two shapes.
//!
//! The engine itself never requires compatibility up front; this report lets
//! a host verify at startup which destination fields will be populated, by
//! which strategy, and which will silently stay at their defaults.

use crate::convert::compatibility::determine_strategy;
use crate::convert::types::ConversionStrategy;
use crate::shape::Shape;

/// A compatibility report for mapping one shape into another
#[derive(Debug)]
pub struct ShapeCompatibilityReport {
    /// Whether every matched destination field has a conversion rule
    pub compatible: bool,
    /// Matched fields whose kinds have no conversion rule
    pub issues: Vec<ShapeIssue>,
    /// The field mappings the engine would perform
    pub mappings: Vec<FieldMappingPlan>,
    /// Writable destination fields with no source counterpart
    pub unmatched: Vec<String>,
}

/// A matched field pair with no conversion rule between its kinds
#[derive(Debug)]
pub struct ShapeIssue {
    /// The destination field name
    pub field_name: String,
    /// Description of the incompatibility
    pub description: String,
}

/// A planned field mapping
#[derive(Debug)]
pub struct FieldMappingPlan {
    /// The destination field name
    pub dest_field: String,
    /// The matched source field name
    pub source_field: String,
    /// The strategy the engine would use
    pub strategy: ConversionStrategy,
}

/// Check how the fields of `source` map onto the writable fields of `dest`
#[must_use]
pub fn check_shape_compatibility(source: &Shape, dest: &Shape) -> ShapeCompatibilityReport {
    let mut issues = Vec::new();
    let mut mappings = Vec::new();
    let mut unmatched = Vec::new();

    for field in dest.fields().iter().filter(|f| f.writable) {
        let Some(source_index) = source.match_readable(&field.name) else {
            unmatched.push(field.name.clone());
            continue;
        };
        let source_field = &source.fields()[source_index];

        match determine_strategy(&source_field.kind, &field.kind) {
            Some(strategy) => mappings.push(FieldMappingPlan {
                dest_field: field.name.clone(),
                source_field: source_field.name.clone(),
                strategy,
            }),
            None => issues.push(ShapeIssue {
                field_name: field.name.clone(),
                description: format!(
                    "no conversion from {} ({}) to {} ({})",
                    source_field.name, source_field.kind, field.name, field.kind
                ),
            }),
        }
    }

    ShapeCompatibilityReport {
        compatible: issues.is_empty(),
        issues,
        mappings,
        unmatched,
    }
}
