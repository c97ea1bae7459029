//! Error handling for the mapper.

use itertools::Itertools;

use crate::convert::ConvertError;

/// A single field conversion failure, collected in strict mode
#[derive(Debug)]
pub struct ConversionFailure {
    /// Dotted and indexed path of the destination field, e.g.
    /// `endereco.cidade` or `telefones[1].numero`
    pub path: String,
    /// The underlying conversion error
    pub error: ConvertError,
}

/// Specialized error type for mapping operations
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// The destination shape cannot be default-constructed
    #[error("Shape error: {0}")]
    Shape(String),

    /// One or more field conversions failed (strict mode only)
    #[error("Conversion failed for {} field(s): {}", .0.len(), format_failures(.0))]
    Conversion(Vec<ConversionFailure>),
}

fn format_failures(failures: &[ConversionFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.path, f.error))
        .join("; ")
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, MapperError>;
