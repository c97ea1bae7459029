//! Core types and error definitions for value conversion.

/// Errors that can occur during value conversion
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Error during value conversion
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Date parsing error
    #[error("Date parsing error: {0}")]
    DateParsing(String),

    /// Enum variant parsing error
    #[error("Unknown variant '{text}' for enum {name}")]
    UnknownVariant {
        /// Name of the enumerated kind
        name: String,
        /// The text that matched no variant
        text: String,
    },

    /// No conversion rule exists between the kinds
    #[error("Cannot convert {from} to {to}")]
    Unsupported {
        /// Kind of the source value
        from: String,
        /// The destination field kind
        to: String,
    },
}

/// Alias for Result with `ConvertError`
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Types of field-kind compatibility
#[derive(Debug, PartialEq, Eq)]
pub enum KindCompatibility {
    /// Kinds match exactly
    Exact,
    /// Kinds can be converted
    Compatible,
    /// Kinds are incompatible
    Incompatible,
}

/// Available strategies when populating a destination field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStrategy {
    /// Copy the value unchanged
    DirectCopy,
    /// Convert between numeric kinds
    NumericConversion,
    /// Parse text into date kinds
    DateParsing,
    /// Render dates and date-times as text
    DateFormatting,
    /// Render the value as text
    StringConversion,
    /// Convert boolean values
    BooleanConversion,
    /// Parse text into an enumerated kind
    EnumParsing,
    /// Recurse into a nested record mapping
    NestedMapping,
    /// Map a sequence element-wise
    SequenceMapping,
}

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// List of format strings to try when parsing date-times
    pub datetime_formats: Vec<String>,
    /// Format used when rendering dates as text
    pub default_date_format: String,
    /// Format used when rendering date-times as text
    pub default_datetime_format: String,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%d-%m-%Y".to_string(), // European: 15-01-2023
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d/%m/%Y".to_string(), // UK: 15/01/2023
                "%d.%m.%Y".to_string(), // German/Danish: 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
            ],
            datetime_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
            ],
            default_date_format: "%Y-%m-%d".to_string(),
            default_datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            enable_format_detection: true,
        }
    }
}
