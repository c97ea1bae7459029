//! Configuration for the `Mapper`.

use crate::convert::DateFormatConfig;

/// Configuration for the `Mapper`
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Whether to recurse into nested record fields
    pub recursive: bool,
    /// Collect per-field conversion failures and report them instead of
    /// swallowing them
    pub strict: bool,
    /// Log swallowed conversion failures for debugging
    pub log_failures: bool,
    /// Date format configuration for string/temporal conversions
    pub date_format_config: DateFormatConfig,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            strict: false,
            log_failures: true,
            date_format_config: DateFormatConfig::default(),
        }
    }
}
