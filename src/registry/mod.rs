//! Custom mapping overrides keyed by (source shape, destination shape).

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::shape::Shape;
use crate::value::Record;

/// An override procedure for one exact shape pair
///
/// Receives the source record and a pre-constructed, not-yet-populated
/// destination record, and may set any subset of its fields. It runs before
/// generic field copying, which may overwrite fields it touched.
pub type MappingOverride = dyn Fn(&Record, &mut Record) + Send + Sync;

/// Table of custom mapping overrides
///
/// Keys are exact (source shape name, destination shape name) pairs; no
/// subtype or fuzzy matching. The table is keyed by source name, then
/// destination name, so lookup borrows both names without allocating. It is
/// read-write locked, so while the expected lifecycle is register-then-map,
/// registration concurrent with lookup is defined.
#[derive(Default)]
pub struct MappingRegistry {
    overrides: RwLock<FxHashMap<String, FxHashMap<String, Arc<MappingOverride>>>>,
}

impl MappingRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override for the exact (source, destination) shape pair
    ///
    /// A later registration for the same pair replaces the earlier one.
    pub fn register<F>(&self, source: &Shape, dest: &Shape, action: F)
    where
        F: Fn(&Record, &mut Record) + Send + Sync + 'static,
    {
        self.overrides
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(source.name().to_string())
            .or_default()
            .insert(dest.name().to_string(), Arc::new(action));
    }

    /// Exact-pair lookup by shape names
    #[must_use]
    pub fn lookup(&self, source: &str, dest: &str) -> Option<Arc<MappingOverride>> {
        self.overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(source)
            .and_then(|table| table.get(dest))
            .cloned()
    }

    /// Number of registered overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|table| table.len())
            .sum()
    }

    /// Whether the registry holds no overrides
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRegistry")
            .field("overrides", &self.len())
            .finish()
    }
}
