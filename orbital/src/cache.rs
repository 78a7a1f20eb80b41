//! Memoized orbital isosurfaces.
//!
//! The field depends only on the orbital shape and the scale factor, so the
//! key is exactly that pair. Callers decide when to drop entries.

use crate::error::Result;
use crate::orbital::OrbitalType;
use crate::radii::scale_factor;
use crate::sample::generate;
use crate::shells::Isosurface;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    orbital: OrbitalType,
    scale_bits: u64,
}

#[derive(Debug, Default)]
pub struct OrbitalCache {
    entries: HashMap<CacheKey, Arc<Vec<Isosurface>>>,
}

impl OrbitalCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(
        &mut self,
        orbital: OrbitalType,
        hydrogen_radius: f64,
        element_radius: f64,
    ) -> Result<Arc<Vec<Isosurface>>> {
        let scale = scale_factor(hydrogen_radius, element_radius)?;
        let key = CacheKey {
            orbital,
            scale_bits: scale.to_bits(),
        };

        if let Some(surfaces) = self.entries.get(&key) {
            debug!("cache hit for {} orbital at scale {:.4}", orbital, scale);
            return Ok(Arc::clone(surfaces));
        }

        let surfaces = Arc::new(generate(orbital, hydrogen_radius, element_radius)?);
        self.entries.insert(key, Arc::clone(&surfaces));
        Ok(surfaces)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, e.g. when a new molecule is loaded.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_reuses_surfaces() {
        let mut cache = OrbitalCache::new();
        let first = cache.get_or_generate(OrbitalType::S, 1.0, 0.53).unwrap();
        let second = cache.get_or_generate(OrbitalType::S, 1.0, 0.53).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);

        // same ratio, same field
        let third = cache.get_or_generate(OrbitalType::S, 2.0, 1.06).unwrap();
        assert!(Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn test_clear_and_errors() {
        let mut cache = OrbitalCache::new();
        cache.get_or_generate(OrbitalType::S, 1.0, 1.0).unwrap();
        assert!(cache.get_or_generate(OrbitalType::Px, 0.0, 1.0).is_err());
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
