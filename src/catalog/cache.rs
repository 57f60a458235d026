//! Memoizing catalog wrapper.
//!
//! Evaluation is a pure function of (facts, predicate name), so results are
//! keyed on the sheet's fact bits rather than any notion of type identity.
//! Two callers racing on the same miss both compute, both get the same
//! answer, and one insert wins; duplicate computation is idempotent.

use dashmap::DashMap;

use super::evaluate::Catalog;
use crate::error::DefinitionError;
use crate::facts::{FactSet, FactSheet};

/// A [`Catalog`] with a concurrent per-(facts, predicate) result cache.
#[derive(Debug)]
pub struct CachedCatalog {
    inner: Catalog,
    memo: DashMap<(FactSet, String), bool>,
}

impl CachedCatalog {
    #[must_use]
    pub fn new(inner: Catalog) -> Self {
        Self {
            inner,
            memo: DashMap::new(),
        }
    }

    /// Evaluate with memoization. Same contract as [`Catalog::evaluate`].
    pub fn evaluate(&self, name: &str, sheet: &FactSheet) -> Result<bool, DefinitionError> {
        let key = (sheet.facts(), name.to_owned());
        if let Some(hit) = self.memo.get(&key) {
            return Ok(*hit);
        }
        let result = self.inner.evaluate(name, sheet)?;
        self.memo.insert(key, result);
        Ok(result)
    }

    /// The wrapped catalog, for introspection calls.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner
    }

    /// Cached entries so far.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.memo.len()
    }
}

impl From<Catalog> for CachedCatalog {
    fn from(inner: Catalog) -> Self {
        Self::new(inner)
    }
}
