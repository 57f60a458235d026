//! Sealed catalog evaluation and introspection.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::trace;

use super::builder::CatalogBuilder;
use super::names;
use super::predicate::PredicateDef;
use crate::error::DefinitionError;
use crate::exchange::{SwapPolicy, resolve_exchange};
use crate::facts::{Fact, FactSheet};

/// Immutable, validated predicate catalog.
///
/// Produced by [`CatalogBuilder::seal`](super::CatalogBuilder::seal); every
/// name reference is known to resolve and the dependency graph is known to
/// be acyclic. Evaluation is pure: same sheet and name, same answer,
/// forever.
#[derive(Clone, Debug)]
pub struct Catalog {
    defs: IndexMap<String, PredicateDef>,
}

impl Catalog {
    pub(super) fn from_defs(defs: IndexMap<String, PredicateDef>) -> Self {
        Self { defs }
    }

    /// The canonical named-requirement catalog.
    ///
    /// Atomic entries mirror the probe's fact vocabulary; `PODType`,
    /// `Swappable` and `NullablePointer` are composite. The swap policy is
    /// an explicit argument because the two documented `Swappable` variants
    /// disagree; there is no default.
    #[must_use]
    pub fn named_requirements(policy: SwapPolicy) -> Self {
        let builder = CatalogBuilder::new()
            .atomic(names::DEFAULT_CONSTRUCTIBLE, Fact::DefaultConstructible)
            .atomic(names::MOVE_CONSTRUCTIBLE, Fact::MoveConstructible)
            .atomic(names::COPY_CONSTRUCTIBLE, Fact::CopyConstructible)
            .atomic(names::MOVE_ASSIGNABLE, Fact::MoveAssignable)
            .atomic(names::COPY_ASSIGNABLE, Fact::CopyAssignable)
            .atomic(names::DESTRUCTIBLE, Fact::Destructible)
            .atomic(names::TRIVIALLY_COPYABLE, Fact::TriviallyCopyable)
            .atomic(names::TRIVIAL_TYPE, Fact::Trivial)
            .atomic(names::STANDARD_LAYOUT_TYPE, Fact::StandardLayout)
            .composite(
                names::POD_TYPE,
                [names::TRIVIAL_TYPE, names::STANDARD_LAYOUT_TYPE],
            )
            .atomic(names::NULL_TESTABLE, Fact::NullEquality)
            .atomic(names::EQUALITY_COMPARABLE, Fact::Equality)
            .atomic(names::LESS_THAN_COMPARABLE, Fact::Ordering)
            .customization_point(names::SWAPPABLE, policy)
            .composite(
                names::NULLABLE_POINTER,
                [
                    names::NULL_TESTABLE,
                    names::EQUALITY_COMPARABLE,
                    names::DEFAULT_CONSTRUCTIBLE,
                    names::COPY_CONSTRUCTIBLE,
                    names::COPY_ASSIGNABLE,
                    names::DESTRUCTIBLE,
                ],
            );
        builder.seal().expect("canonical catalog definitions are valid")
    }

    /// Evaluate a named predicate against a type's fact sheet.
    ///
    /// Unknown names fail with [`DefinitionError::UnknownPredicate`], never
    /// a silent `false`.
    pub fn evaluate(&self, name: &str, sheet: &FactSheet) -> Result<bool, DefinitionError> {
        let def = self
            .defs
            .get(name)
            .ok_or_else(|| DefinitionError::UnknownPredicate(name.to_string()))?;
        let result = self.eval_def(def, sheet);
        trace!(
            predicate = name,
            sheet = sheet.label(),
            result,
            "evaluated predicate"
        );
        Ok(result)
    }

    fn eval_def(&self, def: &PredicateDef, sheet: &FactSheet) -> bool {
        match def {
            PredicateDef::Atomic(fact) => sheet.has(*fact),
            // Every reference was resolved at seal time.
            PredicateDef::All(conjuncts) => conjuncts
                .iter()
                .all(|dep| self.eval_def(&self.defs[dep.as_str()], sheet)),
            PredicateDef::CustomizationPoint(policy) => {
                resolve_exchange(sheet, *policy).is_supported()
            }
        }
    }

    /// Predicate names in registration order.
    pub fn predicates(&self) -> impl Iterator<Item = &str> {
        self.defs.keys().map(String::as_str)
    }

    /// Direct dependencies of a named predicate.
    ///
    /// Atomic and customization-point entries have none.
    pub fn dependencies_of(&self, name: &str) -> Result<BTreeSet<&str>, DefinitionError> {
        let def = self
            .defs
            .get(name)
            .ok_or_else(|| DefinitionError::UnknownPredicate(name.to_string()))?;
        Ok(match def {
            PredicateDef::All(conjuncts) => conjuncts.iter().map(String::as_str).collect(),
            PredicateDef::Atomic(_) | PredicateDef::CustomizationPoint(_) => BTreeSet::new(),
        })
    }

    /// Number of registered predicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// The definition registered under `name`.
    pub fn definition(&self, name: &str) -> Result<&PredicateDef, DefinitionError> {
        self.defs
            .get(name)
            .ok_or_else(|| DefinitionError::UnknownPredicate(name.to_string()))
    }
}
