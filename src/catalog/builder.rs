//! Catalog registration and seal-time validation.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use super::evaluate::Catalog;
use super::predicate::PredicateDef;
use crate::error::DefinitionError;
use crate::exchange::SwapPolicy;
use crate::facts::Fact;

/// Records predicate definitions, then seals them into a [`Catalog`].
///
/// Registration itself never fails; every definition-time check runs in
/// [`seal`](Self::seal), before any query can be issued. Sealing consumes
/// the builder, so late registration against a live catalog is
/// unrepresentable.
#[derive(Clone, Default, Debug)]
pub struct CatalogBuilder {
    entries: Vec<(String, PredicateDef)>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a predicate backed directly by one atomic fact.
    #[must_use]
    pub fn atomic(mut self, name: impl Into<String>, fact: Fact) -> Self {
        self.entries.push((name.into(), PredicateDef::Atomic(fact)));
        self
    }

    /// Register a conjunction of other named predicates.
    #[must_use]
    pub fn composite<I, S>(mut self, name: impl Into<String>, conjuncts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let conjuncts = conjuncts.into_iter().map(Into::into).collect();
        self.entries.push((name.into(), PredicateDef::All(conjuncts)));
        self
    }

    /// Register a predicate resolved through the exchange customization
    /// point under the given policy.
    #[must_use]
    pub fn customization_point(mut self, name: impl Into<String>, policy: SwapPolicy) -> Self {
        self.entries
            .push((name.into(), PredicateDef::CustomizationPoint(policy)));
        self
    }

    /// Validate every definition and produce an immutable [`Catalog`].
    ///
    /// Rejects duplicate names, references to unregistered predicates, and
    /// cyclic dependencies (reported with the offending path).
    pub fn seal(self) -> Result<Catalog, DefinitionError> {
        let mut defs = IndexMap::with_capacity(self.entries.len());
        for (name, def) in self.entries {
            if defs.contains_key(&name) {
                return Err(DefinitionError::DuplicateName(name));
            }
            defs.insert(name, def);
        }

        for (name, def) in &defs {
            if let PredicateDef::All(conjuncts) = def {
                for dep in conjuncts {
                    if !defs.contains_key(dep) {
                        return Err(DefinitionError::UnknownReference {
                            referrer: name.clone(),
                            name: dep.clone(),
                        });
                    }
                }
            }
        }

        check_acyclic(&defs)?;

        debug!(predicates = defs.len(), "predicate catalog sealed");
        Ok(Catalog::from_defs(defs))
    }
}

// =============================================================================
// Cycle detection
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Visited,
}

/// Depth-first search over the reference graph with visiting/visited marks.
fn check_acyclic(defs: &IndexMap<String, PredicateDef>) -> Result<(), DefinitionError> {
    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    for name in defs.keys() {
        visit(name, defs, &mut marks, &mut stack)?;
    }
    Ok(())
}

fn visit<'a>(
    name: &'a str,
    defs: &'a IndexMap<String, PredicateDef>,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Result<(), DefinitionError> {
    match marks.get(name) {
        Some(Mark::Visited) => return Ok(()),
        Some(Mark::Visiting) => {
            // Back edge: the cycle is the stack suffix starting at `name`.
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut path: Vec<String> = stack[start..].iter().map(ToString::to_string).collect();
            path.push(name.to_string());
            return Err(DefinitionError::CyclicDependency { path });
        }
        None => {}
    }

    marks.insert(name, Mark::Visiting);
    stack.push(name);
    if let PredicateDef::All(conjuncts) = &defs[name] {
        for dep in conjuncts {
            visit(dep.as_str(), defs, marks, stack)?;
        }
    }
    stack.pop();
    marks.insert(name, Mark::Visited);
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_dependencies_are_not_cycles() {
        let catalog = CatalogBuilder::new()
            .atomic("Base", Fact::Destructible)
            .composite("Left", ["Base"])
            .composite("Right", ["Base"])
            .composite("Top", ["Left", "Right"])
            .seal();
        assert!(catalog.is_ok());
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let err = CatalogBuilder::new()
            .composite("Selfish", ["Selfish"])
            .seal()
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::CyclicDependency {
                path: vec!["Selfish".into(), "Selfish".into()],
            }
        );
    }

    #[test]
    fn duplicate_wins_over_later_checks() {
        let err = CatalogBuilder::new()
            .atomic("Twice", Fact::Equality)
            .atomic("Twice", Fact::Ordering)
            .seal()
            .unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateName("Twice".into()));
    }
}
