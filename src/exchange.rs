//! Exchange customization point: can two values of a type be swapped, and how?
//!
//! Resolution consults an explicit, ordered list of lookup sources,
//! first-match-wins:
//!
//! ```text
//! TypeOverride    - the type's own `Exchange` impl
//! GenericFallback - move-based generic swap (`mem::swap` shape)
//! ```
//!
//! A type supplying an efficient custom exchange wins over the generic
//! move-based fallback without the caller knowing which exists. The two
//! catalog policies for the `Swappable` predicate are modeled explicitly by
//! [`SwapPolicy`]; callers pick one, they are never merged.

use crate::facts::{FactSet, FactSheet};

// =============================================================================
// Exchange - the override trait
// =============================================================================

/// Type-specific exchange override.
///
/// Implementing this is the opt-in for the `TypeOverride` lookup source;
/// the probing layer records it as the `ExchangeOverride` fact.
pub trait Exchange {
    /// Exchange `self` with `other`.
    fn exchange(&mut self, other: &mut Self);
}

// =============================================================================
// Lookup sources and resolution
// =============================================================================

/// One source the exchange lookup may resolve through.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LookupSource {
    /// A type-specific `Exchange` override.
    TypeOverride,
    /// The generic move-based swap.
    GenericFallback,
}

impl LookupSource {
    /// Sources in resolution order. The first match wins; later sources are
    /// not consulted.
    pub const PRIORITY: [Self; 2] = [Self::TypeOverride, Self::GenericFallback];

    fn matches(self, facts: FactSet) -> bool {
        match self {
            Self::TypeOverride => facts.contains(FactSet::EXCHANGE_OVERRIDE),
            Self::GenericFallback => {
                facts.contains(FactSet::MOVE_CONSTRUCTIBLE.union(FactSet::MOVE_ASSIGNABLE))
            }
        }
    }
}

/// Outcome of an exchange lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Resolution {
    /// An exchange is available through the given source.
    Resolved(LookupSource),
    /// No source matched; the operation is unsupported for this type.
    Unsupported,
}

impl Resolution {
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The source that matched, if any.
    #[must_use]
    pub fn source(self) -> Option<LookupSource> {
        match self {
            Self::Resolved(source) => Some(source),
            Self::Unsupported => None,
        }
    }
}

/// Which catalog variant of the `Swappable` predicate is in force.
///
/// The two variants disagree on whether an override alone is enough; the
/// policy is always an explicit argument so the choice is visible at the
/// registration site.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SwapPolicy {
    /// A resolved override alone satisfies the predicate.
    OverrideSuffices,
    /// The type must also be move-constructible and move-assignable, even
    /// when an override exists.
    RequireMoveCapable,
}

/// Run the two-phase exchange lookup against a fact sheet.
///
/// Under [`SwapPolicy::RequireMoveCapable`] a type without both move facts
/// resolves to [`Resolution::Unsupported`] before any source is consulted.
#[must_use]
pub fn resolve_exchange(sheet: &FactSheet, policy: SwapPolicy) -> Resolution {
    let facts = sheet.facts();
    let move_capable = facts.contains(FactSet::MOVE_CONSTRUCTIBLE.union(FactSet::MOVE_ASSIGNABLE));
    if policy == SwapPolicy::RequireMoveCapable && !move_capable {
        return Resolution::Unsupported;
    }
    for source in LookupSource::PRIORITY {
        if source.matches(facts) {
            return Resolution::Resolved(source);
        }
    }
    Resolution::Unsupported
}

// =============================================================================
// Runtime dispatch
// =============================================================================

/// Wrapper for inherent-method-priority exchange dispatch.
///
/// Use through the [`exchange!`](crate::exchange!) macro: the inherent
/// `dispatch` is found when the type implements [`Exchange`], otherwise the
/// fallback trait method performs a plain move-based swap.
#[doc(hidden)]
pub struct ExchangeDispatch<'a, T>(pub &'a mut T);

#[doc(hidden)]
pub trait ExchangeViaMove<T> {
    fn dispatch(self, other: &mut T);
}

impl<T> ExchangeViaMove<T> for ExchangeDispatch<'_, T> {
    fn dispatch(self, other: &mut T) {
        core::mem::swap(self.0, other);
    }
}

impl<T: Exchange> ExchangeDispatch<'_, T> {
    pub fn dispatch(self, other: &mut T) {
        self.0.exchange(other);
    }
}

/// Exchange two values, preferring the type's own [`Exchange`] impl over the
/// generic move-based swap.
///
/// ```ignore
/// let mut a = vec![1];
/// let mut b = vec![2];
/// exchange!(&mut a, &mut b);
/// ```
#[macro_export]
macro_rules! exchange {
    ($a:expr, $b:expr) => {{
        #[allow(unused_imports)]
        use $crate::exchange::ExchangeViaMove as _;
        $crate::exchange::ExchangeDispatch($a).dispatch($b)
    }};
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_starts_with_the_override() {
        assert_eq!(
            LookupSource::PRIORITY,
            [LookupSource::TypeOverride, LookupSource::GenericFallback]
        );
    }

    #[test]
    fn fallback_needs_both_move_facts() {
        let half = FactSheet::new("half", FactSet::MOVE_CONSTRUCTIBLE);
        assert_eq!(
            resolve_exchange(&half, SwapPolicy::OverrideSuffices),
            Resolution::Unsupported
        );

        let full = half.with(FactSet::MOVE_ASSIGNABLE);
        assert_eq!(
            resolve_exchange(&full, SwapPolicy::OverrideSuffices),
            Resolution::Resolved(LookupSource::GenericFallback)
        );
    }
}
