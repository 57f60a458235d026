//! Tagged predicate definitions.

use crate::exchange::SwapPolicy;
use crate::facts::Fact;

/// How a named predicate is computed.
///
/// Composite entries reference other predicates by name; the reference
/// graph is validated for acyclicity when the catalog is sealed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PredicateDef {
    /// Backed directly by one atomic fact, no further composition.
    Atomic(Fact),
    /// Conjunction: true iff every referenced predicate is true.
    All(Vec<String>),
    /// Resolved through the exchange customization point under the given
    /// policy.
    CustomizationPoint(SwapPolicy),
}
