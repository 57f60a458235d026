//! # typereq
//!
//! Named-requirement registry for Rust types.
//!
//! A set of named boolean predicates, each answering "does type T support
//! requirement R?": constructibility, assignability, comparability,
//! exchangeability. Generic code consults the registry to decide whether it
//! can legally operate on a type; atomic facts resolve through the trait
//! system at compile time, and the composite layer is pure and
//! deterministic with no side effects.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Facts                                                   |
//! |  - Fact, FactSet (bitflags), FactSheet, Introspect                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probing (feature "detect")                              |
//! |  - Probe<T> autoref detection, layout markers, Null sentinel      |
//! |  - probe! / fact_sheet! / #[derive(Introspect)]                   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Exchange customization point                            |
//! |  - Exchange trait, ordered lookup sources, SwapPolicy             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Catalog                                                 |
//! |  - CatalogBuilder -> seal -> Catalog, CachedCatalog               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use typereq::{fact_sheet, Catalog, SwapPolicy, catalog::names};
//!
//! let catalog = Catalog::named_requirements(SwapPolicy::OverrideSuffices);
//!
//! let sheet = fact_sheet!(Option<u32>);
//! assert!(catalog.evaluate(names::NULLABLE_POINTER, &sheet)?);
//! assert!(catalog.evaluate(names::SWAPPABLE, &sheet)?);
//! # Ok::<(), typereq::DefinitionError>(())
//! ```
//!
//! A sealed catalog is immutable and `Send + Sync`; evaluation may run on
//! any number of threads without synchronization. Types the probe cannot
//! see (foreign semantics, hypothetical shapes) are modeled with hand-built
//! [`FactSheet`]s.

// =============================================================================
// Layer 0: Facts
// =============================================================================
pub mod facts;

// =============================================================================
// Layer 1: Probing
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 2: Exchange customization point
// =============================================================================
pub mod exchange;

// =============================================================================
// Layer 3: Catalog
// =============================================================================
pub mod catalog;

mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use catalog::{Catalog, CatalogBuilder, PredicateDef};
pub use error::DefinitionError;
pub use exchange::{Exchange, LookupSource, Resolution, SwapPolicy, resolve_exchange};
pub use facts::{Fact, FactSet, FactSheet, Introspect};

#[cfg(feature = "cache")]
pub use catalog::CachedCatalog;

#[cfg(feature = "detect")]
pub use detect::{NULL, Null, StandardLayout, Trivial};

// Derive macro: captures probe! output as `Introspect::FACTS`.
#[cfg(feature = "detect")]
pub use macros::Introspect;

/// Common items for consumers of the registry.
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogBuilder, names};
    pub use crate::error::DefinitionError;
    pub use crate::exchange::{Exchange, Resolution, SwapPolicy};
    pub use crate::facts::{Fact, FactSet, FactSheet, Introspect};

    #[cfg(feature = "detect")]
    pub use crate::detect::{NULL, Null, StandardLayout, Trivial};
    #[cfg(feature = "detect")]
    pub use macros::Introspect;
}
