//! # Layer 3: Composite predicate catalog
//!
//! Named requirements assembled as conjunctions of atomic predicates and
//! the exchange customization point, validated once at seal time and
//! evaluated on demand against [`FactSheet`](crate::FactSheet)s.
//!
//! ```ignore
//! use typereq::{fact_sheet, Catalog, SwapPolicy, catalog::names};
//!
//! let catalog = Catalog::named_requirements(SwapPolicy::OverrideSuffices);
//! let sheet = fact_sheet!(Option<u32>);
//! assert!(catalog.evaluate(names::NULLABLE_POINTER, &sheet)?);
//! # Ok::<(), typereq::DefinitionError>(())
//! ```
//!
//! Custom catalogs go through [`CatalogBuilder`]; definition errors
//! (duplicates, unknown references, cycles) surface when the catalog is
//! sealed, not when it is queried.

pub mod builder;
pub mod evaluate;
pub mod predicate;

#[cfg(feature = "cache")]
pub mod cache;

pub use builder::CatalogBuilder;
pub use evaluate::Catalog;
pub use predicate::PredicateDef;

#[cfg(feature = "cache")]
pub use cache::CachedCatalog;

/// Canonical predicate names, in catalog registration order.
pub mod names {
    pub const DEFAULT_CONSTRUCTIBLE: &str = "DefaultConstructible";
    pub const MOVE_CONSTRUCTIBLE: &str = "MoveConstructible";
    pub const COPY_CONSTRUCTIBLE: &str = "CopyConstructible";
    pub const MOVE_ASSIGNABLE: &str = "MoveAssignable";
    pub const COPY_ASSIGNABLE: &str = "CopyAssignable";
    pub const DESTRUCTIBLE: &str = "Destructible";
    pub const TRIVIALLY_COPYABLE: &str = "TriviallyCopyable";
    pub const TRIVIAL_TYPE: &str = "TrivialType";
    pub const STANDARD_LAYOUT_TYPE: &str = "StandardLayoutType";
    pub const POD_TYPE: &str = "PODType";
    pub const NULL_TESTABLE: &str = "NullTestable";
    pub const EQUALITY_COMPARABLE: &str = "EqualityComparable";
    pub const LESS_THAN_COMPARABLE: &str = "LessThanComparable";
    pub const SWAPPABLE: &str = "Swappable";
    pub const NULLABLE_POINTER: &str = "NullablePointer";
}
