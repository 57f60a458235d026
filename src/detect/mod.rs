//! # Layer 1: Atomic fact probing
//!
//! Resolves the atomic facts about a concrete Rust type directly from the
//! trait system, at compile time, with no runtime cost.
//!
//! ## Public API
//!
//! Use `fact_sheet!` for a ready-to-evaluate [`FactSheet`](crate::FactSheet),
//! or `probe!` for the raw [`FactSet`](crate::FactSet):
//!
//! ```ignore
//! use typereq::{fact_sheet, probe, FactSet};
//!
//! let sheet = fact_sheet!(String);
//! assert!(probe!(i32).contains(FactSet::TRIVIALLY_COPYABLE));
//! ```
//!
//! ## Probed witnesses
//!
//! `Default`, `Clone`, `Copy`, `Eq`, `PartialOrd`, `PartialEq<Null>`,
//! `Trivial`, `StandardLayout`, `Exchange`. Move-constructibility,
//! move-assignability and destructibility are always set: every sized Rust
//! value has them.
//!
//! ## Limitation
//!
//! Probing only resolves on **concrete types** known at the call site. In
//! generic contexts, bound on [`Introspect`](crate::Introspect) and use
//! `#[derive(Introspect)]` at the type's definition site instead.

pub mod autoref;
pub mod markers;

pub use autoref::{
    CloneFallback, CopyFallback, DefaultFallback, EqFallback, ExchangeProbeFallback,
    NullEqFallback, PartialOrdFallback, Probe, StandardLayoutFallback, TrivialFallback,
};
pub use markers::{NULL, Null, StandardLayout, Trivial};

/// Probe a concrete type's atomic facts into a [`FactSet`](crate::FactSet).
///
/// Const-evaluable, so it can back an associated const (this is what
/// `#[derive(Introspect)]` expands to). Unsupported shapes resolve to
/// absent facts, never an error.
#[macro_export]
macro_rules! probe {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{
            CloneFallback as _, CopyFallback as _, DefaultFallback as _, EqFallback as _,
            ExchangeProbeFallback as _, NullEqFallback as _, PartialOrdFallback as _,
            StandardLayoutFallback as _, TrivialFallback as _,
        };
        $crate::FactSet::SIZED_BASELINE
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_DEFAULT,
                $crate::FactSet::DEFAULT_CONSTRUCTIBLE,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_CLONE,
                $crate::FactSet::COPY_CONSTRUCTIBLE.union($crate::FactSet::COPY_ASSIGNABLE),
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_COPY,
                $crate::FactSet::TRIVIALLY_COPYABLE,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_EQ,
                $crate::FactSet::EQUALITY,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_PARTIALORD,
                $crate::FactSet::ORDERING,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_NULL_EQ,
                $crate::FactSet::NULL_EQUALITY,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_TRIVIAL,
                $crate::FactSet::TRIVIAL,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_STANDARD_LAYOUT,
                $crate::FactSet::STANDARD_LAYOUT,
            ))
            .union($crate::FactSet::when(
                $crate::detect::Probe::<$T>::IS_EXCHANGE,
                $crate::FactSet::EXCHANGE_OVERRIDE,
            ))
    }};
}

/// Probe a concrete type into a labelled [`FactSheet`](crate::FactSheet).
#[macro_export]
macro_rules! fact_sheet {
    ($T:ty) => {
        $crate::FactSheet::new(::core::any::type_name::<$T>(), $crate::probe!($T))
    };
}
