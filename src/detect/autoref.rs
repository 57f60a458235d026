//! Autoref-based fact probing machinery.
//!
//! Implements the "Inherent Const Fallback" pattern for compile-time trait
//! detection on concrete types.
//!
//! ## How it works
//!
//! For each witness trait W:
//! 1. Define a fallback trait with `const IS_W: bool = false`
//! 2. Implement the fallback for `Probe<T>` for all T
//! 3. Implement an inherent const `IS_W = true` for `Probe<T>` where `T: W`
//!
//! When resolving `Probe::<Concrete>::IS_W`, the compiler:
//! - If `Concrete: W`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site. It does
//! NOT work in generic contexts like `fn foo<T>()`; use
//! `#[derive(Introspect)]` there.

use core::marker::PhantomData;

use super::markers::{Null, StandardLayout, Trivial};
use crate::exchange::Exchange;

/// Probing wrapper type.
#[doc(hidden)]
pub struct Probe<T>(PhantomData<T>);

// =============================================================================
// Std trait probes (generated)
// =============================================================================

/// Generate fallback trait + inherent const for a witness trait.
macro_rules! impl_probe {
    ($Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Trait Fallback>] { const [<IS_ $Trait:upper>]: bool = false; }
            impl<T> [<$Trait Fallback>] for Probe<T> {}
            impl<T: $Trait> Probe<T> { pub const [<IS_ $Trait:upper>]: bool = true; }
        }
    };
}

impl_probe!(Default);
impl_probe!(Clone);
impl_probe!(Copy);
impl_probe!(Eq);
impl_probe!(PartialOrd);

// =============================================================================
// Crate trait probes (hand-written: bounds that are not bare paths)
// =============================================================================

#[doc(hidden)]
pub trait NullEqFallback {
    const IS_NULL_EQ: bool = false;
}
impl<T> NullEqFallback for Probe<T> {}
impl<T: PartialEq<Null>> Probe<T> {
    pub const IS_NULL_EQ: bool = true;
}

#[doc(hidden)]
pub trait ExchangeProbeFallback {
    const IS_EXCHANGE: bool = false;
}
impl<T> ExchangeProbeFallback for Probe<T> {}
impl<T: Exchange> Probe<T> {
    pub const IS_EXCHANGE: bool = true;
}

#[doc(hidden)]
pub trait TrivialFallback {
    const IS_TRIVIAL: bool = false;
}
impl<T> TrivialFallback for Probe<T> {}
impl<T: Trivial> Probe<T> {
    pub const IS_TRIVIAL: bool = true;
}

#[doc(hidden)]
pub trait StandardLayoutFallback {
    const IS_STANDARD_LAYOUT: bool = false;
}
impl<T> StandardLayoutFallback for Probe<T> {}
impl<T: StandardLayout> Probe<T> {
    pub const IS_STANDARD_LAYOUT: bool = true;
}
