//! Probing atomic facts on concrete types.
//!
//! `probe!(T)` resolves on concrete types only; the `Introspect` derive
//! carries facts into generic contexts.

use pretty_assertions::assert_eq;
use typereq::{Exchange, Fact, FactSet, FactSheet, Introspect, NULL, fact_sheet, probe};

// =============================================================================
// Std types
// =============================================================================

#[test]
fn i32_holds_every_fact_but_null_and_exchange() {
    let expected = FactSet::all()
        .difference(FactSet::NULL_EQUALITY)
        .difference(FactSet::EXCHANGE_OVERRIDE);
    assert_eq!(probe!(i32), expected);
}

#[test]
fn string_is_copyable_but_not_trivial() {
    let facts = probe!(String);
    assert!(facts.contains(FactSet::DEFAULT_CONSTRUCTIBLE));
    assert!(facts.contains(FactSet::COPY_CONSTRUCTIBLE | FactSet::COPY_ASSIGNABLE));
    assert!(facts.contains(FactSet::EQUALITY | FactSet::ORDERING));
    assert!(!facts.contains(FactSet::TRIVIALLY_COPYABLE));
    assert!(!facts.contains(FactSet::TRIVIAL));
    assert!(!facts.contains(FactSet::STANDARD_LAYOUT));
    assert!(!facts.contains(FactSet::NULL_EQUALITY));
}

#[test]
fn f64_orders_but_is_not_an_equivalence() {
    let facts = probe!(f64);
    assert!(facts.contains(FactSet::ORDERING));
    assert!(facts.contains(FactSet::TRIVIALLY_COPYABLE | FactSet::TRIVIAL));
    assert!(!facts.contains(FactSet::EQUALITY));
}

#[test]
fn every_probed_type_carries_the_sized_baseline() {
    assert!(probe!(String).contains(FactSet::SIZED_BASELINE));
    assert!(probe!(Vec<u8>).contains(FactSet::SIZED_BASELINE));
    assert!(probe!(f64).contains(FactSet::SIZED_BASELINE));
}

// =============================================================================
// Null testability
// =============================================================================

#[test]
fn options_and_raw_pointers_are_null_testable() {
    assert!(probe!(Option<u32>).contains(FactSet::NULL_EQUALITY));
    assert!(probe!(Option<&str>).contains(FactSet::NULL_EQUALITY));
    assert!(probe!(*const u8).contains(FactSet::NULL_EQUALITY));
    assert!(probe!(*mut u8).contains(FactSet::NULL_EQUALITY));
    assert!(!probe!(u32).contains(FactSet::NULL_EQUALITY));
}

#[test]
fn null_sentinel_comparisons() {
    assert!(None::<u32> == NULL);
    assert!(Some(1u32) != NULL);

    let dangling: *const u8 = core::ptr::null();
    assert!(dangling == NULL);
}

#[test]
fn raw_pointers_lack_default_construction() {
    let facts = probe!(*const u8);
    assert!(!facts.contains(FactSet::DEFAULT_CONSTRUCTIBLE));
    assert!(facts.contains(FactSet::TRIVIALLY_COPYABLE));
    assert!(facts.contains(FactSet::EQUALITY | FactSet::ORDERING));
}

// =============================================================================
// User types and the exchange override
// =============================================================================

#[allow(dead_code)]
#[derive(Clone, Default, PartialEq, Eq)]
struct Token(u32);

#[allow(dead_code)]
struct Buffered(Vec<u8>);

impl Exchange for Buffered {
    fn exchange(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.0, &mut other.0);
    }
}

#[test]
fn user_type_facts_follow_its_impls() {
    let facts = probe!(Token);
    assert!(facts.contains(FactSet::DEFAULT_CONSTRUCTIBLE | FactSet::EQUALITY));
    assert!(facts.contains(FactSet::COPY_CONSTRUCTIBLE | FactSet::COPY_ASSIGNABLE));
    assert!(!facts.contains(FactSet::ORDERING));
    assert!(!facts.contains(FactSet::EXCHANGE_OVERRIDE));
}

#[test]
fn exchange_impl_is_probed_as_an_override() {
    let facts = probe!(Buffered);
    assert!(facts.contains(FactSet::EXCHANGE_OVERRIDE));
    assert!(!facts.contains(FactSet::COPY_CONSTRUCTIBLE));
}

// =============================================================================
// Generic contexts via the derive
// =============================================================================

#[allow(dead_code)]
#[derive(Clone, Default, PartialEq, Eq, Introspect)]
struct Badge(u64);

fn sheet_of<T: Introspect>() -> FactSheet {
    FactSheet::of::<T>()
}

#[test]
fn derive_freezes_facts_for_generic_contexts() {
    let sheet = sheet_of::<Badge>();
    assert!(sheet.has(Fact::DefaultConstructible));
    assert!(sheet.has(Fact::CopyConstructible));
    assert!(sheet.has(Fact::Equality));
    assert!(!sheet.has(Fact::Ordering));
    assert_eq!(Badge::FACTS, probe!(Badge));
}

#[test]
fn fact_sheet_labels_use_the_type_name() {
    let sheet = fact_sheet!(String);
    assert!(sheet.label().contains("String"));
    assert_eq!(sheet.facts(), probe!(String));
}
