//! Fact vocabulary: the atomic, directly-queryable facts about a type.
//!
//! A [`FactSheet`] is the registry's view of a type: an opaque label plus a
//! [`FactSet`] of atomic facts. The catalog never inspects values, only
//! facts. Sheets are produced by the probing layer (`fact_sheet!`,
//! `#[derive(Introspect)]`) for concrete Rust types, or built by hand to
//! model foreign or hypothetical types.

use core::any::type_name;
use std::borrow::Cow;

use bitflags::bitflags;

// =============================================================================
// FactSet
// =============================================================================

bitflags! {
    /// Set of atomic facts held by one type.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct FactSet: u16 {
        /// Zero-argument construction form exists (`T: Default`).
        const DEFAULT_CONSTRUCTIBLE = 1 << 0;
        /// Constructible by consuming a temporary of the same type.
        const MOVE_CONSTRUCTIBLE = 1 << 1;
        /// Constructible from an existing value without consuming it (`T: Clone`).
        const COPY_CONSTRUCTIBLE = 1 << 2;
        /// Assignable from a consumed temporary of the same type.
        const MOVE_ASSIGNABLE = 1 << 3;
        /// Assignable from an existing value (`Clone::clone_from`).
        const COPY_ASSIGNABLE = 1 << 4;
        /// Supports orderly teardown.
        const DESTRUCTIBLE = 1 << 5;
        /// Copy, move and destroy are bitwise-safe (`T: Copy`).
        const TRIVIALLY_COPYABLE = 1 << 6;
        /// Construction, copy, move and destroy all need no custom logic
        /// (declared via the `Trivial` marker).
        const TRIVIAL = 1 << 7;
        /// Single predictable C-compatible layout, no virtual dispatch
        /// (declared via the `StandardLayout` marker).
        const STANDARD_LAYOUT = 1 << 8;
        /// Equality test that is a full equivalence relation (`T: Eq`).
        const EQUALITY = 1 << 9;
        /// Ordering test exists (`T: PartialOrd`).
        const ORDERING = 1 << 10;
        /// Comparable against the `Null` sentinel (`T: PartialEq<Null>`).
        const NULL_EQUALITY = 1 << 11;
        /// Type-specific exchange override exists (`T: Exchange`).
        const EXCHANGE_OVERRIDE = 1 << 12;
    }
}

impl FactSet {
    /// Facts every sized Rust value carries: moves and teardown are
    /// language-level, not opt-in. Hand-built sheets may still clear these
    /// bits to model immovable or foreign semantics.
    pub const SIZED_BASELINE: Self = Self::MOVE_CONSTRUCTIBLE
        .union(Self::MOVE_ASSIGNABLE)
        .union(Self::DESTRUCTIBLE);

    /// `facts` when `cond` holds, empty otherwise. Const-friendly building
    /// block for the `probe!` macro.
    #[must_use]
    pub const fn when(cond: bool, facts: Self) -> Self {
        if cond { facts } else { Self::empty() }
    }
}

// =============================================================================
// Fact
// =============================================================================

/// One atomic fact kind. Each variant maps to a single [`FactSet`] bit;
/// atomic catalog predicates are backed by exactly one `Fact`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Fact {
    DefaultConstructible,
    MoveConstructible,
    CopyConstructible,
    MoveAssignable,
    CopyAssignable,
    Destructible,
    TriviallyCopyable,
    Trivial,
    StandardLayout,
    Equality,
    Ordering,
    NullEquality,
    ExchangeOverride,
}

impl Fact {
    /// Every fact kind, in bit order.
    pub const ALL: [Self; 13] = [
        Self::DefaultConstructible,
        Self::MoveConstructible,
        Self::CopyConstructible,
        Self::MoveAssignable,
        Self::CopyAssignable,
        Self::Destructible,
        Self::TriviallyCopyable,
        Self::Trivial,
        Self::StandardLayout,
        Self::Equality,
        Self::Ordering,
        Self::NullEquality,
        Self::ExchangeOverride,
    ];

    /// The [`FactSet`] bit backing this fact.
    #[must_use]
    pub const fn mask(self) -> FactSet {
        match self {
            Self::DefaultConstructible => FactSet::DEFAULT_CONSTRUCTIBLE,
            Self::MoveConstructible => FactSet::MOVE_CONSTRUCTIBLE,
            Self::CopyConstructible => FactSet::COPY_CONSTRUCTIBLE,
            Self::MoveAssignable => FactSet::MOVE_ASSIGNABLE,
            Self::CopyAssignable => FactSet::COPY_ASSIGNABLE,
            Self::Destructible => FactSet::DESTRUCTIBLE,
            Self::TriviallyCopyable => FactSet::TRIVIALLY_COPYABLE,
            Self::Trivial => FactSet::TRIVIAL,
            Self::StandardLayout => FactSet::STANDARD_LAYOUT,
            Self::Equality => FactSet::EQUALITY,
            Self::Ordering => FactSet::ORDERING,
            Self::NullEquality => FactSet::NULL_EQUALITY,
            Self::ExchangeOverride => FactSet::EXCHANGE_OVERRIDE,
        }
    }
}

// =============================================================================
// FactSheet
// =============================================================================

/// The registry's view of one type: a label plus its atomic facts.
///
/// Sheets are immutable value objects; `with`/`without` return adjusted
/// copies. Two sheets with equal facts evaluate identically against any
/// catalog regardless of label, which is what makes fact-keyed memoization
/// sound.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FactSheet {
    label: Cow<'static, str>,
    facts: FactSet,
}

impl FactSheet {
    /// Build a sheet by hand, e.g. to model a foreign type.
    pub fn new(label: impl Into<Cow<'static, str>>, facts: FactSet) -> Self {
        Self {
            label: label.into(),
            facts,
        }
    }

    /// Sheet for a type whose facts were captured with
    /// `#[derive(Introspect)]`. Works in generic contexts, where autoref
    /// probing does not.
    #[must_use]
    pub fn of<T: Introspect>() -> Self {
        Self {
            label: Cow::Borrowed(type_name::<T>()),
            facts: T::FACTS,
        }
    }

    /// Diagnostic label, normally the type's name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn facts(&self) -> FactSet {
        self.facts
    }

    /// Does this type hold the given atomic fact?
    #[must_use]
    pub fn has(&self, fact: Fact) -> bool {
        self.facts.contains(fact.mask())
    }

    /// Copy of this sheet with extra facts asserted.
    #[must_use]
    pub fn with(mut self, facts: FactSet) -> Self {
        self.facts |= facts;
        self
    }

    /// Copy of this sheet with facts cleared.
    #[must_use]
    pub fn without(mut self, facts: FactSet) -> Self {
        self.facts &= !facts;
        self
    }
}

// =============================================================================
// Introspect
// =============================================================================

/// Facts captured at the type's definition site as an associated const.
///
/// Autoref probing only resolves on concrete types, so generic code cannot
/// call `probe!(T)`. Deriving `Introspect` freezes the probe result where
/// the type is concrete and carries it through generic contexts as a bound:
///
/// ```ignore
/// #[derive(Clone, Default, PartialEq, Eq, Introspect)]
/// struct Token(u32);
///
/// fn report<T: Introspect>() -> FactSheet {
///     FactSheet::of::<T>()
/// }
/// ```
pub trait Introspect {
    /// Probed facts for this type.
    const FACTS: FactSet;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_masks_are_distinct_bits() {
        let mut seen = FactSet::empty();
        for fact in Fact::ALL {
            assert!(!seen.intersects(fact.mask()), "{fact:?} overlaps");
            seen |= fact.mask();
        }
        assert_eq!(seen, FactSet::all());
    }

    #[test]
    fn sheet_with_without_round_trip() {
        let sheet = FactSheet::new("T", FactSet::SIZED_BASELINE);
        assert!(sheet.has(Fact::Destructible));
        assert!(!sheet.has(Fact::Equality));

        let adjusted = sheet.clone().with(FactSet::EQUALITY);
        assert!(adjusted.has(Fact::Equality));

        let stripped = adjusted.without(FactSet::EQUALITY);
        assert_eq!(stripped.facts(), sheet.facts());
    }

    #[test]
    fn when_gates_facts() {
        assert_eq!(FactSet::when(true, FactSet::EQUALITY), FactSet::EQUALITY);
        assert_eq!(FactSet::when(false, FactSet::EQUALITY), FactSet::empty());
    }
}
