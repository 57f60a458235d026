//! Definition errors surfaced when a catalog is built or queried by name.
//!
//! A predicate evaluating to `false` is a result, not an error; the only
//! error class is a broken definition.

use thiserror::Error;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum DefinitionError {
    /// Two registrations used the same predicate name.
    #[error("duplicate predicate name `{0}`")]
    DuplicateName(String),

    /// A composite references a name that was never registered.
    #[error("predicate `{referrer}` references unknown predicate `{name}`")]
    UnknownReference { referrer: String, name: String },

    /// An evaluation or introspection call used an unregistered name.
    #[error("unknown predicate `{0}`")]
    UnknownPredicate(String),

    /// A composite depends on itself, directly or transitively.
    #[error("cyclic predicate dependency: {}", .path.join(" -> "))]
    CyclicDependency { path: Vec<String> },
}
