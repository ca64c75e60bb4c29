//! # class2ff Core Library
//!
//! Force-field term resolution and bonded topology synthesis for class2
//! (COMPASS-style) potentials.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that parsing, resolution and
//! orchestration stay separately testable.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`ConnectivityGraph`, interaction
//!   terms, `TypeKey`), the canonical form normalizer, the per-run `ForcefieldConfig`, the
//!   parameter library parser, the connectivity file readers and the topology enumerator.
//!
//! - **[`engine`]: The Logic Core.** The tiered parameter `Resolver`, the cross-term
//!   `Composer`, the run-scoped `MissingSet` and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together: a connectivity
//!   graph plus a parsed library in, a fully parameterized topology plus a missing-parameter
//!   report out.

pub mod core;
pub mod engine;
pub mod workflows;
