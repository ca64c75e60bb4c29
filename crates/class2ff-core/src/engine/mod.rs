//! # Engine Module
//!
//! Resolution logic that turns canonical type tuples into coefficient vectors.
//!
//! ## Components
//!
//! - [`resolver`] - Tiered lookup (exact, equivalence, torsion wildcards) against a
//!   parsed library
//! - [`composer`] - Base terms plus the class2 cross terms built from several lookups
//! - [`missing`] - Run-scoped, duplicate-free record of unresolved queries
//! - [`progress`] - Phase reporting for callers that want to observe a run
//! - [`error`] - Errors surfaced when a run's inputs cannot be loaded
//!
//! An unresolved query is never an error: it yields a zero-filled placeholder and a
//! [`missing::MissingRecord`], so a run always produces a structurally complete topology.

pub mod composer;
pub mod error;
pub mod missing;
pub mod progress;
pub mod resolver;
