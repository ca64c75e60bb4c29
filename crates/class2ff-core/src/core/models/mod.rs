//! # Core Models Module
//!
//! Data structures for the molecular input and the interaction terms derived from it.
//!
//! - [`graph`] - Atoms with a force-field type and an ordered neighbor list
//! - [`term`] - Interaction kinds and the index tuples enumerated from a graph
//! - [`topology`] - Per-type coefficient records of a parameterized topology

pub mod graph;
pub mod term;
pub mod topology;
