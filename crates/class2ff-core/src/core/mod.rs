//! # Core Module
//!
//! The stateless foundation of class2ff: everything here is either plain data or a pure
//! function over plain data.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Connectivity graph and interaction terms
//! - **Force Field Library** ([`forcefield`]) - Sub-term catalogue, canonical forms, type keys
//!   and the sectioned parameter library parser
//! - **File I/O** ([`io`]) - Connectivity graph readers (BGF, TOML)
//! - **Topology** ([`topology`]) - Term enumeration and the ordered type registry

pub mod forcefield;
pub mod io;
pub mod models;
pub mod topology;
