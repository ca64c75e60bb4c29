//! # Topology Module
//!
//! Derives the bonded interaction terms of a molecule from its connectivity alone and
//! numbers the distinct type tuples they carry.
//!
//! ## Key Components
//!
//! - [`enumerate`] - Bond, angle, dihedral and improper enumeration over a
//!   [`ConnectivityGraph`](crate::core::models::graph::ConnectivityGraph)
//! - [`registry`] - Append-only [`registry::TypeRegistry`] giving each canonical type tuple
//!   a stable, first-seen index
//!
//! ## Usage
//!
//! ```ignore
//! use class2ff::core::topology::enumerate::enumerate;
//!
//! let terms = enumerate(&graph);
//! println!("{} angles", terms.angles.len());
//! ```

pub mod enumerate;
pub mod registry;
