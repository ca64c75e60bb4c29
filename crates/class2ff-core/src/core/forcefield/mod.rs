//! # Force Field Module
//!
//! Everything needed to turn a textual class2 parameter library into immutable lookup
//! tables keyed by canonical atom-type tuples.
//!
//! ## Key Components
//!
//! - [`subterm`] - The declared catalogue of sub-term codes (`b`, `a`, `tor`, ...), their
//!   library headers, arities and accepted coefficient counts
//! - [`canonical`] - Canonical form normalizer for each interaction symmetry
//! - [`config`] - Per-run coefficient layout switches
//! - [`key`] - [`key::TypeKey`], the canonical lookup key
//! - [`library`] - Sectioned library parser producing [`library::ParameterLibrary`]
//!
//! ## Usage
//!
//! ```ignore
//! use class2ff::core::forcefield::library::ParameterLibrary;
//! use class2ff::core::forcefield::config::ForcefieldConfig;
//!
//! let library = ParameterLibrary::load(Path::new("compass.frc"), &ForcefieldConfig::default())?;
//! let bond = library.table(SubTerm::Bond).get(&TypeKey::from_types(&["c3", "h1"]));
//! ```

pub mod canonical;
pub mod config;
pub mod key;
pub mod library;
pub mod subterm;

#[cfg(test)]
pub(crate) mod fixtures;
