//! # Workflows Module
//!
//! End-to-end entry points that tie the [`core`](crate::core) parsers and the
//! [`engine`](crate::engine) resolution logic together.
//!
//! - **Build Workflow** ([`build`]) - Connectivity graph plus parameter library in, fully
//!   parameterized topology and missing-parameter report out.

pub mod build;
