//! # osmpack Testkit
//!
//! Test utilities for osmpack.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Fixtures for building tag lists in a fresh buffer
//! - Stress helpers for large round-trips
//! - Fuzz harnesses for adopted buffer bytes
//! - Test logging setup
//!
//! ## Usage
//!
//! ```rust
//! use osmpack_testkit::prelude::*;
//!
//! let fixture = sample_tag_list();
//! assert_eq!(fixture.tags().size(), 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod logging;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::logging::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use logging::*;
pub use stress::*;
