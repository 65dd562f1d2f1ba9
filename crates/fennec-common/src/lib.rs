//! Common utilities for the Fennec selector builder.
//!
//! This crate provides shared infrastructure used by the other members:
//! - **Warning System** - deduplicated, colored terminal output for
//!   behavior that is allowed but probably unintended

pub mod warning;
