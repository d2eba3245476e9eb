//! Common data structures shared by the library and the host binary.
//!
//! # Data Structures
//!
//! - `CustomError` - Free-form startup error carrying a message

/// Common data structures.
pub mod structs;

/// Implementation blocks for common types.
pub mod impls;
