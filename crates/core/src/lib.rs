//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod types;
pub mod validation;
