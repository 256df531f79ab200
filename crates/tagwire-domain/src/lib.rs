//! # tagwire Domain
//!
//! Core types for the tag-based wiring engine: the values exchanged between
//! a component registry and consumer wiring targets, the ports both sides
//! implement, and the error taxonomy.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Component ids, tags, handles, collections, directives |
//! | [`ports`] | Registry and wiring target traits |
//! | [`error`] | Error type and `Result` alias |
//! | [`constants`] | Tag and attribute names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
