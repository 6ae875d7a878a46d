//! Tunable drawing constants, loaded from JSON.
//!
//! The built-in defaults live in `config/default.json` and reproduce the
//! standard look: 40% selection opacity, a 100px canvas margin, highlight
//! blocks inset by one pixel and underlines raised by a sixth of the line height.

mod schema;
pub use schema::*;

mod deserializers;
