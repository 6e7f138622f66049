//! Core value types for `OrderFlow`.
//!
//! This module provides type-safe wrappers for identifiers, color codes and
//! the closed enumerations orders are classified by.

pub mod color;
pub mod id;
pub mod status;

pub use color::{ColorSwatch, HexColor, HexColorError};
pub use id::*;
pub use status::*;
