//! Koi Pond - core types for a pond/card browser game
//!
//! Core modules:
//! - `vector`: Mutable 2D vector with chaining operations
//! - `cards`: Card slot requirement table
//! - `palette`: Shared palette color indices

pub mod cards;
pub mod error;
pub mod palette;
pub mod vector;

pub use cards::{CARD_REQUIREMENTS, CardRequirement, RequirementTable, SlotRule};
pub use error::{Error, Result};
pub use palette::PaletteIndex;
pub use vector::Vector2;
