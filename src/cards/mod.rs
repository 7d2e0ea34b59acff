//! Card collection data
//!
//! The card book UI places cards into fixed slots; some slots only accept
//! cards whose layer composition satisfies a requirement.

pub mod requirement;

pub use requirement::{
    CARD_REQUIREMENTS, CardRequirement, FootprintMatcher, LayerFootprint, LayerId,
    PatternFootprint, RequirementTable, Row, SLOTS_PER_PAGE, SlotRule,
};
