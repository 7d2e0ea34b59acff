//! Card slot requirements
//!
//! A requirement table is a grid with one row per requirement page and one
//! column per slot. An empty cell accepts any card; a filled cell carries the
//! pattern footprint a card must satisfy. How a candidate card's footprint is
//! compared against the required one is left to a [`FootprintMatcher`]
//! supplied by the caller.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::palette::PaletteIndex;

/// Number of card slots on a page
pub const SLOTS_PER_PAGE: usize = 4;

/// One page of slot requirements
pub type Row = [Option<CardRequirement>; SLOTS_PER_PAGE];

/// Layer type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerId {
    /// The solid base layer every card has
    Base,
}

/// A layer type paired with the palette color it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerFootprint {
    pub layer: LayerId,
    pub palette: PaletteIndex,
}

impl LayerFootprint {
    pub const fn new(layer: LayerId, palette: PaletteIndex) -> Self {
        Self { layer, palette }
    }
}

/// Ordered layer composition of a card pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternFootprint {
    layers: Cow<'static, [LayerFootprint]>,
}

impl PatternFootprint {
    pub fn new(layers: Vec<LayerFootprint>) -> Self {
        Self {
            layers: Cow::Owned(layers),
        }
    }

    pub const fn from_static(layers: &'static [LayerFootprint]) -> Self {
        Self {
            layers: Cow::Borrowed(layers),
        }
    }

    /// Layers from bottom to top
    pub fn layers(&self) -> &[LayerFootprint] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// A slot requirement: the occupying card must satisfy `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRequirement {
    pub pattern: PatternFootprint,
}

impl CardRequirement {
    pub const fn new(pattern: PatternFootprint) -> Self {
        Self { pattern }
    }
}

/// What a slot accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRule<'a> {
    /// No restriction
    Any,
    /// The card must satisfy this requirement
    Requires(&'a CardRequirement),
}

/// Decides whether a candidate card footprint satisfies a required one
pub trait FootprintMatcher {
    fn matches(&self, required: &PatternFootprint, candidate: &PatternFootprint) -> bool;
}

impl<F> FootprintMatcher for F
where
    F: Fn(&PatternFootprint, &PatternFootprint) -> bool,
{
    fn matches(&self, required: &PatternFootprint, candidate: &PatternFootprint) -> bool {
        self(required, candidate)
    }
}

/// Rectangular grid of slot requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementTable {
    rows: Cow<'static, [Row]>,
}

impl RequirementTable {
    pub const fn from_static(rows: &'static [Row]) -> Self {
        Self {
            rows: Cow::Borrowed(rows),
        }
    }

    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Cow::Owned(rows),
        }
    }

    /// Parse a table from JSON: an array of pages, each an array of
    /// `SLOTS_PER_PAGE` entries that are either `null` or a requirement.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<Vec<Option<CardRequirement>>> = serde_json::from_str(json)?;

        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(row, entries)| {
                <Row>::try_from(entries).map_err(|entries| Error::RaggedRow {
                    row,
                    len: entries.len(),
                    expected: SLOTS_PER_PAGE,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!("Loaded requirement table ({} pages)", rows.len());
        Ok(Self::new(rows))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Rule for a slot, or `None` when `(page, slot)` lies outside the grid
    pub fn get(&self, page: usize, slot: usize) -> Option<SlotRule<'_>> {
        let entry = self.rows.get(page)?.get(slot)?;
        Some(match entry {
            Some(requirement) => SlotRule::Requires(requirement),
            None => SlotRule::Any,
        })
    }

    /// Whether a card with footprint `candidate` may occupy `(page, slot)`
    ///
    /// Slots outside the grid carry no requirement.
    pub fn accepts<M>(
        &self,
        page: usize,
        slot: usize,
        candidate: &PatternFootprint,
        matcher: &M,
    ) -> bool
    where
        M: FootprintMatcher + ?Sized,
    {
        match self.get(page, slot) {
            Some(SlotRule::Requires(requirement)) => {
                matcher.matches(&requirement.pattern, candidate)
            }
            Some(SlotRule::Any) | None => true,
        }
    }
}

const ORANGE_BASE: &[LayerFootprint] = &[LayerFootprint::new(LayerId::Base, PaletteIndex::Orange)];
const GOLD_BASE: &[LayerFootprint] = &[LayerFootprint::new(LayerId::Base, PaletteIndex::Gold)];
const WHITE_BASE: &[LayerFootprint] = &[LayerFootprint::new(LayerId::Base, PaletteIndex::White)];
const BLACK_BASE: &[LayerFootprint] = &[LayerFootprint::new(LayerId::Base, PaletteIndex::Black)];

const fn requires(layers: &'static [LayerFootprint]) -> Option<CardRequirement> {
    Some(CardRequirement::new(PatternFootprint::from_static(layers)))
}

const OPEN_ROW: Row = [None, None, None, None];
const BASE_COLOR_ROW: Row = [
    requires(ORANGE_BASE),
    requires(GOLD_BASE),
    requires(WHITE_BASE),
    requires(BLACK_BASE),
];

const BUILTIN_ROWS: &[Row] = &[OPEN_ROW, BASE_COLOR_ROW, BASE_COLOR_ROW, BASE_COLOR_ROW];

/// Slot requirements applied to slots on even pages of the card book
pub static CARD_REQUIREMENTS: RequirementTable = RequirementTable::from_static(BUILTIN_ROWS);

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMN_COLORS: [PaletteIndex; SLOTS_PER_PAGE] = [
        PaletteIndex::Orange,
        PaletteIndex::Gold,
        PaletteIndex::White,
        PaletteIndex::Black,
    ];

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn base(color: PaletteIndex) -> PatternFootprint {
        PatternFootprint::new(vec![LayerFootprint::new(LayerId::Base, color)])
    }

    /// Test-only predicate; the real one lives with the card UI
    fn exact(required: &PatternFootprint, candidate: &PatternFootprint) -> bool {
        required == candidate
    }

    #[test]
    fn test_builtin_shape() {
        assert_eq!(CARD_REQUIREMENTS.len(), 4);
        for row in CARD_REQUIREMENTS.iter_rows() {
            assert_eq!(row.len(), SLOTS_PER_PAGE);
        }
    }

    #[test]
    fn test_first_page_is_open() {
        for slot in 0..SLOTS_PER_PAGE {
            assert_eq!(CARD_REQUIREMENTS.get(0, slot), Some(SlotRule::Any));
        }
    }

    #[test]
    fn test_base_color_pages() {
        for page in 1..4 {
            for (slot, color) in COLUMN_COLORS.iter().enumerate() {
                let Some(SlotRule::Requires(requirement)) = CARD_REQUIREMENTS.get(page, slot)
                else {
                    panic!("page {page} slot {slot} should carry a requirement");
                };
                assert_eq!(
                    requirement.pattern.layers(),
                    &[LayerFootprint::new(LayerId::Base, *color)]
                );
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(CARD_REQUIREMENTS.get(4, 0), None);
        assert_eq!(CARD_REQUIREMENTS.get(0, SLOTS_PER_PAGE), None);
    }

    #[test]
    fn test_accepts_defers_to_matcher() {
        let gold = base(PaletteIndex::Gold);
        let black = base(PaletteIndex::Black);

        // Open page takes anything, whatever the matcher says
        let reject_all = |_: &PatternFootprint, _: &PatternFootprint| false;
        assert!(CARD_REQUIREMENTS.accepts(0, 1, &black, &reject_all));

        assert!(CARD_REQUIREMENTS.accepts(2, 1, &gold, &exact));
        assert!(!CARD_REQUIREMENTS.accepts(2, 1, &black, &exact));
        assert!(CARD_REQUIREMENTS.accepts(9, 9, &black, &exact));
    }

    #[test]
    fn test_matcher_sees_required_then_candidate() {
        let candidate = base(PaletteIndex::White);
        let matcher = |required: &PatternFootprint, seen: &PatternFootprint| {
            required.layers()[0].palette == PaletteIndex::White && seen == &base(PaletteIndex::White)
        };
        assert!(CARD_REQUIREMENTS.accepts(3, 2, &candidate, &matcher));
        assert!(!CARD_REQUIREMENTS.accepts(3, 0, &candidate, &matcher));
    }

    #[test]
    fn test_json_roundtrip_builtin() {
        init_logger();
        let json = CARD_REQUIREMENTS.to_json().unwrap();
        let loaded = RequirementTable::from_json(&json).unwrap();
        assert_eq!(loaded, CARD_REQUIREMENTS);
    }

    #[test]
    fn test_json_format() {
        init_logger();
        let json = r#"[
            [null, {"pattern": [{"layer": "BASE", "palette": "GOLD"}]}, null, null]
        ]"#;
        let table = RequirementTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, 0), Some(SlotRule::Any));
        let Some(SlotRule::Requires(requirement)) = table.get(0, 1) else {
            panic!("slot 1 should carry a requirement");
        };
        assert_eq!(requirement.pattern, base(PaletteIndex::Gold));
    }

    #[test]
    fn test_json_rejects_ragged_rows() {
        init_logger();
        let json = "[[null, null, null, null], [null, null, null]]";
        match RequirementTable::from_json(json) {
            Err(Error::RaggedRow { row, len, expected }) => {
                assert_eq!((row, len, expected), (1, 3, SLOTS_PER_PAGE));
            }
            other => panic!("expected ragged row error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_rejects_unknown_color() {
        let json = r#"[[{"pattern": [{"layer": "BASE", "palette": "TEAL"}]}, null, null, null]]"#;
        assert!(matches!(RequirementTable::from_json(json), Err(Error::Json(_))));
    }
}
