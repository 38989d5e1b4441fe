//! Button size catalog.
//!
//! A closed, hardcoded table of the physical button templates the press
//! supports. Entries are immutable and looked up by string key; adding a
//! size means adding an entry, not changing the lookup contract.

/// How instances of a button size pack onto a sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PackingStrategy {
    /// Rectangular rows and columns within the printable area.
    Grid,
    /// Brick/honeycomb rows (3-2-3-2…) interlocking on the full page.
    Hex,
}

/// A physical button template.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ButtonSize {
    /// Catalog key and display label.
    pub name: &'static str,
    /// Diameter the press cuts at, in inches. Artwork outside this circle
    /// is discarded.
    pub cut_line_diameter: f64,
    /// Safe-area diameter, in inches. Always ≤ the cut line; content inside
    /// stays visible after the pin-back mechanism folds the edge under.
    pub content_guide_diameter: f64,
    /// Sheet packing strategy.
    pub strategy: PackingStrategy,
    /// Cap on vertical repetition, regardless of how many rows would
    /// geometrically fit.
    pub max_rows: Option<u32>,
}

/// Catalog lookup error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CatalogError<'a> {
    /// No catalog entry matches the requested key.
    UnknownSize(&'a str),
}

const CATALOG: [ButtonSize; 2] = [
    ButtonSize {
        name: "1.25",
        cut_line_diameter: 1.772,
        content_guide_diameter: 1.156,
        strategy: PackingStrategy::Grid,
        max_rows: Some(5),
    },
    ButtonSize {
        name: "2.25",
        cut_line_diameter: 2.625,
        content_guide_diameter: 2.063,
        strategy: PackingStrategy::Hex,
        max_rows: Some(4),
    },
];

/// Look up a button size by its catalog key.
///
/// There is no fallback size — callers must not proceed without a valid
/// selection.
pub fn lookup(key: &str) -> Result<ButtonSize, CatalogError<'_>> {
    CATALOG
        .iter()
        .find(|size| size.name == key)
        .copied()
        .ok_or(CatalogError::UnknownSize(key))
}

/// Every size the catalog offers, for pickers and size menus.
pub fn all() -> &'static [ButtonSize] {
    &CATALOG
}
