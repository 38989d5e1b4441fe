//! Sheet layout computation for button printing.
//!
//! Packs copies of one placed image onto a paper sheet, choosing between a
//! rectangular grid bounded by the printable area and a hex-brick pattern
//! centered on the full page. Pure geometry — positions and sizes out,
//! no pixel operations.
//!
//! # Example
//!
//! ```
//! use pinlayout::{ImagePlacement, SourceImage, catalog, sheet};
//!
//! let size = catalog::lookup("1.25").unwrap();
//! let placement = ImagePlacement::new(SourceImage::new(800, 600), size);
//! let layout = sheet::generate_layout(&placement, &sheet::US_LETTER).unwrap();
//!
//! // 4 columns × 5 rows of 1.25" buttons fit on US Letter.
//! assert_eq!(layout.grid.total, 20);
//! assert_eq!(layout.buttons.len(), 20);
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::catalog::{ButtonSize, PackingStrategy};
use crate::placement::ImagePlacement;

/// Center-to-center slack between neighboring hex-packed buttons, in inches.
const HEX_GAP: f64 = 0.2;

/// Rows a hex sheet falls back to when the size declares no cap.
const HEX_DEFAULT_ROWS: u32 = 4;

/// Paper sheet dimensions and unprintable border, in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaperDefinition {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Unprintable border at the top edge.
    pub margin_top: f64,
    /// Unprintable border at the right edge.
    pub margin_right: f64,
    /// Unprintable border at the bottom edge.
    pub margin_bottom: f64,
    /// Unprintable border at the left edge.
    pub margin_left: f64,
}

impl PaperDefinition {
    /// Create a sheet with the same margin on all four edges.
    pub const fn with_uniform_margins(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin_top: margin,
            margin_right: margin,
            margin_bottom: margin,
            margin_left: margin,
        }
    }

    /// Width of the printable area. Not guaranteed positive for degenerate
    /// margin combinations.
    pub fn printable_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height of the printable area.
    pub fn printable_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// US Letter with half-inch margins — the built-in sheet definition.
pub const US_LETTER: PaperDefinition = PaperDefinition::with_uniform_margins(8.5, 11.0, 0.5);

/// Button capacity of a sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ButtonGrid {
    /// Instances per row. For hex layouts this is the widest row.
    pub columns: u32,
    /// Rows of instances, after any `max_rows` clamp.
    pub rows: u32,
    /// Placed instances: `columns × rows` for grid, the sum of the
    /// alternating row counts for hex.
    pub total: u32,
    /// Strategy the counts were computed under.
    pub strategy: PackingStrategy,
}

/// One button instance on the sheet.
///
/// `x`/`y` are the physical-inch top-left corner of the instance's bounding
/// square on the page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedButton {
    pub x: f64,
    pub y: f64,
}

/// A computed print sheet: one design tiled across every position.
///
/// The placement is stored once — every placed button renders the same
/// image, scale, and offset. Computed fresh per request and immutable once
/// returned.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintLayout {
    /// The sheet the layout was computed for.
    pub paper: PaperDefinition,
    /// The button template, with the physical diameters a renderer draws.
    pub button: ButtonSize,
    /// Capacity summary.
    pub grid: ButtonGrid,
    /// The design tiled into every cell.
    pub placement: ImagePlacement,
    /// Placed instances in row-major order.
    pub buttons: Vec<PlacedButton>,
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Source image has zero width or height.
    ZeroImageDimension,
    /// Placement scale is zero, negative, or not finite.
    NonPositiveScale,
}

/// Compute the print layout for a placement on a sheet.
///
/// Dispatches on the button size's packing strategy. A sheet too small for
/// even one button is not an error — the layout comes back with an empty
/// button list and callers surface "nothing fits" themselves.
pub fn generate_layout(
    placement: &ImagePlacement,
    paper: &PaperDefinition,
) -> Result<PrintLayout, LayoutError> {
    if placement.image.width == 0 || placement.image.height == 0 {
        return Err(LayoutError::ZeroImageDimension);
    }
    if !placement.scale.is_finite() || placement.scale <= 0.0 {
        return Err(LayoutError::NonPositiveScale);
    }

    Ok(match placement.size.strategy {
        PackingStrategy::Grid => grid_layout(placement, paper),
        PackingStrategy::Hex => hex_layout(placement, paper),
    })
}

/// Sheet capacity for a grid-strategy size, without placing buttons.
///
/// Shares its arithmetic with [`generate_layout`]'s grid path so UI copy
/// like "20 per page" always matches the rendered sheet. `columns` carries
/// no meaning for hex-strategy sizes; use [`generate_layout`] for those.
pub fn calculate_grid(size: &ButtonSize, paper: &PaperDefinition) -> ButtonGrid {
    let diameter = size.cut_line_diameter;
    let columns = capacity(paper.printable_width(), diameter);
    let mut rows = capacity(paper.printable_height(), diameter);
    if let Some(cap) = size.max_rows {
        rows = rows.min(cap);
    }
    ButtonGrid {
        columns,
        rows,
        total: columns * rows,
        strategy: size.strategy,
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

/// How many diameters fit along a span. Degenerate spans yield zero.
fn capacity(span: f64, diameter: f64) -> u32 {
    let n = span / diameter;
    if n.is_finite() && n > 0.0 { n as u32 } else { 0 }
}

/// Rectangular grid: partition the printable area into equal cells and
/// center one button in each.
///
/// Centering within uniformly-sized cells rather than packing edge-to-edge
/// turns leftover space into even visual spacing.
fn grid_layout(placement: &ImagePlacement, paper: &PaperDefinition) -> PrintLayout {
    let size = placement.size;
    let grid = calculate_grid(&size, paper);

    let mut buttons = Vec::with_capacity(grid.total as usize);
    if grid.columns > 0 && grid.rows > 0 {
        let cell_width = paper.printable_width() / grid.columns as f64;
        let cell_height = paper.printable_height() / grid.rows as f64;
        let diameter = size.cut_line_diameter;
        for row in 0..grid.rows {
            for col in 0..grid.columns {
                let x = paper.margin_left + col as f64 * cell_width + (cell_width - diameter) / 2.0;
                let y = paper.margin_top + row as f64 * cell_height + (cell_height - diameter) / 2.0;
                buttons.push(PlacedButton { x, y });
            }
        }
    }

    PrintLayout {
        paper: *paper,
        button: size,
        grid,
        placement: *placement,
        buttons,
    }
}

/// Brick/honeycomb packing: alternating rows of 3 and 2 circles, each
/// 2-row offset half a step so its circles nest between the neighbors above.
///
/// Centers on the full page and ignores the margin fields, unlike the grid
/// path — the dense pattern wants the whole sheet, and edge buttons may
/// reach into the unprintable border.
fn hex_layout(placement: &ImagePlacement, paper: &PaperDefinition) -> PrintLayout {
    let size = placement.size;
    let diameter = size.cut_line_diameter;
    let step = diameter + HEX_GAP;
    let num_rows = size.max_rows.unwrap_or(HEX_DEFAULT_ROWS);
    let total: u32 = (0..num_rows).map(hex_row_count).sum();

    // A 3-button row spans two steps plus one diameter.
    let row3_width = 2.0 * step + diameter;
    let start_x3 = (paper.width - row3_width) / 2.0;
    let start_x2 = start_x3 + step / 2.0;

    // Offset rows interlock, so the vertical pitch compresses to √3/2 of
    // the in-row step.
    let row_spacing = step * num_traits::Float::sqrt(3.0_f64) / 2.0;
    let block_height = num_rows.saturating_sub(1) as f64 * row_spacing + diameter;
    let start_y = (paper.height - block_height) / 2.0;

    let mut buttons = Vec::with_capacity(total as usize);
    for row in 0..num_rows {
        let base_x = if row % 2 == 0 { start_x3 } else { start_x2 };
        let y = start_y + row as f64 * row_spacing;
        for col in 0..hex_row_count(row) {
            buttons.push(PlacedButton {
                x: base_x + col as f64 * step,
                y,
            });
        }
    }

    PrintLayout {
        paper: *paper,
        button: size,
        grid: ButtonGrid {
            columns: hex_row_count(0),
            rows: num_rows,
            total,
            strategy: PackingStrategy::Hex,
        },
        placement: *placement,
        buttons,
    }
}

/// Buttons in hex row `row`: 3 on even rows, 2 on odd.
fn hex_row_count(row: u32) -> u32 {
    if row % 2 == 0 { 3 } else { 2 }
}
