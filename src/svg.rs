//! SVG visualization of a computed print sheet.
//!
//! Renders the page outline, the printable region (grid strategy only —
//! hex packing ignores margins and the preview mirrors that), and every
//! placed button as a dashed cut-line circle with a solid safe-area circle
//! inside it. Diagnostic output for previews and docs; the print renderer
//! proper is a downstream consumer of [`PrintLayout`] itself.
//!
//! # Example
//!
//! ```
//! use pinlayout::{ImagePlacement, SourceImage, catalog, sheet, svg};
//!
//! let size = catalog::lookup("2.25").unwrap();
//! let placement = ImagePlacement::new(SourceImage::new(800, 600), size);
//! let layout = sheet::generate_layout(&placement, &sheet::US_LETTER).unwrap();
//!
//! let doc = svg::render_sheet_svg(&layout);
//! assert!(doc.starts_with("<svg"));
//! ```

use crate::catalog::PackingStrategy;
use crate::sheet::PrintLayout;
use crate::units::PIXELS_PER_INCH;

use std::fmt::Write as _;

/// Stroke width for outlines, in px.
const STROKE_W: f64 = 1.5;
/// Dash pattern for cut-line circles and the printable-region rect.
const DASH: &str = "6 4";
/// Caption text size, in px.
const CAPTION_PX: f64 = 14.0;

/// Render a complete SVG document for a print layout, at 96 px per inch.
pub fn render_sheet_svg(layout: &PrintLayout) -> String {
    let scale = PIXELS_PER_INCH;
    let page_w = layout.paper.width * scale;
    let page_h = layout.paper.height * scale;

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{page_w:.0}" height="{page_h:.0}" viewBox="0 0 {page_w:.0} {page_h:.0}">"#
    );
    push_rect(&mut svg, 0.0, 0.0, page_w, page_h, "#ffffff", "#333333", None);

    // The hex pattern centers on the full page; drawing margins under it
    // would suggest a boundary the algorithm never consults.
    if layout.grid.strategy == PackingStrategy::Grid {
        push_rect(
            &mut svg,
            layout.paper.margin_left * scale,
            layout.paper.margin_top * scale,
            layout.paper.printable_width() * scale,
            layout.paper.printable_height() * scale,
            "none",
            "#bbbbbb",
            Some(DASH),
        );
    }

    let cut_r = layout.button.cut_line_diameter / 2.0 * scale;
    let guide_r = layout.button.content_guide_diameter / 2.0 * scale;
    for button in &layout.buttons {
        let cx = (button.x + layout.button.cut_line_diameter / 2.0) * scale;
        let cy = (button.y + layout.button.cut_line_diameter / 2.0) * scale;
        push_circle(&mut svg, cx, cy, cut_r, Some(DASH));
        push_circle(&mut svg, cx, cy, guide_r, None);
    }

    let _ = write!(
        svg,
        r##"<text x="{x:.1}" y="{y:.1}" font-size="{CAPTION_PX}" fill="#333333">{total} × {name}&quot; buttons</text>"##,
        x = 8.0,
        y = page_h - 8.0,
        total = layout.grid.total,
        name = layout.button.name,
    );
    svg.push_str("</svg>");
    svg
}

fn push_rect(
    svg: &mut String,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: &str,
    stroke: &str,
    dash: Option<&str>,
) {
    let _ = write!(
        svg,
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" fill="{fill}" stroke="{stroke}" stroke-width="{STROKE_W}""#
    );
    if let Some(dash) = dash {
        let _ = write!(svg, r#" stroke-dasharray="{dash}""#);
    }
    svg.push_str("/>");
}

fn push_circle(svg: &mut String, cx: f64, cy: f64, r: f64, dash: Option<&str>) {
    let _ = write!(
        svg,
        r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="#333333" stroke-width="{STROKE_W}""##
    );
    if let Some(dash) = dash {
        let _ = write!(svg, r#" stroke-dasharray="{dash}""#);
    }
    svg.push_str("/>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::placement::{ImagePlacement, SourceImage};
    use crate::sheet::{US_LETTER, generate_layout};

    fn letter_svg(key: &str) -> (PrintLayout, String) {
        let size = catalog::lookup(key).unwrap();
        let placement = ImagePlacement::new(SourceImage::new(800, 600), size);
        let layout = generate_layout(&placement, &US_LETTER).unwrap();
        let doc = render_sheet_svg(&layout);
        (layout, doc)
    }

    #[test]
    fn document_is_page_sized() {
        let (_, doc) = letter_svg("1.25");
        // 8.5in × 11in at 96 px/in.
        assert!(doc.contains(r#"width="816""#));
        assert!(doc.contains(r#"height="1056""#));
        assert!(doc.ends_with("</svg>"));
    }

    #[test]
    fn two_circles_per_button() {
        let (layout, doc) = letter_svg("1.25");
        let circles = doc.matches("<circle").count();
        assert_eq!(circles, 2 * layout.buttons.len());
    }

    #[test]
    fn grid_preview_shows_printable_region() {
        let (_, doc) = letter_svg("1.25");
        // Page rect plus the dashed printable-area rect.
        assert_eq!(doc.matches("<rect").count(), 2);
    }

    #[test]
    fn hex_preview_omits_printable_region() {
        let (_, doc) = letter_svg("2.25");
        assert_eq!(doc.matches("<rect").count(), 1);
    }

    #[test]
    fn caption_reports_capacity() {
        let (_, doc) = letter_svg("1.25");
        assert!(doc.contains("20 × 1.25"));
    }
}
