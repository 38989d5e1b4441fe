//! Printer calibration: a measured-length correction factor.
//!
//! A calibration test sheet carries a reference line of known length. The
//! user prints it, measures the line with a ruler, and the ratio of expected
//! to measured length corrects every physical length on subsequent sheets —
//! compensating for printers and print dialogs that scale output.
//!
//! The active record is caller-owned state: layout and rendering take the
//! factor as an explicit argument, and the preference store that persists
//! records lives entirely with the caller.

#[cfg(feature = "alloc")]
use crate::sheet::PrintLayout;

/// Length of the reference line on the calibration test sheet, in inches.
pub const REFERENCE_INCHES: f64 = 6.0;

/// A completed calibration measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalibrationRecord {
    /// Known length of the reference line.
    pub expected_inches: f64,
    /// The user's ruler reading of the printed line.
    pub measured_inches: f64,
    /// Multiplicative correction: expected / measured.
    pub scale_factor: f64,
}

/// Calibration measurement validation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    /// Measurement was zero, negative, or not finite.
    InvalidMeasurement,
}

/// Build a calibration record from a ruler measurement of the reference line.
///
/// All-or-nothing: a rejected measurement constructs nothing, so any
/// previously active record stays in force.
pub fn compute_factor(measured_inches: f64) -> Result<CalibrationRecord, CalibrationError> {
    if !measured_inches.is_finite() || measured_inches <= 0.0 {
        return Err(CalibrationError::InvalidMeasurement);
    }
    Ok(CalibrationRecord {
        expected_inches: REFERENCE_INCHES,
        measured_inches,
        scale_factor: REFERENCE_INCHES / measured_inches,
    })
}

/// Active correction factor for a possibly-absent record.
///
/// Missing records and corrupt stored values (non-finite or zero factor)
/// fall back to identity, so layout math never divides by zero or
/// multiplies by garbage.
pub fn current_factor(record: Option<&CalibrationRecord>) -> f64 {
    match record {
        Some(r) if r.scale_factor.is_finite() && r.scale_factor != 0.0 => r.scale_factor,
        _ => 1.0,
    }
}

/// Scale every physical length a renderer draws by `factor`.
///
/// Corrects each button position and both template diameters. The image
/// scale and offsets stay in device-pixel space untouched — the renderer
/// maps them into the corrected cell independently, so paper-output size
/// changes without distorting the content inside each button. The paper
/// definition itself is not scaled; the sheet is whatever the printer feeds.
#[cfg(feature = "alloc")]
pub fn apply_calibration(layout: &PrintLayout, factor: f64) -> PrintLayout {
    let mut corrected = layout.clone();
    corrected.button.cut_line_diameter *= factor;
    corrected.button.content_guide_diameter *= factor;
    for button in &mut corrected.buttons {
        button.x *= factor;
        button.y *= factor;
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_long_shrinks_output() {
        // Printer drew 6" as 6.25" → shrink everything by 0.96.
        let record = compute_factor(6.25).unwrap();
        assert_eq!(record.expected_inches, 6.0);
        assert_eq!(record.measured_inches, 6.25);
        assert_eq!(record.scale_factor, 0.96);
    }

    #[test]
    fn exact_measurement_is_identity() {
        let record = compute_factor(6.0).unwrap();
        assert_eq!(record.scale_factor, 1.0);
    }

    #[test]
    fn invalid_measurements_are_rejected() {
        for measured in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                compute_factor(measured),
                Err(CalibrationError::InvalidMeasurement),
                "measurement {measured} should be rejected"
            );
        }
    }

    #[test]
    fn missing_record_falls_back_to_identity() {
        assert_eq!(current_factor(None), 1.0);
    }

    #[test]
    fn valid_record_supplies_its_factor() {
        let record = compute_factor(6.25).unwrap();
        assert_eq!(current_factor(Some(&record)), 0.96);
    }

    #[test]
    fn corrupt_stored_record_falls_back_to_identity() {
        for garbage in [0.0, f64::NAN, f64::INFINITY] {
            let record = CalibrationRecord {
                expected_inches: REFERENCE_INCHES,
                measured_inches: 6.0,
                scale_factor: garbage,
            };
            assert_eq!(current_factor(Some(&record)), 1.0);
        }
    }

    #[cfg(feature = "alloc")]
    mod apply {
        use super::*;
        use crate::catalog;
        use crate::placement::{ImagePlacement, SourceImage};
        use crate::sheet::{PrintLayout, US_LETTER, generate_layout};

        fn letter_layout(key: &str) -> PrintLayout {
            let size = catalog::lookup(key).unwrap();
            let placement = ImagePlacement::new(SourceImage::new(800, 600), size);
            generate_layout(&placement, &US_LETTER).unwrap()
        }

        #[test]
        fn identity_factor_is_bit_exact() {
            let layout = letter_layout("1.25");
            assert_eq!(apply_calibration(&layout, 1.0), layout);
        }

        #[test]
        fn factor_scales_positions_and_diameters() {
            let layout = letter_layout("1.25");
            let corrected = apply_calibration(&layout, 0.96);

            assert_eq!(corrected.button.cut_line_diameter, 1.772 * 0.96);
            assert_eq!(corrected.button.content_guide_diameter, 1.156 * 0.96);
            for (before, after) in layout.buttons.iter().zip(&corrected.buttons) {
                assert_eq!(after.x, before.x * 0.96);
                assert_eq!(after.y, before.y * 0.96);
            }
        }

        #[test]
        fn factor_leaves_image_space_alone() {
            let size = catalog::lookup("2.25").unwrap();
            let placement = ImagePlacement::new(SourceImage::new(800, 600), size)
                .scale(0.5)
                .offset(12.0, -4.0);
            let layout = generate_layout(&placement, &US_LETTER).unwrap();
            let corrected = apply_calibration(&layout, 0.96);
            assert_eq!(corrected.placement, placement);
            assert_eq!(corrected.paper, layout.paper);
        }

        #[test]
        fn successive_factors_compose_multiplicatively() {
            let layout = letter_layout("2.25");
            let twice = apply_calibration(&apply_calibration(&layout, 0.96), 1.05);
            let once = apply_calibration(&layout, 0.96 * 1.05);
            for (a, b) in twice.buttons.iter().zip(&once.buttons) {
                assert!((a.x - b.x).abs() < 1e-12);
                assert!((a.y - b.y).abs() < 1e-12);
            }
        }
    }
}
