//! Button sheet layout computation with packing strategies, unit conversion,
//! and printer calibration.
//!
//! Pure geometry — no pixel operations, no I/O, `no_std` compatible.
//!
//! # Modules
//!
//! - [`units`] — inch/pixel conversion at the fixed print density
//! - [`catalog`] — physical button templates and keyed lookup
//! - [`placement`] — normalized image scale/offset within a button
//! - [`sheet`] — sheet packing: rectangular grid and hex brick (needs `alloc`)
//! - [`calibration`] — printer correction factor and its application

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod calibration;
pub mod catalog;
pub mod placement;
#[cfg(feature = "alloc")]
pub mod sheet;
pub mod units;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from each module
#[cfg(feature = "alloc")]
pub use calibration::apply_calibration;
pub use calibration::{CalibrationError, CalibrationRecord, REFERENCE_INCHES, compute_factor, current_factor};
pub use catalog::{ButtonSize, CatalogError, PackingStrategy};
pub use placement::{ImagePlacement, SourceImage};
#[cfg(feature = "alloc")]
pub use sheet::{
    ButtonGrid, LayoutError, PaperDefinition, PlacedButton, PrintLayout, US_LETTER, calculate_grid,
    generate_layout,
};
pub use units::{DisplayDensity, PIXELS_PER_INCH, inches_to_pixels, pixels_to_inches};
