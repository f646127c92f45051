// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # polynumeral
//!
//! Renders a number from 0 to 9999 in several numeral notations at once and
//! places every representation around a shared anchor without overlaps.
//!
//! ## Architecture
//!
//! - **Numbers** (`number`): the validated `0..=9999` domain and place values
//! - **Notations** (`glyph`): font-independent symbol tables and encoders for
//!   compound glyphs, base 20, binary icons and expanded decimal form
//! - **Quantities** (`quantity`): icon grids for counts and place-value columns
//! - **Layout** (`layout`): priority-ordered overlap resolution with a
//!   stacked fallback
//! - **Composition** (`compose`): one call from number and modes to positions
//! - **Grid mode** (`grid`): cell ↔ pixel mapping for a board of cells
//!
//! ## Library usage
//!
//! ```no_run
//! use polynumeral::compose::render_number;
//! use polynumeral::config::RenderConfig;
//! use polynumeral::geometry::{Point, Size};
//! use polynumeral::mode::all_modes;
//! use polynumeral::number::Number;
//!
//! let n = Number::new(4239).unwrap();
//! let plan = render_number(
//!     n,
//!     &all_modes(),
//!     Point::new(512.0, 400.0),
//!     Size::new(1024.0, 768.0),
//!     &RenderConfig::default(),
//! );
//! for mode in plan.nearest_first() {
//!     println!("{} at ({}, {})", mode.mode, mode.center.x, mode.center.y);
//! }
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod grid;
pub mod layout;
pub mod mode;
pub mod number;
pub mod quantity;
