#![deny(bare_trait_objects)]

//! Drawing glyph outlines through pens.
//!
//! # Crates
//!
//! This meta-crate (`penkit`) reexports the following sub-crates for convenience:
//!
//! * **penkit_pen** - The pen protocol, segment decomposition, filter pens and glyph sets.
//! * **penkit_algorithms** - Pens measuring outlines: signed area and bounding boxes.
//! * **lyon_geom** - The bézier segment and math types positions are expressed with.
//!
//! Each `penkit_<name>` crate is reexported as a `<name>` module in `penkit`. For example:
//!
//! ```ignore
//! extern crate penkit_pen;
//! use penkit_pen::BasePen;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate penkit;
//! use penkit::pen::BasePen;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Measuring a composite glyph
//!
//! Outlines are recorded once and can then be replayed into any pen. Components
//! are resolved through a glyph set and drawn with their transformation applied.
//!
//! ```
//! use penkit::math::{point, Transform};
//! use penkit::pen::{GlyphSet, Pen, PenResult, RecordingPen};
//! use penkit::algorithms::{area::signed_area, bounds::bounds};
//!
//! fn main() -> PenResult {
//!     let mut square = RecordingPen::new();
//!     square.move_to(point(0.0, 0.0))?;
//!     square.line_to(point(10.0, 0.0))?;
//!     square.line_to(point(10.0, 10.0))?;
//!     square.line_to(point(0.0, 10.0))?;
//!     square.close_path()?;
//!
//!     let mut glyphs = GlyphSet::new();
//!     glyphs.insert("square", square);
//!
//!     let mut composite = RecordingPen::new();
//!     composite.add_component("square", &Transform::scale(2.0, 1.0))?;
//!     composite.add_component("square", &Transform::translation(30.0, 0.0))?;
//!
//!     assert_eq!(signed_area(&composite, Some(&glyphs))?, 300.0);
//!
//!     let rect = bounds(&composite, Some(&glyphs))?.unwrap();
//!     assert_eq!(rect.min, point(0.0, 0.0));
//!     assert_eq!(rect.max, point(40.0, 10.0));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Implementing a segment pen
//!
//! Most pens only need to deal with simple segments. Implementing
//! [SegmentPen](pen/trait.SegmentPen.html) and wrapping it in a
//! [BasePen](pen/struct.BasePen.html) is enough to accept super béziers,
//! TrueType splines and components.
//!
//! ```
//! use penkit::math::{point, Point};
//! use penkit::pen::{BasePen, Pen, PenResult, SegmentPen};
//!
//! #[derive(Default)]
//! struct Polyline {
//!     points: Vec<Point>,
//! }
//!
//! impl SegmentPen for Polyline {
//!     fn move_to(&mut self, to: Point) -> PenResult {
//!         self.points.push(to);
//!         Ok(())
//!     }
//!
//!     fn line_to(&mut self, to: Point) -> PenResult {
//!         self.points.push(to);
//!         Ok(())
//!     }
//!
//!     fn curve_to_one(&mut self, _ctrl1: Point, _ctrl2: Point, to: Point) -> PenResult {
//!         self.points.push(to);
//!         Ok(())
//!     }
//! }
//!
//! let mut pen = BasePen::new(Polyline::default());
//! pen.move_to(point(0.0, 0.0)).unwrap();
//! // Three off-curve points: split into two cubic segments.
//! pen.curve_to(&[point(1.0, 1.0), point(2.0, 1.0), point(3.0, 1.0), point(4.0, 0.0)]).unwrap();
//! // Quadratic segments are elevated to cubic ones by default.
//! pen.q_curve_to(&[point(5.0, -1.0).into(), point(6.0, 0.0).into()]).unwrap();
//! pen.end_path().unwrap();
//!
//! assert_eq!(pen.get_ref().points.len(), 4);
//! ```

pub extern crate penkit_algorithms as algorithms;
pub extern crate penkit_pen as pen;

pub use crate::pen::geom;
pub use crate::pen::math;
