#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Pens: consumers of glyph outlines described as drawing commands.
//!
//! An outline replays itself as a sequence of `move_to`, `line_to`, `curve_to`,
//! `q_curve_to`, `close_path`/`end_path` and `add_component` calls on a
//! [Pen](pen/trait.Pen.html). What the pen does with them is up to its
//! implementation: record them, measure the outline, transform and forward them...
//!
//! Most consumers only want to deal with simple segments. They implement
//! [SegmentPen](base/trait.SegmentPen.html) and are wrapped in a
//! [BasePen](base/struct.BasePen.html) which keeps track of the current point,
//! splits super béziers and TrueType quadratic splines into single segments and
//! draws components out of a [GlyphSet](glyph_set/struct.GlyphSet.html).
//!
//! # Examples
//!
//! ```
//! use penkit_pen::math::point;
//! use penkit_pen::{BasePen, Pen, QuadPoint, SegmentEvent};
//!
//! let mut pen = BasePen::new(Vec::<SegmentEvent>::new());
//!
//! pen.move_to(point(0.0, 0.0)).unwrap();
//! // A super bézier with three off-curve points is split into two cubic segments.
//! pen.curve_to(&[
//!     point(0.0, 10.0),
//!     point(10.0, 20.0),
//!     point(20.0, 10.0),
//!     point(20.0, 0.0),
//! ])
//! .unwrap();
//! // A TrueType spline with two off-curve points becomes two quadratic segments.
//! pen.q_curve_to(&[
//!     QuadPoint::from(point(20.0, -10.0)),
//!     QuadPoint::from(point(10.0, -10.0)),
//!     QuadPoint::from(point(0.0, 0.0)),
//! ])
//! .unwrap();
//! pen.close_path().unwrap();
//!
//! let events = pen.into_inner();
//! assert_eq!(events.len(), 6);
//! assert_eq!(events[5], SegmentEvent::ClosePath);
//! ```
//!

pub use lyon_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod base;
pub mod decompose;
mod error;
pub mod filter;
pub mod glyph_set;
pub mod pen;
pub mod recording;

#[doc(inline)]
pub use crate::base::{BasePen, DecomposeOptions, SegmentPen};
pub use crate::error::{PenError, PenResult};
#[doc(inline)]
pub use crate::filter::{FilterPen, TransformPen};
#[doc(inline)]
pub use crate::glyph_set::{GlyphSet, Outline};
#[doc(inline)]
pub use crate::pen::{NullPen, Pen, QuadPoint};
#[doc(inline)]
pub use crate::recording::{PenCommand, RecordingPen, SegmentEvent};

pub mod traits {
    //! `penkit_pen` traits reexported here for convenience.

    pub use crate::base::SegmentPen;
    pub use crate::glyph_set::Outline;
    pub use crate::pen::Pen;
}

pub mod math {
    //! f32 version of the lyon_geom types used by the pens.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```.
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Alias for ```euclid::default::Transform2D<f32>```.
    ///
    /// The six coefficients are, in order, the x scale, y shear, x shear, y scale,
    /// x translation and y translation.
    pub type Transform = euclid::default::Transform2D<f32>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// The point halfway between `a` and `b`.
    #[inline]
    pub fn midpoint(a: Point, b: Point) -> Point {
        a.lerp(b, 0.5)
    }
}
