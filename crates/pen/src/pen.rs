//! The pen interface.

use crate::filter::TransformPen;
use crate::math::{Point, Transform};
use crate::PenResult;

/// A point of a TrueType quadratic spline.
///
/// The last point of a spline is normally an explicit on-curve point, but a closed
/// TrueType contour may consist of off-curve points only. In that case its last
/// point is `ImpliedOnCurve`: the contour starts and ends halfway between its last
/// and first off-curve points.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum QuadPoint {
    Explicit(Point),
    ImpliedOnCurve,
}

impl QuadPoint {
    /// Returns the position of explicit points.
    #[inline]
    pub fn explicit(&self) -> Option<Point> {
        match *self {
            QuadPoint::Explicit(p) => Some(p),
            QuadPoint::ImpliedOnCurve => None,
        }
    }

    /// Applies `f` to the position of explicit points.
    #[inline]
    pub fn map<F: FnOnce(Point) -> Point>(self, f: F) -> Self {
        match self {
            QuadPoint::Explicit(p) => QuadPoint::Explicit(f(p)),
            QuadPoint::ImpliedOnCurve => QuadPoint::ImpliedOnCurve,
        }
    }
}

impl From<Point> for QuadPoint {
    fn from(p: Point) -> Self {
        QuadPoint::Explicit(p)
    }
}

/// The drawing interface outlines are replayed into.
///
/// A sub-path starts with `move_to` and is terminated by either `close_path` or
/// `end_path`. Segments start at the current point, which is the end of the
/// previous segment (or the position passed to `move_to`).
///
/// Every method can fail, in which case the drawing should be considered
/// aborted or the current outline skipped.
pub trait Pen {
    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point) -> PenResult;

    /// Adds a line segment from the current point to `to`.
    fn line_to(&mut self, to: Point) -> PenResult;

    /// Adds a curve made of any number of off-curve points followed by its on-curve end point.
    ///
    /// - With no off-curve point this is a line.
    /// - With one off-curve point this is a quadratic bézier curve.
    /// - With two off-curve points this is a cubic bézier curve.
    /// - With more off-curve points this is a "super bézier" which is split into
    ///   a sequence of cubic bézier curves.
    fn curve_to(&mut self, points: &[Point]) -> PenResult;

    /// Adds a TrueType quadratic spline made of any number of off-curve points
    /// followed by its on-curve end point.
    ///
    /// Consecutive off-curve points have an implied on-curve point halfway between
    /// them. The last point may be `QuadPoint::ImpliedOnCurve`, for contours that
    /// have no on-curve point at all.
    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult;

    /// Ends the current sub-path, connecting it back to its start.
    fn close_path(&mut self) -> PenResult;

    /// Ends the current sub-path without closing it.
    fn end_path(&mut self) -> PenResult;

    /// Draws the outline named `name` with `transform` applied to it.
    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult;

    /// Adds a quadratic bézier curve.
    ///
    /// Shorthand for `pen.q_curve_to(&[ctrl.into(), to.into()])`.
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) -> PenResult {
        self.q_curve_to(&[QuadPoint::Explicit(ctrl), QuadPoint::Explicit(to)])
    }

    /// Adds a cubic bézier curve.
    ///
    /// Shorthand for `pen.curve_to(&[ctrl1, ctrl2, to])`.
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        self.curve_to(&[ctrl1, ctrl2, to])
    }

    /// Returns a pen that applies the given transformation to all positions
    /// before forwarding them to this pen.
    fn transformed(self, transform: Transform) -> TransformPen<Self>
    where
        Self: Sized,
    {
        TransformPen::new(self, transform)
    }
}

impl<'l, P: Pen + ?Sized> Pen for &'l mut P {
    #[inline]
    fn move_to(&mut self, to: Point) -> PenResult {
        (**self).move_to(to)
    }

    #[inline]
    fn line_to(&mut self, to: Point) -> PenResult {
        (**self).line_to(to)
    }

    #[inline]
    fn curve_to(&mut self, points: &[Point]) -> PenResult {
        (**self).curve_to(points)
    }

    #[inline]
    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult {
        (**self).q_curve_to(points)
    }

    #[inline]
    fn close_path(&mut self) -> PenResult {
        (**self).close_path()
    }

    #[inline]
    fn end_path(&mut self) -> PenResult {
        (**self).end_path()
    }

    #[inline]
    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult {
        (**self).add_component(name, transform)
    }
}

/// A pen that ignores everything it is given.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullPen;

impl Pen for NullPen {
    fn move_to(&mut self, _to: Point) -> PenResult {
        Ok(())
    }
    fn line_to(&mut self, _to: Point) -> PenResult {
        Ok(())
    }
    fn curve_to(&mut self, _points: &[Point]) -> PenResult {
        Ok(())
    }
    fn q_curve_to(&mut self, _points: &[QuadPoint]) -> PenResult {
        Ok(())
    }
    fn close_path(&mut self) -> PenResult {
        Ok(())
    }
    fn end_path(&mut self) -> PenResult {
        Ok(())
    }
    fn add_component(&mut self, _name: &str, _transform: &Transform) -> PenResult {
        Ok(())
    }
}

#[test]
fn quad_point_map() {
    use crate::math::point;

    let p = QuadPoint::from(point(1.0, 2.0)).map(|p| p * 2.0);
    assert_eq!(p, QuadPoint::Explicit(point(2.0, 4.0)));
    assert_eq!(p.explicit(), Some(point(2.0, 4.0)));

    let implied = QuadPoint::ImpliedOnCurve.map(|p| p * 2.0);
    assert_eq!(implied, QuadPoint::ImpliedOnCurve);
    assert_eq!(implied.explicit(), None);
}

#[test]
fn shorthands_route_through_generalized_calls() {
    use crate::math::point;
    use crate::recording::{PenCommand, RecordingPen};

    let mut pen = RecordingPen::new();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.quadratic_bezier_to(point(1.0, 1.0), point(2.0, 0.0))
        .unwrap();
    pen.cubic_bezier_to(point(3.0, 1.0), point(4.0, 1.0), point(5.0, 0.0))
        .unwrap();
    pen.end_path().unwrap();

    assert_eq!(
        pen.commands(),
        &[
            PenCommand::MoveTo(point(0.0, 0.0)),
            PenCommand::QCurveTo(vec![
                QuadPoint::Explicit(point(1.0, 1.0)),
                QuadPoint::Explicit(point(2.0, 0.0)),
            ]),
            PenCommand::CurveTo(vec![point(3.0, 1.0), point(4.0, 1.0), point(5.0, 0.0)]),
            PenCommand::EndPath,
        ]
    );
}

#[test]
fn null_pen_accepts_anything() {
    use crate::math::point;

    let mut pen = NullPen;
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.q_curve_to(&[QuadPoint::ImpliedOnCurve]).unwrap();
    pen.add_component("a", &Transform::identity()).unwrap();
    pen.close_path().unwrap();
}
