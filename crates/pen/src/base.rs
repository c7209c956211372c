//! A pen built on top of a small set of primitive segment hooks.
//!
//! Implementing [Pen](../pen/trait.Pen.html) directly means dealing with super béziers,
//! TrueType splines and components. Most consumers would rather receive simple
//! lines and bézier segments: they implement [SegmentPen](trait.SegmentPen.html)
//! and let [BasePen](struct.BasePen.html) do the rest.
//!
//! ```
//! use penkit_pen::math::{point, Point};
//! use penkit_pen::{BasePen, Pen, PenResult, SegmentPen};
//!
//! /// Counts the segments of an outline.
//! #[derive(Default)]
//! struct SegmentCounter {
//!     count: usize,
//! }
//!
//! impl SegmentPen for SegmentCounter {
//!     fn move_to(&mut self, _to: Point) -> PenResult {
//!         Ok(())
//!     }
//!     fn line_to(&mut self, _to: Point) -> PenResult {
//!         self.count += 1;
//!         Ok(())
//!     }
//!     fn curve_to_one(&mut self, _ctrl1: Point, _ctrl2: Point, _to: Point) -> PenResult {
//!         self.count += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut pen = BasePen::new(SegmentCounter::default());
//! pen.move_to(point(0.0, 0.0)).unwrap();
//! pen.curve_to(&[point(0.0, 1.0), point(1.0, 2.0), point(2.0, 1.0), point(2.0, 0.0)]).unwrap();
//! pen.close_path().unwrap();
//!
//! assert_eq!(pen.get_ref().count, 2);
//! ```

use crate::decompose::{decompose_quadratic, decompose_super_bezier};
use crate::filter::TransformPen;
use crate::geom::QuadraticBezierSegment;
use crate::glyph_set::GlyphSet;
use crate::math::{midpoint, Point, Transform};
use crate::pen::{Pen, QuadPoint};
use crate::{PenError, PenResult};

/// The primitive drawing hooks a [BasePen](struct.BasePen.html) dispatches to.
///
/// Segments passed to these methods always start at the current point of the
/// `BasePen`, which guarantees that a sub-path was started before any of them
/// is called.
pub trait SegmentPen {
    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point) -> PenResult;

    /// Adds a line segment.
    fn line_to(&mut self, to: Point) -> PenResult;

    /// Adds a single cubic bézier segment.
    ///
    /// Pens that only deal with straight lines may leave this unimplemented, in
    /// which case drawing any curve fails with `PenError::NotImplemented`.
    fn curve_to_one(&mut self, _ctrl1: Point, _ctrl2: Point, _to: Point) -> PenResult {
        Err(PenError::NotImplemented("curve_to_one"))
    }

    /// Adds a single quadratic bézier segment starting at `from`.
    ///
    /// By default the segment is elevated to a cubic bézier segment and passed to
    /// `curve_to_one`.
    fn q_curve_to_one(&mut self, from: Point, ctrl: Point, to: Point) -> PenResult {
        let cubic = QuadraticBezierSegment { from, ctrl, to }.to_cubic();
        self.curve_to_one(cubic.ctrl1, cubic.ctrl2, cubic.to)
    }

    /// Ends the current sub-path, connecting it back to its start.
    fn close_path(&mut self) -> PenResult {
        Ok(())
    }

    /// Ends the current sub-path without closing it.
    fn end_path(&mut self) -> PenResult {
        Ok(())
    }
}

impl<'l, S: SegmentPen + ?Sized> SegmentPen for &'l mut S {
    #[inline]
    fn move_to(&mut self, to: Point) -> PenResult {
        (**self).move_to(to)
    }

    #[inline]
    fn line_to(&mut self, to: Point) -> PenResult {
        (**self).line_to(to)
    }

    #[inline]
    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        (**self).curve_to_one(ctrl1, ctrl2, to)
    }

    #[inline]
    fn q_curve_to_one(&mut self, from: Point, ctrl: Point, to: Point) -> PenResult {
        (**self).q_curve_to_one(from, ctrl, to)
    }

    #[inline]
    fn close_path(&mut self) -> PenResult {
        (**self).close_path()
    }

    #[inline]
    fn end_path(&mut self) -> PenResult {
        (**self).end_path()
    }
}

/// Parameters for the way a [BasePen](struct.BasePen.html) draws components.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct DecomposeOptions {
    /// Whether components missing from the glyph set are skipped (with a warning)
    /// rather than failing with `PenError::MissingComponent`.
    ///
    /// Default value: `true`.
    pub skip_missing_components: bool,
}

impl DecomposeOptions {
    pub const DEFAULT_SKIP_MISSING_COMPONENTS: bool = true;

    pub const DEFAULT: Self = DecomposeOptions {
        skip_missing_components: Self::DEFAULT_SKIP_MISSING_COMPONENTS,
    };

    #[inline]
    pub const fn with_skip_missing_components(mut self, skip: bool) -> Self {
        self.skip_missing_components = skip;
        self
    }
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Implements the [Pen](../pen/trait.Pen.html) interface on top of a
/// [SegmentPen](trait.SegmentPen.html).
///
/// The `BasePen` keeps track of the current point, splits curves into single
/// segments and draws components by replaying them from its glyph set through a
/// [TransformPen](../filter/struct.TransformPen.html) wrapping itself.
///
/// A `BasePen` holds the state of a single drawing pass and must not be shared
/// between passes that run concurrently.
pub struct BasePen<'a, S> {
    segments: S,
    current_point: Option<Point>,
    glyph_set: Option<&'a GlyphSet>,
    options: DecomposeOptions,
    // Names of the components being drawn, outermost first.
    component_stack: Vec<String>,
}

impl<'a, S: SegmentPen> BasePen<'a, S> {
    /// Creates a pen without glyph set, all components are considered missing.
    pub fn new(segments: S) -> Self {
        BasePen {
            segments,
            current_point: None,
            glyph_set: None,
            options: DecomposeOptions::DEFAULT,
            component_stack: Vec::new(),
        }
    }

    /// Creates a pen that looks components up in `glyph_set`.
    pub fn with_glyph_set(segments: S, glyph_set: &'a GlyphSet) -> Self {
        BasePen {
            glyph_set: Some(glyph_set),
            ..Self::new(segments)
        }
    }

    pub fn with_options(mut self, options: DecomposeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DecomposeOptions {
        &self.options
    }

    /// The end of the last segment, if a sub-path is in progress.
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    pub fn get_ref(&self) -> &S {
        &self.segments
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.segments
    }

    pub fn into_inner(self) -> S {
        self.segments
    }

    fn require_current_point(&self) -> PenResult<Point> {
        self.current_point.ok_or(PenError::MissingCurrentPoint)
    }

    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        self.require_current_point()?;
        self.segments.curve_to_one(ctrl1, ctrl2, to)?;
        self.current_point = Some(to);

        Ok(())
    }

    fn q_curve_to_one(&mut self, ctrl: Point, to: Point) -> PenResult {
        let from = self.require_current_point()?;
        self.segments.q_curve_to_one(from, ctrl, to)?;
        self.current_point = Some(to);

        Ok(())
    }

    fn q_curve_to_points(&mut self, points: &[Point]) -> PenResult {
        if points.len() == 1 {
            return self.line_to(points[0]);
        }

        self.require_current_point()?;
        for segment in decompose_quadratic(points)? {
            self.q_curve_to_one(segment.ctrl, segment.to)?;
        }

        Ok(())
    }
}

impl<'a, S: SegmentPen> Pen for BasePen<'a, S> {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.segments.move_to(to)?;
        self.current_point = Some(to);

        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        self.require_current_point()?;
        self.segments.line_to(to)?;
        self.current_point = Some(to);

        Ok(())
    }

    fn curve_to(&mut self, points: &[Point]) -> PenResult {
        match points {
            [] => Err(PenError::NoPoints),
            [to] => self.line_to(*to),
            [ctrl, to] => self.q_curve_to_points(&[*ctrl, *to]),
            [ctrl1, ctrl2, to] => self.curve_to_one(*ctrl1, *ctrl2, *to),
            _ => {
                self.require_current_point()?;
                for segment in decompose_super_bezier(points)? {
                    self.curve_to_one(segment.ctrl1, segment.ctrl2, segment.to)?;
                }

                Ok(())
            }
        }
    }

    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult {
        let (last, off_curve) = points.split_last().ok_or(PenError::NoPoints)?;

        let mut explicit = Vec::with_capacity(points.len());
        for p in off_curve {
            explicit.push(p.explicit().ok_or(PenError::LastOrFirstOffcurveIsNil)?);
        }

        match *last {
            QuadPoint::Explicit(to) => {
                explicit.push(to);
            }
            QuadPoint::ImpliedOnCurve => {
                // A contour without on-curve points starts and ends halfway between
                // its last and first off-curve points.
                let (first, last_off_curve) = match (explicit.first(), explicit.last()) {
                    (Some(first), Some(last)) => (*first, *last),
                    _ => return Err(PenError::LastOrFirstOffcurveIsNil),
                };
                let start = midpoint(last_off_curve, first);
                self.move_to(start)?;
                explicit.push(start);
            }
        }

        self.q_curve_to_points(&explicit)
    }

    fn close_path(&mut self) -> PenResult {
        self.current_point = None;
        self.segments.close_path()
    }

    fn end_path(&mut self) -> PenResult {
        self.current_point = None;
        self.segments.end_path()
    }

    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult {
        // Copy the reference out so that the outline does not borrow `self`.
        let glyph_set = self.glyph_set;
        let outline = match glyph_set.and_then(|glyphs| glyphs.get(name)) {
            Some(outline) => outline,
            None => {
                if self.options.skip_missing_components {
                    log::warn!("glyph set does not contain component {:?}, skipping it", name);
                    return Ok(());
                }
                return Err(PenError::MissingComponent(name.to_string()));
            }
        };

        if self.component_stack.iter().any(|drawing| drawing == name) {
            return Err(PenError::ComponentCycle(name.to_string()));
        }

        log::trace!("drawing component {:?} with transform {:?}", name, transform);
        self.component_stack.push(name.to_string());
        let result = outline.draw(&mut TransformPen::new(&mut *self, *transform));
        self.component_stack.pop();

        result
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::recording::SegmentEvent;

#[cfg(test)]
fn recorder<'a>() -> BasePen<'a, Vec<SegmentEvent>> {
    BasePen::new(Vec::new())
}

#[test]
fn cubic_passes_through_unchanged() {
    let mut pen = recorder();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.curve_to(&[point(1.0, 2.0), point(3.0, 4.0), point(5.0, 6.0)])
        .unwrap();

    assert_eq!(pen.current_point(), Some(point(5.0, 6.0)));
    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(0.0, 0.0)),
            SegmentEvent::CurveToOne {
                ctrl1: point(1.0, 2.0),
                ctrl2: point(3.0, 4.0),
                to: point(5.0, 6.0),
            },
        ]
    );
}

#[test]
fn curve_to_degenerate_cases() {
    let mut pen = recorder();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.curve_to(&[point(1.0, 0.0)]).unwrap();
    pen.curve_to(&[point(2.0, 1.0), point(3.0, 0.0)]).unwrap();
    assert_eq!(pen.curve_to(&[]), Err(PenError::NoPoints));
    pen.end_path().unwrap();

    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(0.0, 0.0)),
            SegmentEvent::LineTo(point(1.0, 0.0)),
            SegmentEvent::QCurveToOne {
                ctrl: point(2.0, 1.0),
                to: point(3.0, 0.0),
            },
            SegmentEvent::EndPath,
        ]
    );
}

#[test]
fn super_bezier_is_split() {
    let points = [
        point(0.0, 0.0),
        point(10.0, 10.0),
        point(20.0, 10.0),
        point(20.0, 0.0),
        point(30.0, -10.0),
    ];

    let mut pen = recorder();
    pen.move_to(point(-10.0, 0.0)).unwrap();
    pen.curve_to(&points).unwrap();
    assert_eq!(pen.current_point(), Some(point(30.0, -10.0)));

    let expected = decompose_super_bezier(&points).unwrap();
    let events = pen.into_inner();
    assert_eq!(events.len(), 4);
    for (event, segment) in events[1..].iter().zip(expected.iter()) {
        assert_eq!(
            *event,
            SegmentEvent::CurveToOne {
                ctrl1: segment.ctrl1,
                ctrl2: segment.ctrl2,
                to: segment.to,
            }
        );
    }
}

#[test]
fn implied_on_curve_contour() {
    let mut pen = recorder();
    pen.q_curve_to(&[
        point(0.0, 10.0).into(),
        point(10.0, 10.0).into(),
        QuadPoint::ImpliedOnCurve,
    ])
    .unwrap();
    assert_eq!(pen.current_point(), Some(point(5.0, 10.0)));
    pen.close_path().unwrap();

    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(5.0, 10.0)),
            SegmentEvent::QCurveToOne {
                ctrl: point(0.0, 10.0),
                to: point(5.0, 10.0),
            },
            SegmentEvent::QCurveToOne {
                ctrl: point(10.0, 10.0),
                to: point(5.0, 10.0),
            },
            SegmentEvent::ClosePath,
        ]
    );
}

#[test]
fn implied_on_curve_is_move_then_explicit_spline() {
    let off_curve = [point(0.0, 0.0), point(0.0, 8.0), point(6.0, 8.0), point(6.0, 2.0)];

    let mut implied: Vec<QuadPoint> = off_curve.iter().map(|p| QuadPoint::from(*p)).collect();
    implied.push(QuadPoint::ImpliedOnCurve);
    let mut a = recorder();
    a.q_curve_to(&implied).unwrap();

    let start = midpoint(off_curve[3], off_curve[0]);
    let mut explicit: Vec<QuadPoint> = off_curve.iter().map(|p| QuadPoint::from(*p)).collect();
    explicit.push(start.into());
    let mut b = recorder();
    b.move_to(start).unwrap();
    b.q_curve_to(&explicit).unwrap();

    assert_eq!(a.current_point(), b.current_point());
    assert_eq!(a.into_inner(), b.into_inner());
}

#[test]
fn invalid_quadratic_splines() {
    let mut pen = recorder();
    assert_eq!(pen.q_curve_to(&[]), Err(PenError::NoPoints));
    assert_eq!(
        pen.q_curve_to(&[QuadPoint::ImpliedOnCurve]),
        Err(PenError::LastOrFirstOffcurveIsNil)
    );

    pen.move_to(point(0.0, 0.0)).unwrap();
    assert_eq!(
        pen.q_curve_to(&[
            QuadPoint::ImpliedOnCurve,
            point(1.0, 1.0).into(),
            point(2.0, 0.0).into(),
        ]),
        Err(PenError::LastOrFirstOffcurveIsNil)
    );

    // Nothing was drawn by the failed calls.
    assert_eq!(pen.current_point(), Some(point(0.0, 0.0)));
    assert_eq!(pen.into_inner(), vec![SegmentEvent::MoveTo(point(0.0, 0.0))]);
}

#[test]
fn quadratic_spline_with_single_point_is_a_line() {
    let mut pen = recorder();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.q_curve_to(&[point(4.0, 4.0).into()]).unwrap();

    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(0.0, 0.0)),
            SegmentEvent::LineTo(point(4.0, 4.0)),
        ]
    );
}

#[test]
fn missing_current_point() {
    let mut pen = recorder();
    assert_eq!(pen.line_to(point(1.0, 1.0)), Err(PenError::MissingCurrentPoint));
    assert_eq!(pen.current_point(), None);
    assert_eq!(
        pen.curve_to(&[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]),
        Err(PenError::MissingCurrentPoint)
    );
    assert_eq!(
        pen.q_curve_to(&[point(1.0, 1.0).into(), point(2.0, 2.0).into()]),
        Err(PenError::MissingCurrentPoint)
    );
    assert!(pen.into_inner().is_empty());
}

#[test]
fn close_and_end_clear_the_current_point() {
    let mut pen = recorder();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    assert_eq!(pen.current_point(), Some(point(1.0, 0.0)));
    pen.close_path().unwrap();
    assert_eq!(pen.current_point(), None);
    assert_eq!(pen.line_to(point(2.0, 0.0)), Err(PenError::MissingCurrentPoint));

    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.end_path().unwrap();
    assert_eq!(pen.current_point(), None);
    assert_eq!(
        pen.curve_to(&[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]),
        Err(PenError::MissingCurrentPoint)
    );
}

#[test]
fn quadratic_falls_back_to_cubic() {
    struct CubicOnly(Vec<(Point, Point, Point)>);
    impl SegmentPen for CubicOnly {
        fn move_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
        fn line_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
        fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
            self.0.push((ctrl1, ctrl2, to));
            Ok(())
        }
    }

    let mut pen = BasePen::new(CubicOnly(Vec::new()));
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.q_curve_to(&[point(3.0, 6.0).into(), point(6.0, 0.0).into()])
        .unwrap();

    assert_eq!(
        pen.into_inner().0,
        vec![(point(2.0, 4.0), point(4.0, 4.0), point(6.0, 0.0))]
    );
}

#[test]
fn missing_primitive_hook() {
    struct LinesOnly;
    impl SegmentPen for LinesOnly {
        fn move_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
        fn line_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
    }

    let mut pen = BasePen::new(LinesOnly);
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    assert_eq!(
        pen.curve_to(&[point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)]),
        Err(PenError::NotImplemented("curve_to_one"))
    );
    // The failed segment did not move the current point.
    assert_eq!(pen.current_point(), Some(point(1.0, 0.0)));
}

#[test]
fn hook_failure_stops_decomposition() {
    struct FailSecondCurve(usize);
    impl SegmentPen for FailSecondCurve {
        fn move_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
        fn line_to(&mut self, _to: Point) -> PenResult {
            Ok(())
        }
        fn curve_to_one(&mut self, _ctrl1: Point, _ctrl2: Point, _to: Point) -> PenResult {
            self.0 += 1;
            if self.0 == 2 {
                return Err(PenError::NotImplemented("curve_to_one"));
            }
            Ok(())
        }
    }

    let points = [
        point(50.0, 75.0),
        point(60.0, 50.0),
        point(50.0, 25.0),
        point(0.0, 0.0),
    ];
    let mut pen = BasePen::new(FailSecondCurve(0));
    pen.move_to(point(0.0, 100.0)).unwrap();
    assert!(pen.curve_to(&points).is_err());
    assert_eq!(pen.current_point(), Some(point(55.0, 50.0)));
    assert_eq!(pen.get_ref().0, 2);
}

#[test]
fn missing_components() {
    let mut pen = recorder();
    pen.add_component("missing", &Transform::identity()).unwrap();
    assert!(pen.get_ref().is_empty());

    let mut pen = recorder()
        .with_options(DecomposeOptions::default().with_skip_missing_components(false));
    assert_eq!(
        pen.add_component("missing", &Transform::identity()),
        Err(PenError::MissingComponent("missing".to_string()))
    );
    assert!(pen.get_ref().is_empty());

    let glyphs = GlyphSet::new();
    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs)
        .with_options(DecomposeOptions::DEFAULT.with_skip_missing_components(false));
    assert!(pen.add_component("missing", &Transform::identity()).is_err());
}

#[test]
fn components_are_drawn_transformed() {
    use crate::recording::RecordingPen;

    let mut square = RecordingPen::new();
    square.move_to(point(0.0, 0.0)).unwrap();
    square.line_to(point(1.0, 0.0)).unwrap();
    square
        .q_curve_to(&[point(1.0, 1.0).into(), point(0.0, 1.0).into()])
        .unwrap();
    square.close_path().unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("square", square);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    let transform = Transform::scale(2.0, 3.0).then_translate(crate::math::vector(10.0, 0.0));
    pen.add_component("square", &transform).unwrap();
    assert_eq!(pen.current_point(), None);

    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(10.0, 0.0)),
            SegmentEvent::LineTo(point(12.0, 0.0)),
            SegmentEvent::QCurveToOne {
                ctrl: point(12.0, 3.0),
                to: point(10.0, 3.0),
            },
            SegmentEvent::ClosePath,
        ]
    );
}

#[test]
fn nested_components_compose_transforms() {
    use crate::recording::RecordingPen;

    let mut dot = RecordingPen::new();
    dot.move_to(point(1.0, 1.0)).unwrap();
    dot.line_to(point(2.0, 1.0)).unwrap();
    dot.end_path().unwrap();

    let mut pair = RecordingPen::new();
    pair.add_component("dot", &Transform::identity()).unwrap();
    pair.add_component("dot", &Transform::translation(0.0, 10.0))
        .unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("dot", dot);
    glyphs.insert("pair", pair);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    pen.add_component("pair", &Transform::scale(2.0, 2.0)).unwrap();

    assert_eq!(
        pen.into_inner(),
        vec![
            SegmentEvent::MoveTo(point(2.0, 2.0)),
            SegmentEvent::LineTo(point(4.0, 2.0)),
            SegmentEvent::EndPath,
            SegmentEvent::MoveTo(point(2.0, 22.0)),
            SegmentEvent::LineTo(point(4.0, 22.0)),
            SegmentEvent::EndPath,
        ]
    );
}

#[test]
fn nested_missing_component_fails_the_whole_drawing() {
    use crate::recording::RecordingPen;

    let mut composite = RecordingPen::new();
    composite.add_component("nope", &Transform::identity()).unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("composite", composite);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs)
        .with_options(DecomposeOptions::DEFAULT.with_skip_missing_components(false));
    assert_eq!(
        pen.add_component("composite", &Transform::identity()),
        Err(PenError::MissingComponent("nope".to_string()))
    );
}

#[test]
fn self_referencing_component() {
    use crate::recording::RecordingPen;

    let mut a = RecordingPen::new();
    a.move_to(point(0.0, 0.0)).unwrap();
    a.line_to(point(1.0, 0.0)).unwrap();
    a.end_path().unwrap();
    a.add_component("a", &Transform::identity()).unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("a", a);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    assert_eq!(
        pen.add_component("a", &Transform::identity()),
        Err(PenError::ComponentCycle("a".to_string()))
    );
    // The contour drawn before reaching the cycle was emitted.
    assert_eq!(pen.get_ref().len(), 3);
}

#[test]
fn indirect_component_cycle() {
    use crate::recording::RecordingPen;

    let mut a = RecordingPen::new();
    a.add_component("b", &Transform::translation(1.0, 0.0))
        .unwrap();
    let mut b = RecordingPen::new();
    b.add_component("a", &Transform::identity()).unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("a", a);
    glyphs.insert("b", b);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    assert_eq!(
        pen.add_component("a", &Transform::identity()),
        Err(PenError::ComponentCycle("a".to_string()))
    );
    assert_eq!(
        pen.add_component("b", &Transform::identity()),
        Err(PenError::ComponentCycle("b".to_string()))
    );
}

#[test]
fn repeated_components_are_not_cycles() {
    use crate::recording::RecordingPen;

    let mut dot = RecordingPen::new();
    dot.move_to(point(0.0, 0.0)).unwrap();
    dot.end_path().unwrap();

    let mut pair = RecordingPen::new();
    pair.add_component("dot", &Transform::identity()).unwrap();
    pair.add_component("dot", &Transform::translation(5.0, 0.0))
        .unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("dot", dot);
    glyphs.insert("pair", pair);

    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    pen.add_component("pair", &Transform::identity()).unwrap();
    pen.add_component("pair", &Transform::identity()).unwrap();
    assert_eq!(pen.get_ref().len(), 8);
}

#[cfg(test)]
mod logging {
    use std::sync::Mutex;

    pub static WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct WarningLogger;

    impl log::Log for WarningLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut warnings) = WARNINGS.lock() {
                    warnings.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: WarningLogger = WarningLogger;

    pub fn init() {
        // Fails if another test installed the logger first, which is fine.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);
    }
}

#[test]
fn skipped_component_is_reported() {
    logging::init();

    let glyphs = GlyphSet::new();
    let mut pen = BasePen::with_glyph_set(Vec::<SegmentEvent>::new(), &glyphs);
    pen.add_component("unlisted-accent", &Transform::identity())
        .unwrap();
    assert!(pen.get_ref().is_empty());

    let warnings = logging::WARNINGS.lock().unwrap();
    assert!(warnings
        .iter()
        .any(|msg| msg.contains("\"unlisted-accent\"") && msg.contains("skipping")));
}
