//! Bounding rectangle computation for outlines.

use crate::draw_segments;
use crate::geom::{CubicBezierSegment, QuadraticBezierSegment};
use crate::math::{Box2D, Point};
use crate::pen::{GlyphSet, Outline, PenError, PenResult, SegmentPen};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct BoundsAccumulator {
    bounds: Option<Box2D>,
    // Start of the sub-path, only added once a segment is drawn from it.
    pending_start: Option<Point>,
    prev: Option<Point>,
}

impl BoundsAccumulator {
    fn move_to(&mut self, to: Point) {
        self.pending_start = Some(to);
        self.prev = Some(to);
    }

    fn segment_from(&mut self) -> PenResult<Point> {
        let from = self.prev.ok_or(PenError::MissingPrevPoint)?;
        if let Some(start) = self.pending_start.take() {
            self.add_point(start);
        }

        Ok(from)
    }

    fn add_point(&mut self, p: Point) {
        self.add_rect(Box2D { min: p, max: p });
    }

    fn add_rect(&mut self, rect: Box2D) {
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.union(&rect),
            None => rect,
        });
    }

    fn end(&mut self) {
        self.pending_start = None;
        self.prev = None;
    }
}

/// Computes the bounding box of all points of an outline, on- and off-curve.
///
/// This is faster but less precise than [BoundsPen](struct.BoundsPen.html).
/// A `move_to` that is not followed by any segment does not contribute to the bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ControlBoundsPen {
    acc: BoundsAccumulator,
}

impl ControlBoundsPen {
    pub fn new() -> Self {
        ControlBoundsPen::default()
    }

    /// The bounds accumulated so far, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<Box2D> {
        self.acc.bounds
    }
}

impl SegmentPen for ControlBoundsPen {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.acc.move_to(to);
        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        self.acc.segment_from()?;
        self.acc.add_point(to);
        self.acc.prev = Some(to);

        Ok(())
    }

    fn q_curve_to_one(&mut self, _from: Point, ctrl: Point, to: Point) -> PenResult {
        self.acc.segment_from()?;
        self.acc.add_point(ctrl);
        self.acc.add_point(to);
        self.acc.prev = Some(to);

        Ok(())
    }

    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        self.acc.segment_from()?;
        self.acc.add_point(ctrl1);
        self.acc.add_point(ctrl2);
        self.acc.add_point(to);
        self.acc.prev = Some(to);

        Ok(())
    }

    fn close_path(&mut self) -> PenResult {
        self.acc.end();
        Ok(())
    }

    fn end_path(&mut self) -> PenResult {
        self.acc.end();
        Ok(())
    }
}

/// Computes the smallest axis-aligned rectangle that contains the outline.
///
/// Curve extrema are taken into account, so off-curve points only contribute
/// when the curve actually reaches them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundsPen {
    acc: BoundsAccumulator,
}

impl BoundsPen {
    pub fn new() -> Self {
        BoundsPen::default()
    }

    /// The bounds accumulated so far, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<Box2D> {
        self.acc.bounds
    }
}

impl SegmentPen for BoundsPen {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.acc.move_to(to);
        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        self.acc.segment_from()?;
        self.acc.add_point(to);
        self.acc.prev = Some(to);

        Ok(())
    }

    fn q_curve_to_one(&mut self, _from: Point, ctrl: Point, to: Point) -> PenResult {
        let from = self.acc.segment_from()?;
        let segment = QuadraticBezierSegment { from, ctrl, to };
        self.acc.add_rect(segment.bounding_box());
        self.acc.prev = Some(to);

        Ok(())
    }

    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        let from = self.acc.segment_from()?;
        let segment = CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        };
        self.acc.add_rect(segment.bounding_box());
        self.acc.prev = Some(to);

        Ok(())
    }

    fn close_path(&mut self) -> PenResult {
        self.acc.end();
        Ok(())
    }

    fn end_path(&mut self) -> PenResult {
        self.acc.end();
        Ok(())
    }
}

/// Computes the tight bounding box of an outline, drawing its components from `glyph_set`.
///
/// Returns `None` for an outline that draws no segment.
pub fn bounds<O>(outline: &O, glyph_set: Option<&GlyphSet>) -> PenResult<Option<Box2D>>
where
    O: Outline + ?Sized,
{
    let mut pen = BoundsPen::new();
    draw_segments(outline, glyph_set, &mut pen)?;

    Ok(pen.bounds())
}

/// Computes the bounding box of all the points of an outline, drawing its components
/// from `glyph_set`.
///
/// Returns `None` for an outline that draws no segment.
pub fn control_bounds<O>(outline: &O, glyph_set: Option<&GlyphSet>) -> PenResult<Option<Box2D>>
where
    O: Outline + ?Sized,
{
    let mut pen = ControlBoundsPen::new();
    draw_segments(outline, glyph_set, &mut pen)?;

    Ok(pen.bounds())
}

#[cfg(test)]
use crate::math::{point, Transform};
#[cfg(test)]
use crate::pen::{BasePen, Pen, RecordingPen};

#[cfg(test)]
fn assert_box_approx_eq(a: Box2D, b: Box2D) {
    let eps = 1e-4;
    assert!(
        (a.min - b.min).length() < eps && (a.max - b.max).length() < eps,
        "{:?} != {:?}",
        a,
        b
    );
}

#[test]
fn lone_move_to_is_ignored() {
    let mut pen = BasePen::new(ControlBoundsPen::new());
    pen.move_to(point(-5.0, 20.0)).unwrap();
    pen.end_path().unwrap();
    assert_eq!(pen.get_ref().bounds(), None);

    pen.move_to(point(-5.0, 20.0)).unwrap();
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 2.0)).unwrap();
    pen.end_path().unwrap();
    assert_eq!(
        pen.get_ref().bounds(),
        Some(Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 2.0),
        })
    );
}

#[test]
fn control_bounds_of_split_curve() {
    let mut outline = RecordingPen::new();
    outline.move_to(point(0.0, 0.0)).unwrap();
    outline.line_to(point(0.0, 100.0)).unwrap();
    outline
        .curve_to(&[
            point(50.0, 75.0),
            point(60.0, 50.0),
            point(50.0, 25.0),
            point(0.0, 0.0),
        ])
        .unwrap();
    outline.close_path().unwrap();

    // The super bézier's off-curve point (60, 50) is not a control point of the
    // decomposed segments.
    assert_eq!(
        control_bounds(&outline, None),
        Ok(Some(Box2D {
            min: point(0.0, 0.0),
            max: point(55.0, 100.0),
        }))
    );
}

#[test]
fn tight_bounds_of_curves() {
    let mut quad = RecordingPen::new();
    quad.move_to(point(0.0, 0.0)).unwrap();
    quad.q_curve_to(&[point(1.0, 2.0).into(), point(2.0, 0.0).into()])
        .unwrap();
    quad.close_path().unwrap();

    assert_box_approx_eq(
        bounds(&quad, None).unwrap().unwrap(),
        Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 1.0),
        },
    );
    assert_eq!(
        control_bounds(&quad, None),
        Ok(Some(Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 2.0),
        }))
    );

    let mut cubic = RecordingPen::new();
    cubic.move_to(point(0.0, 0.0)).unwrap();
    cubic
        .curve_to(&[point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)])
        .unwrap();
    cubic.end_path().unwrap();

    assert_box_approx_eq(
        bounds(&cubic, None).unwrap().unwrap(),
        Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 0.75),
        },
    );
}

#[test]
fn bounds_of_components() {
    let mut square = RecordingPen::new();
    square.move_to(point(0.0, 0.0)).unwrap();
    square.line_to(point(1.0, 0.0)).unwrap();
    square.line_to(point(1.0, 1.0)).unwrap();
    square.line_to(point(0.0, 1.0)).unwrap();
    square.close_path().unwrap();

    let mut glyphs = GlyphSet::new();
    glyphs.insert("square", square);

    let mut composite = RecordingPen::new();
    composite
        .add_component("square", &Transform::translation(-2.0, 3.0))
        .unwrap();
    composite
        .add_component("square", &Transform::scale(4.0, 2.0))
        .unwrap();

    assert_eq!(
        bounds(&composite, Some(&glyphs)),
        Ok(Some(Box2D {
            min: point(-2.0, 0.0),
            max: point(4.0, 4.0),
        }))
    );
    assert_eq!(
        bounds(&composite, None),
        Err(PenError::MissingComponent("square".to_string()))
    );
}

#[test]
fn empty_outline_has_no_bounds() {
    let empty = RecordingPen::new();
    assert_eq!(bounds(&empty, None), Ok(None));
    assert_eq!(control_bounds(&empty, None), Ok(None));
}

#[test]
fn segments_need_a_previous_point() {
    let mut pen = BoundsPen::new();
    assert_eq!(
        pen.curve_to_one(point(0.0, 1.0), point(1.0, 1.0), point(1.0, 0.0)),
        Err(PenError::MissingPrevPoint)
    );
    assert_eq!(pen.bounds(), None);
}
