//! Compute the signed area of an outline.

use crate::draw_segments;
use crate::math::Point;
use crate::pen::{GlyphSet, Outline, PenError, PenResult, SegmentPen};

/// Accumulates the signed area enclosed by the segments it is given.
///
/// Counter-clockwise contours (in a y-up coordinate system) have a positive area.
/// Curves are integrated exactly rather than approximated with line segments.
///
/// Every sub-path must be closed, either explicitly with `close_path` or by ending
/// it on its start point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AreaPen {
    value: f32,
    prev: Option<Point>,
    start: Option<Point>,
}

impl AreaPen {
    pub fn new() -> Self {
        AreaPen::default()
    }

    /// The area accumulated so far.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        *self = AreaPen::default();
    }

    fn prev(&self) -> PenResult<Point> {
        self.prev.ok_or(PenError::MissingPrevPoint)
    }
}

impl SegmentPen for AreaPen {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.prev = Some(to);
        self.start = Some(to);

        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        let p0 = self.prev()?;
        self.value -= (to.x - p0.x) * (to.y + p0.y) * 0.5;
        self.prev = Some(to);

        Ok(())
    }

    fn q_curve_to_one(&mut self, _from: Point, ctrl: Point, to: Point) -> PenResult {
        let p0 = self.prev()?;
        let v1 = ctrl - p0;
        let v2 = to - p0;
        self.value -= (v2.x * v1.y - v1.x * v2.y) / 3.0;

        self.line_to(to)
    }

    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        let p0 = self.prev()?;
        let v1 = ctrl1 - p0;
        let v2 = ctrl2 - p0;
        let v3 = to - p0;
        self.value -=
            (v1.x * (-v2.y - v3.y) + v2.x * (v1.y - 2.0 * v3.y) + v3.x * (v1.y + 2.0 * v2.y))
                * 0.15;

        self.line_to(to)
    }

    fn close_path(&mut self) -> PenResult {
        let start = self.start.ok_or(PenError::MissingPrevPoint)?;
        self.line_to(start)?;
        self.prev = None;
        self.start = None;

        Ok(())
    }

    fn end_path(&mut self) -> PenResult {
        if self.prev != self.start {
            return Err(PenError::OpenContour);
        }
        self.prev = None;
        self.start = None;

        Ok(())
    }
}

/// Computes the signed area of an outline, drawing its components from `glyph_set`.
///
/// Missing components fail with `PenError::MissingComponent`.
pub fn signed_area<O>(outline: &O, glyph_set: Option<&GlyphSet>) -> PenResult<f32>
where
    O: Outline + ?Sized,
{
    let mut area = AreaPen::new();
    draw_segments(outline, glyph_set, &mut area)?;

    Ok(area.value())
}

#[cfg(test)]
use crate::math::{point, Transform};
#[cfg(test)]
use crate::pen::{BasePen, Pen, QuadPoint, RecordingPen};

#[cfg(test)]
fn assert_approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "{} != {}", a, b);
}

#[test]
fn sub_path_signed_area() {
    let mut pen = BasePen::new(AreaPen::new());

    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.line_to(point(0.0, 1.0)).unwrap();
    pen.close_path().unwrap();
    assert_eq!(pen.get_ref().value(), 1.0);

    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(0.0, 1.0)).unwrap();
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    pen.close_path().unwrap();
    assert_eq!(pen.get_ref().value(), 0.0);

    let mut outline = RecordingPen::new();
    outline.move_to(point(0.0, 1.0)).unwrap();
    outline.line_to(point(1.0, 1.0)).unwrap();
    outline.line_to(point(1.0, 0.0)).unwrap();
    outline.line_to(point(2.0, 0.0)).unwrap();
    outline.line_to(point(2.0, 1.0)).unwrap();
    outline.line_to(point(3.0, 1.0)).unwrap();
    outline.line_to(point(3.0, 2.0)).unwrap();
    outline.line_to(point(2.0, 2.0)).unwrap();
    outline.line_to(point(2.0, 3.0)).unwrap();
    outline.line_to(point(1.0, 3.0)).unwrap();
    outline.line_to(point(1.0, 2.0)).unwrap();
    outline.line_to(point(0.0, 2.0)).unwrap();
    outline.close_path().unwrap();

    assert_eq!(signed_area(&outline, None), Ok(5.0));
}

#[test]
fn line_and_super_bezier_area() {
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

    // The super bézier is split into (50, 75) (55, 62.5) (55, 50) and
    // (55, 37.5) (50, 25) (0, 0).
    let area = signed_area(&outline, None).unwrap();
    assert_approx_eq(area, -3650.0);
}

#[test]
fn quadratic_area() {
    let mut pen = BasePen::new(AreaPen::new());
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.q_curve_to(&[point(1.0, 2.0).into(), point(2.0, 0.0).into()])
        .unwrap();
    pen.close_path().unwrap();
    assert_approx_eq(pen.get_ref().value(), -4.0 / 3.0);

    // Same curve, drawn as an elevated cubic.
    let mut pen = BasePen::new(AreaPen::new());
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.curve_to(&[
        point(2.0 / 3.0, 4.0 / 3.0),
        point(4.0 / 3.0, 4.0 / 3.0),
        point(2.0, 0.0),
    ])
    .unwrap();
    pen.close_path().unwrap();
    assert_approx_eq(pen.get_ref().value(), -4.0 / 3.0);
}

#[test]
fn implied_on_curve_contour_area() {
    // A TrueType "circle" made of four off-curve points only.
    let mut outline = RecordingPen::new();
    outline
        .q_curve_to(&[
            point(1.0, -1.0).into(),
            point(1.0, 1.0).into(),
            point(-1.0, 1.0).into(),
            point(-1.0, -1.0).into(),
            QuadPoint::ImpliedOnCurve,
        ])
        .unwrap();
    outline.close_path().unwrap();

    // The inner diamond through the implied on-curve points, plus four parabolic
    // segments of 2/3 of their control triangle.
    let area = signed_area(&outline, None).unwrap();
    assert_approx_eq(area, 2.0 + 4.0 * (1.0 / 3.0));
}

#[test]
fn components_contribute_area() {
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
        .add_component("square", &Transform::scale(2.0, 3.0))
        .unwrap();
    composite
        .add_component("square", &Transform::translation(10.0, 0.0))
        .unwrap();

    assert_eq!(signed_area(&composite, Some(&glyphs)), Ok(7.0));

    composite.add_component("missing", &Transform::identity()).unwrap();
    assert_eq!(
        signed_area(&composite, Some(&glyphs)),
        Err(PenError::MissingComponent("missing".to_string()))
    );
    assert_eq!(
        signed_area(&composite, None),
        Err(PenError::MissingComponent("square".to_string()))
    );
}

#[test]
fn open_contour() {
    let mut pen = BasePen::new(AreaPen::new());
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 1.0)).unwrap();
    assert_eq!(pen.end_path(), Err(PenError::OpenContour));

    let mut pen = BasePen::new(AreaPen::new());
    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 0.0)).unwrap();
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.line_to(point(0.0, 0.0)).unwrap();
    pen.end_path().unwrap();
    assert_eq!(pen.get_ref().value(), 0.5);
}

#[test]
fn missing_prev_point() {
    let mut pen = AreaPen::new();
    assert_eq!(pen.line_to(point(1.0, 1.0)), Err(PenError::MissingPrevPoint));
    assert_eq!(
        pen.curve_to_one(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)),
        Err(PenError::MissingPrevPoint)
    );
    assert_eq!(pen.close_path(), Err(PenError::MissingPrevPoint));

    pen.move_to(point(0.0, 0.0)).unwrap();
    pen.line_to(point(2.0, 0.0)).unwrap();
    pen.line_to(point(2.0, 2.0)).unwrap();
    pen.close_path().unwrap();
    assert_eq!(pen.value(), 2.0);

    pen.reset();
    assert_eq!(pen, AreaPen::new());
}
