//! Pens that forward their input to another pen.

use crate::math::{Point, Transform};
use crate::pen::{Pen, QuadPoint};
use crate::PenResult;

/// Forwards every call unchanged to another pen.
///
/// This is a composition point: wrapping a pen in a `FilterPen` is
/// observably identical to using it directly.
pub struct FilterPen<P> {
    pen: P,
}

impl<P> FilterPen<P> {
    #[inline]
    pub fn new(pen: P) -> Self {
        FilterPen { pen }
    }

    pub fn get_ref(&self) -> &P {
        &self.pen
    }

    pub fn get_mut(&mut self) -> &mut P {
        &mut self.pen
    }

    pub fn into_inner(self) -> P {
        self.pen
    }
}

impl<P: Pen> Pen for FilterPen<P> {
    #[inline]
    fn move_to(&mut self, to: Point) -> PenResult {
        self.pen.move_to(to)
    }

    #[inline]
    fn line_to(&mut self, to: Point) -> PenResult {
        self.pen.line_to(to)
    }

    #[inline]
    fn curve_to(&mut self, points: &[Point]) -> PenResult {
        self.pen.curve_to(points)
    }

    #[inline]
    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult {
        self.pen.q_curve_to(points)
    }

    #[inline]
    fn close_path(&mut self) -> PenResult {
        self.pen.close_path()
    }

    #[inline]
    fn end_path(&mut self) -> PenResult {
        self.pen.end_path()
    }

    #[inline]
    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult {
        self.pen.add_component(name, transform)
    }
}

/// Applies an affine transformation to all positions before forwarding them to
/// another pen.
///
/// Components keep their own transformation: it is applied first, followed by
/// the transformation of this pen.
pub struct TransformPen<P> {
    pen: P,
    transform: Transform,
}

impl<P> TransformPen<P> {
    #[inline]
    pub fn new(pen: P, transform: Transform) -> Self {
        TransformPen { pen, transform }
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn get_ref(&self) -> &P {
        &self.pen
    }

    pub fn get_mut(&mut self) -> &mut P {
        &mut self.pen
    }

    pub fn into_inner(self) -> P {
        self.pen
    }

    #[inline]
    fn transform_point(&self, p: Point) -> Point {
        self.transform.transform_point(p)
    }
}

impl<P: Pen> Pen for TransformPen<P> {
    #[inline]
    fn move_to(&mut self, to: Point) -> PenResult {
        self.pen.move_to(self.transform_point(to))
    }

    #[inline]
    fn line_to(&mut self, to: Point) -> PenResult {
        self.pen.line_to(self.transform_point(to))
    }

    fn curve_to(&mut self, points: &[Point]) -> PenResult {
        let points: Vec<Point> = points.iter().map(|p| self.transform_point(*p)).collect();
        self.pen.curve_to(&points)
    }

    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult {
        let points: Vec<QuadPoint> = points
            .iter()
            .map(|p| p.map(|p| self.transform_point(p)))
            .collect();
        self.pen.q_curve_to(&points)
    }

    #[inline]
    fn close_path(&mut self) -> PenResult {
        self.pen.close_path()
    }

    #[inline]
    fn end_path(&mut self) -> PenResult {
        self.pen.end_path()
    }

    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult {
        let transform = transform.then(&self.transform);
        self.pen.add_component(name, &transform)
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::recording::{PenCommand, RecordingPen};

#[cfg(test)]
fn draw_sample(pen: &mut dyn Pen) -> PenResult {
    pen.move_to(point(0.0, 0.0))?;
    pen.line_to(point(10.0, 0.0))?;
    pen.curve_to(&[
        point(12.0, 3.0),
        point(14.0, 7.0),
        point(11.0, 9.0),
        point(10.0, 10.0),
    ])?;
    pen.q_curve_to(&[
        point(5.0, 12.0).into(),
        point(0.0, 10.0).into(),
        QuadPoint::ImpliedOnCurve,
    ])?;
    pen.close_path()?;
    pen.add_component("accent", &Transform::translation(3.0, 20.0))?;

    Ok(())
}

#[test]
fn filter_pen_forwards_unchanged() {
    let mut direct = RecordingPen::new();
    draw_sample(&mut direct).unwrap();

    let mut filtered = FilterPen::new(RecordingPen::new());
    draw_sample(&mut filtered).unwrap();

    assert_eq!(filtered.into_inner(), direct);
}

#[test]
fn transform_pen_maps_every_point() {
    let transform = Transform::scale(2.0, -1.0).then_translate(crate::math::vector(1.0, 1.0));
    let mut pen = RecordingPen::new().transformed(transform);
    draw_sample(&mut pen).unwrap();
    assert_eq!(*pen.transform(), transform);

    let commands = pen.into_inner().into_commands();
    assert_eq!(commands[0], PenCommand::MoveTo(point(1.0, 1.0)));
    assert_eq!(commands[1], PenCommand::LineTo(point(21.0, 1.0)));
    assert_eq!(
        commands[2],
        PenCommand::CurveTo(vec![
            point(25.0, -2.0),
            point(29.0, -6.0),
            point(23.0, -8.0),
            point(21.0, -9.0),
        ])
    );
    assert_eq!(
        commands[3],
        PenCommand::QCurveTo(vec![
            point(11.0, -11.0).into(),
            point(1.0, -9.0).into(),
            QuadPoint::ImpliedOnCurve,
        ])
    );
    assert_eq!(commands[4], PenCommand::ClosePath);
    assert_eq!(
        commands[5],
        PenCommand::AddComponent {
            name: "accent".to_string(),
            transform: Transform::translation(3.0, 20.0).then(&transform),
        }
    );
}

#[test]
fn nested_transform_pens_compose() {
    let a = Transform::rotation(crate::geom::Angle::degrees(90.0))
        .then_translate(crate::math::vector(5.0, 0.0));
    let b = Transform::scale(3.0, 0.5);

    let mut nested = TransformPen::new(TransformPen::new(RecordingPen::new(), a), b);
    draw_sample(&mut nested).unwrap();
    let nested = nested.into_inner().into_inner();

    let mut single = TransformPen::new(RecordingPen::new(), b.then(&a));
    draw_sample(&mut single).unwrap();
    let single = single.into_inner();

    assert_eq!(nested.len(), single.len());
    for (n, s) in nested.commands().iter().zip(single.commands()) {
        assert!(n.approx_eq(s), "{:?} != {:?}", n, s);
    }
}

#[test]
fn set_transform() {
    let mut pen = TransformPen::new(RecordingPen::new(), Transform::identity());
    pen.move_to(point(1.0, 1.0)).unwrap();
    pen.set_transform(Transform::scale(2.0, 2.0));
    pen.line_to(point(1.0, 1.0)).unwrap();
    pen.end_path().unwrap();

    pen.get_mut().clear();
    pen.close_path().unwrap();
    assert_eq!(pen.get_ref().commands(), &[PenCommand::ClosePath]);

    assert_eq!(
        pen.get_ref().commands(),
        &[
            PenCommand::MoveTo(point(1.0, 1.0)),
            PenCommand::LineTo(point(2.0, 2.0)),
            PenCommand::EndPath,
        ]
    );
}
