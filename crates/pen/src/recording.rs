//! Pens that record what they are given.

use crate::base::SegmentPen;
use crate::geom::euclid::approxeq::ApproxEq;
use crate::glyph_set::Outline;
use crate::math::{Point, Transform};
use crate::pen::{Pen, QuadPoint};
use crate::PenResult;

/// A call made on a [Pen](../pen/trait.Pen.html).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PenCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Vec<Point>),
    QCurveTo(Vec<QuadPoint>),
    ClosePath,
    EndPath,
    AddComponent { name: String, transform: Transform },
}

impl PenCommand {
    /// Issues this command on `pen`.
    pub fn apply(&self, pen: &mut dyn Pen) -> PenResult {
        match self {
            PenCommand::MoveTo(to) => pen.move_to(*to),
            PenCommand::LineTo(to) => pen.line_to(*to),
            PenCommand::CurveTo(points) => pen.curve_to(points),
            PenCommand::QCurveTo(points) => pen.q_curve_to(points),
            PenCommand::ClosePath => pen.close_path(),
            PenCommand::EndPath => pen.end_path(),
            PenCommand::AddComponent { name, transform } => pen.add_component(name, transform),
        }
    }

    /// Compares two commands, allowing for floating point imprecision in positions
    /// and transforms.
    pub fn approx_eq(&self, other: &Self) -> bool {
        fn points_approx_eq(a: &[Point], b: &[Point]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.approx_eq(b))
        }

        match (self, other) {
            (PenCommand::MoveTo(a), PenCommand::MoveTo(b))
            | (PenCommand::LineTo(a), PenCommand::LineTo(b)) => a.approx_eq(b),
            (PenCommand::CurveTo(a), PenCommand::CurveTo(b)) => points_approx_eq(a, b),
            (PenCommand::QCurveTo(a), PenCommand::QCurveTo(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|pair| match pair {
                        (QuadPoint::Explicit(a), QuadPoint::Explicit(b)) => a.approx_eq(b),
                        (QuadPoint::ImpliedOnCurve, QuadPoint::ImpliedOnCurve) => true,
                        _ => false,
                    })
            }
            (
                PenCommand::AddComponent {
                    name: name_a,
                    transform: a,
                },
                PenCommand::AddComponent {
                    name: name_b,
                    transform: b,
                },
            ) => name_a == name_b && a.approx_eq(b),
            _ => self == other,
        }
    }
}

/// Records the calls it receives, to replay them later.
///
/// Since it can replay itself into any pen, a `RecordingPen` is also the simplest
/// [Outline](../glyph_set/trait.Outline.html) implementation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RecordingPen {
    commands: Vec<PenCommand>,
}

impl RecordingPen {
    pub fn new() -> Self {
        RecordingPen::default()
    }

    pub fn commands(&self) -> &[PenCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PenCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issues the recorded commands on `pen`, stopping at the first failure.
    pub fn replay(&self, pen: &mut dyn Pen) -> PenResult {
        for cmd in &self.commands {
            cmd.apply(pen)?;
        }

        Ok(())
    }
}

impl From<Vec<PenCommand>> for RecordingPen {
    fn from(commands: Vec<PenCommand>) -> Self {
        RecordingPen { commands }
    }
}

impl Pen for RecordingPen {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.commands.push(PenCommand::MoveTo(to));
        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        self.commands.push(PenCommand::LineTo(to));
        Ok(())
    }

    fn curve_to(&mut self, points: &[Point]) -> PenResult {
        self.commands.push(PenCommand::CurveTo(points.to_vec()));
        Ok(())
    }

    fn q_curve_to(&mut self, points: &[QuadPoint]) -> PenResult {
        self.commands.push(PenCommand::QCurveTo(points.to_vec()));
        Ok(())
    }

    fn close_path(&mut self) -> PenResult {
        self.commands.push(PenCommand::ClosePath);
        Ok(())
    }

    fn end_path(&mut self) -> PenResult {
        self.commands.push(PenCommand::EndPath);
        Ok(())
    }

    fn add_component(&mut self, name: &str, transform: &Transform) -> PenResult {
        self.commands.push(PenCommand::AddComponent {
            name: name.to_string(),
            transform: *transform,
        });
        Ok(())
    }
}

impl Outline for RecordingPen {
    fn draw(&self, pen: &mut dyn Pen) -> PenResult {
        self.replay(pen)
    }
}

/// A call made on a [SegmentPen](../base/trait.SegmentPen.html).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SegmentEvent {
    MoveTo(Point),
    LineTo(Point),
    CurveToOne { ctrl1: Point, ctrl2: Point, to: Point },
    QCurveToOne { ctrl: Point, to: Point },
    ClosePath,
    EndPath,
}

impl SegmentPen for Vec<SegmentEvent> {
    fn move_to(&mut self, to: Point) -> PenResult {
        self.push(SegmentEvent::MoveTo(to));
        Ok(())
    }

    fn line_to(&mut self, to: Point) -> PenResult {
        self.push(SegmentEvent::LineTo(to));
        Ok(())
    }

    fn curve_to_one(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> PenResult {
        self.push(SegmentEvent::CurveToOne { ctrl1, ctrl2, to });
        Ok(())
    }

    fn q_curve_to_one(&mut self, _from: Point, ctrl: Point, to: Point) -> PenResult {
        self.push(SegmentEvent::QCurveToOne { ctrl, to });
        Ok(())
    }

    fn close_path(&mut self) -> PenResult {
        self.push(SegmentEvent::ClosePath);
        Ok(())
    }

    fn end_path(&mut self) -> PenResult {
        self.push(SegmentEvent::EndPath);
        Ok(())
    }
}

#[test]
fn replay_is_identical() {
    use crate::math::point;

    let mut original = RecordingPen::new();
    original.move_to(point(0.0, 0.0)).unwrap();
    original
        .curve_to(&[point(1.0, 1.0), point(2.0, 1.0), point(3.0, 0.0)])
        .unwrap();
    original
        .q_curve_to(&[point(2.0, -1.0).into(), QuadPoint::ImpliedOnCurve])
        .unwrap();
    original.close_path().unwrap();
    original
        .add_component("a", &Transform::translation(1.0, 2.0))
        .unwrap();

    let mut copy = RecordingPen::new();
    original.draw(&mut copy).unwrap();

    assert_eq!(copy, original);
    assert_eq!(copy.len(), 5);
    assert!(!copy.is_empty());

    copy.clear();
    assert!(copy.is_empty());
}

#[test]
fn replay_stops_at_first_failure() {
    use crate::base::BasePen;
    use crate::math::point;
    use crate::PenError;

    let outline = RecordingPen::from(vec![
        PenCommand::LineTo(point(1.0, 1.0)),
        PenCommand::MoveTo(point(0.0, 0.0)),
    ]);

    let mut pen = BasePen::new(Vec::<SegmentEvent>::new());
    assert_eq!(outline.replay(&mut pen), Err(PenError::MissingCurrentPoint));
    assert!(pen.get_ref().is_empty());
}

#[test]
fn approx_eq_commands() {
    use crate::math::point;

    let a = PenCommand::CurveTo(vec![point(1.0, 1.0), point(2.0, 2.0)]);
    let b = PenCommand::CurveTo(vec![point(1.0, 1.0000001), point(2.0, 2.0)]);
    let c = PenCommand::CurveTo(vec![point(1.0, 1.0)]);
    assert!(a.approx_eq(&b));
    assert!(!a.approx_eq(&c));
    assert!(!a.approx_eq(&PenCommand::ClosePath));
    assert!(PenCommand::EndPath.approx_eq(&PenCommand::EndPath));

    let t1 = PenCommand::AddComponent {
        name: "x".to_string(),
        transform: Transform::identity(),
    };
    let t2 = PenCommand::AddComponent {
        name: "y".to_string(),
        transform: Transform::identity(),
    };
    assert!(t1.approx_eq(&t1.clone()));
    assert!(!t1.approx_eq(&t2));
}
