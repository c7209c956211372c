//! Lowering of multi-point curves to single cubic and quadratic segments.
//!
//! Both functions take the points of a single `curve_to` / `q_curve_to` call. The
//! current point the curve starts from is not part of the input, it is tracked by
//! the caller.

use crate::math::{midpoint, Point};
use crate::{PenError, PenResult};

/// The points of a cubic bézier segment, minus its starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSegmentPoints {
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

/// The points of a quadratic bézier segment, minus its starting point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticSegmentPoints {
    pub ctrl: Point,
    pub to: Point,
}

/// Splits a super bézier into a sequence of cubic bézier segments.
///
/// `points` contains `n` off-curve points followed by the on-curve end point.
/// The result contains `n - 1` segments joined with C1 continuity: the end of
/// each segment is the midpoint of its second control point and the first
/// control point of the next segment.
///
/// Intermediate points are interpolated along each leg of the control polygon,
/// the legs being divided in at most three parts (fewer near the ends of the
/// curve).
///
/// Fails with `NotEnoughPoints` if there are fewer than two off-curve points.
pub fn decompose_super_bezier(points: &[Point]) -> PenResult<Vec<CubicSegmentPoints>> {
    if points.len() < 3 {
        return Err(PenError::NotEnoughPoints {
            expected: 3,
            found: points.len(),
        });
    }

    let n = points.len() - 1;
    let mut segments = Vec::with_capacity(n - 1);

    let mut ctrl1 = points[0];
    let mut ctrl2 = None;
    for i in 2..=n {
        let num_divisions = i.min(3).min(n - i + 2);
        let prev = points[i - 2];
        let next = points[i - 1];
        for j in 1..num_divisions {
            let factor = j as f32 / num_divisions as f32;
            let p = prev + (next - prev) * factor;
            match ctrl2.take() {
                None => {
                    ctrl2 = Some(p);
                }
                Some(c2) => {
                    segments.push(CubicSegmentPoints {
                        ctrl1,
                        ctrl2: c2,
                        to: midpoint(c2, p),
                    });
                    ctrl1 = p;
                }
            }
        }
    }

    segments.push(CubicSegmentPoints {
        ctrl1,
        ctrl2: points[n - 1],
        to: points[n],
    });

    Ok(segments)
}

/// Splits a TrueType quadratic spline into a sequence of quadratic bézier segments.
///
/// `points` contains `n` off-curve points followed by the on-curve end point.
/// The result contains `n` segments. An on-curve point is implied halfway between
/// each pair of consecutive off-curve points.
///
/// Fails with `NotEnoughPoints` if there is no off-curve point.
pub fn decompose_quadratic(points: &[Point]) -> PenResult<Vec<QuadraticSegmentPoints>> {
    if points.len() < 2 {
        return Err(PenError::NotEnoughPoints {
            expected: 2,
            found: points.len(),
        });
    }

    let n = points.len() - 1;
    let mut segments = Vec::with_capacity(n);
    for pair in points[..n].windows(2) {
        segments.push(QuadraticSegmentPoints {
            ctrl: pair[0],
            to: midpoint(pair[0], pair[1]),
        });
    }

    segments.push(QuadraticSegmentPoints {
        ctrl: points[n - 1],
        to: points[n],
    });

    Ok(segments)
}

#[cfg(test)]
fn assert_approx_eq(a: Point, b: Point) {
    assert!((a - b).length() < 1e-4, "{:?} != {:?}", a, b);
}

#[test]
fn super_bezier_not_enough_points() {
    use crate::math::point;

    assert_eq!(
        decompose_super_bezier(&[point(0.0, 0.0), point(1.0, 1.0)]),
        Err(PenError::NotEnoughPoints {
            expected: 3,
            found: 2
        })
    );
    assert!(decompose_super_bezier(&[]).is_err());
}

#[test]
fn super_bezier_single_segment() {
    use crate::math::point;

    let points = [point(1.0, 2.0), point(3.0, 4.0), point(5.0, 6.0)];
    let segments = decompose_super_bezier(&points).unwrap();
    assert_eq!(
        segments,
        vec![CubicSegmentPoints {
            ctrl1: points[0],
            ctrl2: points[1],
            to: points[2],
        }]
    );
}

#[test]
fn super_bezier_three_off_curves() {
    use crate::math::point;

    let points = [
        point(50.0, 75.0),
        point(60.0, 50.0),
        point(50.0, 25.0),
        point(0.0, 0.0),
    ];
    let segments = decompose_super_bezier(&points).unwrap();
    assert_eq!(
        segments,
        vec![
            CubicSegmentPoints {
                ctrl1: point(50.0, 75.0),
                ctrl2: point(55.0, 62.5),
                to: point(55.0, 50.0),
            },
            CubicSegmentPoints {
                ctrl1: point(55.0, 37.5),
                ctrl2: point(50.0, 25.0),
                to: point(0.0, 0.0),
            },
        ]
    );
}

#[test]
fn super_bezier_four_off_curves() {
    use crate::math::point;

    let points = [
        point(0.0, 0.0),
        point(10.0, 10.0),
        point(20.0, 10.0),
        point(20.0, 0.0),
        point(30.0, -10.0),
    ];
    let segments = decompose_super_bezier(&points).unwrap();
    assert_eq!(segments.len(), 3);

    assert_eq!(segments[0].ctrl1, point(0.0, 0.0));
    assert_approx_eq(segments[0].ctrl2, point(5.0, 5.0));
    assert_approx_eq(segments[0].to, point(9.166667, 7.5));
    assert_approx_eq(segments[1].ctrl1, point(13.333333, 10.0));
    assert_approx_eq(segments[1].ctrl2, point(16.666667, 10.0));
    assert_approx_eq(segments[1].to, point(18.333334, 7.5));
    assert_approx_eq(segments[2].ctrl1, point(20.0, 5.0));
    assert_eq!(segments[2].ctrl2, point(20.0, 0.0));
    assert_eq!(segments[2].to, point(30.0, -10.0));

    for pair in segments.windows(2) {
        assert_eq!(pair[0].to, midpoint(pair[0].ctrl2, pair[1].ctrl1));
    }
}

#[test]
fn super_bezier_segment_count_and_joints() {
    use crate::math::point;

    for n in 2..12 {
        let points: Vec<Point> = (0..=n)
            .map(|i| point(i as f32 * 10.0, if i % 2 == 0 { 0.0 } else { 10.0 }))
            .collect();
        let segments = decompose_super_bezier(&points).unwrap();
        assert_eq!(segments.len(), n - 1);
        assert_eq!(segments[0].ctrl1, points[0]);

        let last = segments.last().unwrap();
        assert_eq!(last.ctrl2, points[n - 1]);
        assert_eq!(last.to, points[n]);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, midpoint(pair[0].ctrl2, pair[1].ctrl1));
        }
    }
}

#[test]
fn quadratic_not_enough_points() {
    use crate::math::point;

    assert_eq!(
        decompose_quadratic(&[point(0.0, 0.0)]),
        Err(PenError::NotEnoughPoints {
            expected: 2,
            found: 1
        })
    );
    assert!(decompose_quadratic(&[]).is_err());
}

#[test]
fn quadratic_implied_points() {
    use crate::math::point;

    let points = [
        point(0.0, 10.0),
        point(10.0, 10.0),
        point(10.0, 0.0),
        point(5.0, 0.0),
    ];
    let segments = decompose_quadratic(&points).unwrap();
    assert_eq!(
        segments,
        vec![
            QuadraticSegmentPoints {
                ctrl: point(0.0, 10.0),
                to: point(5.0, 10.0),
            },
            QuadraticSegmentPoints {
                ctrl: point(10.0, 10.0),
                to: point(10.0, 5.0),
            },
            QuadraticSegmentPoints {
                ctrl: point(10.0, 0.0),
                to: point(5.0, 0.0),
            },
        ]
    );
}

#[test]
fn quadratic_segment_count_and_joints() {
    use crate::math::point;

    for n in 1..10 {
        let points: Vec<Point> = (0..=n)
            .map(|i| point(i as f32 * 3.0, (i * i) as f32))
            .collect();
        let segments = decompose_quadratic(&points).unwrap();
        assert_eq!(segments.len(), n);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.ctrl, points[i]);
        }
        for i in 0..n - 1 {
            assert_eq!(segments[i].to, midpoint(points[i], points[i + 1]));
        }
        assert_eq!(segments[n - 1].to, points[n]);
    }
}
