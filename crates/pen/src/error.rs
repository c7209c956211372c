use thiserror::Error;

/// Result type of all pen operations.
pub type PenResult<T = ()> = Result<T, PenError>;

/// The ways a drawing command can violate the pen protocol.
///
/// None of these are transient: an operation that fails is not retried and the
/// caller decides whether to abort the whole drawing or skip the offending outline.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PenError {
    /// The pen does not provide the primitive hook needed by the operation.
    #[error("the `{0}` primitive is not implemented by this pen")]
    NotImplemented(&'static str),

    /// A segment was added without a current point (typically before the first `move_to`).
    #[error("no current point, `move_to` must be called first")]
    MissingCurrentPoint,

    /// A curve was given an empty point list.
    #[error("no points were provided")]
    NoPoints,

    /// A decomposer received fewer points than its minimum arity.
    #[error("expected at least {expected} points, got {found}")]
    NotEnoughPoints { expected: usize, found: usize },

    /// An implied on-curve point was used somewhere other than at the end of a
    /// quadratic curve, or without off-curve points to derive it from.
    #[error("implied on-curve point requires explicit first and last off-curve points")]
    LastOrFirstOffcurveIsNil,

    /// A component referenced an outline that is not in the glyph set.
    #[error("missing component {0:?}")]
    MissingComponent(String),

    /// A component was drawn from within its own outline, directly or through
    /// other components.
    #[error("component {0:?} references itself")]
    ComponentCycle(String),

    /// A segment needs the previous point but none was recorded.
    #[error("no previous point to start the segment from")]
    MissingPrevPoint,

    /// A sub-path was ended without returning to its start point.
    #[error("the contour must be closed")]
    OpenContour,
}

#[test]
fn error_messages() {
    assert_eq!(
        PenError::NotImplemented("curve_to_one").to_string(),
        "the `curve_to_one` primitive is not implemented by this pen"
    );
    assert_eq!(
        PenError::NotEnoughPoints {
            expected: 3,
            found: 2
        }
        .to_string(),
        "expected at least 3 points, got 2"
    );
    assert_eq!(
        PenError::MissingComponent("a".to_string()).to_string(),
        "missing component \"a\""
    );
    assert_eq!(
        PenError::ComponentCycle("a".to_string()).to_string(),
        "component \"a\" references itself"
    );
}
