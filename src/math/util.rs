use cgmath::{BaseFloat, Vector2};

/// Computes the 2D cross product (perp-dot product) of two vectors.
///
/// The result is positive when `b` is counter-clockwise from `a`,
/// negative when clockwise, and zero when they are parallel.
#[inline(always)]
pub fn cross<S: BaseFloat>(a: Vector2<S>, b: Vector2<S>) -> S {
    a.x * b.y - a.y * b.x
}

/// Converts an `f64` constant into the scalar type `S`.
///
/// Falls back to the scalar's machine epsilon if the value isn't representable.
#[inline(always)]
pub(crate) fn scalar<S: BaseFloat>(value: f64) -> S {
    S::from(value).unwrap_or_else(S::epsilon)
}
