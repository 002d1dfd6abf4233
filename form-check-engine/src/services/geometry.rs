/// Planar geometry for joint-angle calculations
///
/// All geometry is in the 2D image plane; no depth is inferred.
use thiserror::Error;

use crate::models::keypoint::Point2D;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector: landmark coincides with vertex at ({x}, {y})")]
    ZeroLengthVector { x: f64, y: f64 },
}

/// Displacement from `a` to `b`
pub fn vector(a: Point2D, b: Point2D) -> Point2D {
    b - a
}

pub fn dot(u: Point2D, v: Point2D) -> f64 {
    u.dot(v)
}

pub fn norm(v: Point2D) -> f64 {
    v.norm()
}

pub fn midpoint(a: Point2D, b: Point2D) -> Point2D {
    Point2D::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Angle in degrees at `vertex` between the rays towards `a` and `c`.
///
/// Returns a value in [0, 180]. Fails when either `a` or `c` coincides with
/// the vertex.
pub fn angle_at(a: Point2D, vertex: Point2D, c: Point2D) -> Result<f64, GeometryError> {
    let ba = vector(vertex, a);
    let bc = vector(vertex, c);

    let mag_ba = norm(ba);
    let mag_bc = norm(bc);

    if mag_ba == 0.0 || mag_bc == 0.0 {
        return Err(GeometryError::ZeroLengthVector {
            x: vertex.x,
            y: vertex.y,
        });
    }

    // Rounding can push the cosine a hair outside [-1, 1] for collinear points
    let cos_angle = (dot(ba, bc) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);

    Ok(cos_angle.acos().to_degrees())
}
