//! Single-axis constraint for arcball drags.

use glam::Vec3;

/// Below this alignment with the view axis, a constraint axis is treated as
/// lying in the view plane.
const VIEW_PLANE_TOLERANCE: f32 = 0.0001;

/// Force a sphere point onto the great circle perpendicular to `axis`.
///
/// The axis-parallel component of `loose` is rejected and the remainder is
/// rescaled to unit length, picking the solution on the viewer-facing
/// hemisphere (z >= 0). When `loose` is parallel to `axis` no unique
/// perpendicular exists and a fixed direction is returned instead: the view
/// plane's x axis if `axis` lies in (or behind) the view plane, otherwise the
/// in-plane perpendicular `(-axis.y, axis.x, 0)`.
///
/// `axis` is expected to be unit length; a zero axis yields NaN.
#[must_use]
pub fn constrain_to_axis(loose: Vec3, axis: Vec3) -> Vec3 {
    let mut on_plane = loose - axis * axis.dot(loose);
    let norm = on_plane.length_squared();
    if norm > 0.0 {
        if on_plane.z < 0.0 {
            on_plane = -on_plane;
        }
        return on_plane * (1.0 / norm.sqrt());
    }

    if axis.dot(Vec3::Z) < VIEW_PLANE_TOLERANCE {
        return Vec3::X;
    }

    // An axis pointing straight at the viewer has no planar component.
    Vec3::new(-axis.y, axis.x, 0.0)
        .try_normalize()
        .unwrap_or(Vec3::X)
}
