//! Screen-space sphere geometry and the pointer-to-sphere mapping.

use glam::{IVec2, Vec2, Vec3};

/// The virtual sphere as seen on screen: a circle with a center and radius in
/// pixel coordinates.
///
/// A radius of zero (the [`Default`]) is not usable for projection; callers
/// must configure a positive radius first.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphereGeometry {
    /// Sphere center in screen coordinates.
    pub center: Vec2,
    /// Sphere radius in screen units.
    pub radius: f32,
}

impl SphereGeometry {
    /// Create a sphere from an explicit center and radius.
    #[must_use]
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere centered in a viewport, with a diameter equal to the shorter
    /// viewport dimension.
    #[must_use]
    pub fn from_viewport(size: IVec2) -> Self {
        let half = size.as_vec2() / 2.0;
        Self {
            center: half,
            radius: half.x.min(half.y),
        }
    }

    /// Map a screen point onto the unit sphere.
    ///
    /// The planar offset is divided by the sphere *diameter*, so the mapped
    /// hemisphere spans twice the configured radius on screen. Points outside
    /// that disc are clamped onto the silhouette (z = 0). The result is in a
    /// frame where +z faces the viewer and always has unit length for a
    /// positive radius.
    #[must_use]
    pub fn project(&self, point: IVec2) -> Vec3 {
        let planar = (point.as_vec2() - self.center) / (self.radius * 2.0);
        let mag = planar.length_squared();
        if mag > 1.0 {
            planar.extend(0.0).normalize()
        } else {
            planar.extend((1.0 - mag).sqrt()).normalize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn viewport_fit_uses_shorter_side() {
        let sphere = SphereGeometry::from_viewport(IVec2::new(400, 300));
        assert_eq!(sphere.center, Vec2::new(200.0, 150.0));
        assert_eq!(sphere.radius, 150.0);

        let tall = SphereGeometry::from_viewport(IVec2::new(101, 640));
        assert_eq!(tall.center, Vec2::new(50.5, 320.0));
        assert_eq!(tall.radius, 50.5);
    }

    #[test]
    fn center_maps_to_view_axis() {
        let sphere = SphereGeometry::new(Vec2::new(200.0, 150.0), 150.0);
        assert_eq!(sphere.project(IVec2::new(200, 150)), Vec3::Z);
    }

    #[test]
    fn projection_is_always_unit_length() {
        let spheres = [
            SphereGeometry::new(Vec2::ZERO, 1.0),
            SphereGeometry::new(Vec2::new(200.0, 150.0), 150.0),
            SphereGeometry::new(Vec2::new(-30.5, 12.25), 7.0),
            SphereGeometry::new(Vec2::new(960.0, 540.0), 540.0),
        ];
        for sphere in spheres {
            for x in (-1200..=1200).step_by(97) {
                for y in (-900..=900).step_by(83) {
                    let p = sphere.project(IVec2::new(x, y));
                    assert!(
                        (p.length() - 1.0).abs() < EPS,
                        "{sphere:?} ({x}, {y}) -> {p}"
                    );
                }
            }
        }
    }

    #[test]
    fn equator_is_continuous() {
        let sphere = SphereGeometry::new(Vec2::ZERO, 50.0);

        // Planar offset exactly 1: inside branch with z = 0.
        let on_edge = sphere.project(IVec2::new(100, 0));
        assert!(on_edge.abs_diff_eq(Vec3::X, EPS), "{on_edge}");

        // Just outside: clamped onto the same silhouette point.
        let outside = sphere.project(IVec2::new(101, 0));
        assert!(outside.abs_diff_eq(Vec3::X, EPS), "{outside}");
        assert!(on_edge.abs_diff_eq(outside, EPS));

        let diagonal = sphere.project(IVec2::new(-400, -400));
        let expected = Vec3::new(-1.0, -1.0, 0.0).normalize();
        assert!(diagonal.abs_diff_eq(expected, EPS), "{diagonal}");
    }

    #[test]
    fn inside_points_face_the_viewer() {
        let sphere = SphereGeometry::new(Vec2::new(200.0, 150.0), 150.0);
        let p = sphere.project(IVec2::new(350, 150));
        let expected = Vec3::new(0.5, 0.0, 0.75_f32.sqrt());
        assert!(p.abs_diff_eq(expected, EPS), "{p}");
        assert!(p.z > 0.0);
    }

    #[test]
    fn zero_radius_is_not_finite() {
        let sphere = SphereGeometry::default();
        assert!(!sphere.project(IVec2::new(3, 4)).is_finite());
    }
}
