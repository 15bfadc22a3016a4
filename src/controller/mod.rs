//! Arcball rotation controller.
//!
//! Maps pointer drags onto a virtual sphere and derives the rotation that
//! carries the grabbed point along with the pointer. Rotations may optionally
//! be restricted to a single axis.

/// Single-axis constraint projection.
pub mod constraint;
/// Screen-space sphere geometry and pointer projection.
pub mod sphere;

use glam::{IVec2, Quat, Vec2, Vec3, Vec4};

pub use constraint::constrain_to_axis;
pub use sphere::SphereGeometry;

use crate::options::ArcballOptions;

/// Drag-to-rotation controller over a virtual screen-space sphere.
///
/// The controller keeps two orientations: the one committed when the current
/// drag began, and the live one reflecting the drag in progress. Each
/// [`update_drag`](Self::update_drag) recomputes the live orientation from
/// the drag anchor alone, so repeated updates within one gesture do not
/// accumulate error.
///
/// # Example
///
/// ```
/// use arcball::ArcballController;
/// use glam::IVec2;
///
/// let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
/// arcball.begin_drag(IVec2::new(200, 150));
/// arcball.update_drag(IVec2::new(350, 150));
/// let (axis, angle) = arcball.quat().to_axis_angle();
/// assert!((angle.to_degrees() - 60.0).abs() < 1e-3);
/// assert!((axis.y - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ArcballController {
    sphere: SphereGeometry,
    window_size: IVec2,
    initial_pointer_position: IVec2,
    initial_rotation: Quat,
    current_rotation: Quat,
    constraint_axis: Vec3,
    use_constraint: bool,
}

impl Default for ArcballController {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcballController {
    /// Create an unconstrained controller with an unconfigured sphere.
    ///
    /// The radius starts at zero; set it with [`set_radius`](Self::set_radius)
    /// or [`fit_viewport`](Self::fit_viewport) before dragging.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sphere: SphereGeometry::default(),
            window_size: IVec2::ZERO,
            initial_pointer_position: IVec2::ZERO,
            initial_rotation: Quat::IDENTITY,
            current_rotation: Quat::IDENTITY,
            constraint_axis: Vec3::ZERO,
            use_constraint: false,
        }
    }

    /// Create an unconstrained controller whose sphere is centered in the
    /// viewport with a diameter equal to the shorter viewport side.
    #[must_use]
    pub fn with_viewport(size: IVec2) -> Self {
        Self {
            sphere: SphereGeometry::from_viewport(size),
            window_size: size,
            ..Self::new()
        }
    }

    /// Refit the sphere to a resized viewport.
    ///
    /// Orientation and constraint are left untouched.
    pub fn fit_viewport(&mut self, size: IVec2) {
        self.window_size = size;
        self.sphere = SphereGeometry::from_viewport(size);
        log::debug!(
            "arcball fit to {}x{}: center {}, radius {}",
            size.x,
            size.y,
            self.sphere.center,
            self.sphere.radius
        );
    }

    /// Viewport size last passed to [`with_viewport`](Self::with_viewport) or
    /// [`fit_viewport`](Self::fit_viewport).
    #[must_use]
    pub fn window_size(&self) -> IVec2 {
        self.window_size
    }

    /// Sphere center in screen coordinates.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.sphere.center
    }

    /// Move the sphere center.
    pub fn set_center(&mut self, center: Vec2) {
        self.sphere.center = center;
    }

    /// Sphere radius in screen units.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.sphere.radius
    }

    /// Resize the sphere. No validation is performed.
    pub fn set_radius(&mut self, radius: f32) {
        self.sphere.radius = radius;
    }

    /// Current sphere geometry.
    #[must_use]
    pub fn sphere(&self) -> SphereGeometry {
        self.sphere
    }

    /// Restrict rotation to spin around `axis`, which should be unit length.
    pub fn set_constraint_axis(&mut self, axis: Vec3) {
        self.constraint_axis = axis;
        self.use_constraint = true;
        log::debug!("arcball constrained to axis {axis}");
    }

    /// Return to free rotation. The stored axis is kept but ignored.
    pub fn clear_constraint(&mut self) {
        self.use_constraint = false;
        log::debug!("arcball constraint cleared");
    }

    /// Whether drags are restricted to a single axis.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.use_constraint
    }

    /// The active constraint axis, if any.
    #[must_use]
    pub fn constraint_axis(&self) -> Option<Vec3> {
        self.use_constraint.then_some(self.constraint_axis)
    }

    /// Current orientation.
    #[must_use]
    pub fn quat(&self) -> Quat {
        self.current_rotation
    }

    /// Overwrite the current orientation, e.g. to attach the arcball to an
    /// object that already has one.
    ///
    /// Only the live orientation changes. A drag that is already in progress
    /// keeps computing from the orientation captured at its start, so the
    /// next [`update_drag`](Self::update_drag) discards this value; call
    /// [`begin_drag`](Self::begin_drag) afterwards to build on it.
    pub fn set_quat(&mut self, quat: Quat) {
        self.current_rotation = quat;
    }

    /// Reset both the committed and live orientation to identity.
    pub fn reset_quat(&mut self) {
        self.initial_rotation = Quat::IDENTITY;
        self.current_rotation = Quat::IDENTITY;
    }

    /// Map a screen point onto the unit sphere (+z toward the viewer).
    ///
    /// Useful for drawing feedback of the grabbed point. Requires a positive
    /// radius; a zero radius yields NaN components.
    #[doc(alias = "mouse_on_sphere")]
    #[must_use]
    pub fn project_to_sphere(&self, point: IVec2) -> Vec3 {
        self.sphere.project(point)
    }

    /// Start a drag gesture at `pointer`.
    ///
    /// Records the anchor point and commits the current orientation as the
    /// base for subsequent [`update_drag`](Self::update_drag) calls.
    pub fn begin_drag(&mut self, pointer: IVec2) {
        if self.sphere.radius <= 0.0 {
            log::warn!(
                "arcball drag started with non-positive radius {}",
                self.sphere.radius
            );
        }
        log::trace!("arcball drag begin at {pointer}");
        self.initial_pointer_position = pointer;
        self.initial_rotation = self.current_rotation;
    }

    /// Rotate so the point grabbed in [`begin_drag`](Self::begin_drag) follows
    /// `pointer` as closely as the sphere (and constraint) allow.
    pub fn update_drag(&mut self, pointer: IVec2) {
        let mut from = self.project_to_sphere(self.initial_pointer_position);
        let mut to = self.project_to_sphere(pointer);
        if self.use_constraint {
            from = constrain_to_axis(from, self.constraint_axis);
            to = constrain_to_axis(to, self.constraint_axis);
        }

        let axis = from.cross(to);
        let delta = Quat::from_xyzw(axis.x, axis.y, axis.z, from.dot(to));
        self.current_rotation = (self.initial_rotation * delta).normalize();
        log::trace!("arcball drag to {pointer}: {}", self.current_rotation);
    }

    /// Apply persisted settings: constraint and orientation.
    ///
    /// The stored orientation replaces both the committed and the live
    /// orientation. Axis and orientation are normalized; a zero or
    /// non-finite axis leaves rotation free and a zero or non-finite
    /// orientation falls back to identity.
    pub fn apply_options(&mut self, options: &ArcballOptions) {
        match options.constraint_axis {
            Some(axis) => match Vec3::from_array(axis).try_normalize() {
                Some(unit) => self.set_constraint_axis(unit),
                None => {
                    log::warn!("ignoring invalid arcball constraint axis {axis:?}");
                    self.clear_constraint();
                }
            },
            None => self.clear_constraint(),
        }

        let orientation = Vec4::from_array(options.orientation)
            .try_normalize()
            .map_or_else(
                || {
                    log::warn!(
                        "ignoring invalid arcball orientation {:?}",
                        options.orientation
                    );
                    Quat::IDENTITY
                },
                Quat::from_vec4,
            );
        self.initial_rotation = orientation;
        self.current_rotation = orientation;
    }

    /// Snapshot the persistable settings.
    #[must_use]
    pub fn to_options(&self) -> ArcballOptions {
        ArcballOptions {
            constraint_axis: self.constraint_axis().map(|axis| axis.to_array()),
            orientation: self.current_rotation.to_array(),
        }
    }
}
