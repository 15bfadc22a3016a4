//! Routes raw platform events into an arcball controller.
//!
//! `ArcballInput` owns the transient gesture state (cursor position, whether
//! the drag button is held) so the controller itself only ever sees
//! `begin_drag` / `update_drag` calls with integer pixel positions.

use glam::IVec2;

use super::event::{InputEvent, MouseButton};
use crate::controller::ArcballController;
use crate::options::InputOptions;

/// Converts raw window events into arcball drag calls.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     if arcball_input.handle_event(&mut arcball, event) {
///         window.request_redraw();
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcballInput {
    /// Last known cursor position, rounded to whole pixels.
    cursor: IVec2,
    /// Whether the drag button is currently held.
    dragging: bool,
    /// Button that starts a rotation drag.
    drag_button: MouseButton,
}

impl ArcballInput {
    /// Create a processor that drags with the left mouse button.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: IVec2::ZERO,
            dragging: false,
            drag_button: MouseButton::Left,
        }
    }

    /// Create a processor configured from persisted input options.
    #[must_use]
    pub fn with_options(options: &InputOptions) -> Self {
        Self {
            drag_button: options.drag_button,
            ..Self::new()
        }
    }

    /// Current cursor position in whole pixels.
    #[must_use]
    pub fn cursor(&self) -> IVec2 {
        self.cursor
    }

    /// Whether a rotation drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Button that starts a rotation drag.
    #[must_use]
    pub fn drag_button(&self) -> MouseButton {
        self.drag_button
    }

    /// Change the drag button. Any drag in progress is ended.
    pub fn set_drag_button(&mut self, button: MouseButton) {
        self.drag_button = button;
        self.dragging = false;
    }

    /// Process a raw input event.
    ///
    /// Returns `true` if the event was consumed by the arcball (the drag
    /// button changed state, the cursor moved during a drag, or the viewport
    /// was resized to a non-empty size). Zero-size resizes are ignored.
    pub fn handle_event(
        &mut self,
        arcball: &mut ArcballController,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = IVec2::new(x.round() as i32, y.round() as i32);
                if self.dragging {
                    arcball.update_drag(self.cursor);
                }
                self.dragging
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != self.drag_button {
                    return false;
                }
                if pressed {
                    arcball.begin_drag(self.cursor);
                }
                self.dragging = pressed;
                true
            }
            InputEvent::Resized { width, height } => {
                // Minimized windows report 0x0; keep the last usable sphere.
                if width == 0 || height == 0 {
                    return false;
                }
                let size = IVec2::new(
                    i32::try_from(width).unwrap_or(i32::MAX),
                    i32::try_from(height).unwrap_or(i32::MAX),
                );
                arcball.fit_viewport(size);
                true
            }
        }
    }
}

impl Default for ArcballInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2};

    use super::*;

    fn press(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    fn release(button: MouseButton) -> InputEvent {
        InputEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    #[test]
    fn hover_does_not_rotate() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        assert!(!input.handle_event(&mut arcball, moved(10.0, 10.0)));
        assert!(!input.handle_event(&mut arcball, moved(390.0, 290.0)));
        assert_eq!(arcball.quat(), Quat::IDENTITY);
        assert_eq!(input.cursor(), IVec2::new(390, 290));
    }

    #[test]
    fn drag_matches_direct_controller_calls() {
        let mut driven = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        let _ = input.handle_event(&mut driven, moved(199.6, 150.2));
        assert!(input.handle_event(&mut driven, press(MouseButton::Left)));
        assert!(input.is_dragging());
        assert!(input.handle_event(&mut driven, moved(349.7, 150.4)));

        let mut direct = ArcballController::with_viewport(IVec2::new(400, 300));
        direct.begin_drag(IVec2::new(200, 150));
        direct.update_drag(IVec2::new(350, 150));
        assert_eq!(driven.quat(), direct.quat());
    }

    #[test]
    fn release_ends_drag_and_keeps_rotation() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        let _ = input.handle_event(&mut arcball, moved(200.0, 150.0));
        let _ = input.handle_event(&mut arcball, press(MouseButton::Left));
        let _ = input.handle_event(&mut arcball, moved(300.0, 200.0));
        let rotated = arcball.quat();

        assert!(input.handle_event(&mut arcball, release(MouseButton::Left)));
        assert!(!input.is_dragging());
        assert!(!input.handle_event(&mut arcball, moved(20.0, 20.0)));
        assert_eq!(arcball.quat(), rotated);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        assert!(!input.handle_event(&mut arcball, press(MouseButton::Right)));
        assert!(!input.is_dragging());
        assert!(!input.handle_event(&mut arcball, moved(300.0, 100.0)));
        assert_eq!(arcball.quat(), Quat::IDENTITY);
    }

    #[test]
    fn configured_drag_button() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::with_options(&InputOptions {
            drag_button: MouseButton::Middle,
        });
        assert_eq!(input.drag_button(), MouseButton::Middle);
        assert!(!input.handle_event(&mut arcball, press(MouseButton::Left)));
        assert!(input.handle_event(&mut arcball, press(MouseButton::Middle)));
        assert!(input.is_dragging());

        input.set_drag_button(MouseButton::Right);
        assert!(!input.is_dragging());
    }

    #[test]
    fn resize_refits_sphere() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        assert!(input.handle_event(
            &mut arcball,
            InputEvent::Resized {
                width: 1280,
                height: 720,
            },
        ));
        assert_eq!(arcball.center(), Vec2::new(640.0, 360.0));
        assert_eq!(arcball.radius(), 360.0);
    }

    #[test]
    fn minimized_window_keeps_orientation_finite() {
        let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
        let mut input = ArcballInput::new();
        let minimized = InputEvent::Resized {
            width: 0,
            height: 0,
        };
        assert!(!input.handle_event(&mut arcball, minimized));
        assert_eq!(arcball.radius(), 150.0);

        // A drag while minimized, then restore and drag again.
        let _ = input.handle_event(&mut arcball, moved(200.0, 150.0));
        let _ = input.handle_event(&mut arcball, press(MouseButton::Left));
        let _ = input.handle_event(&mut arcball, moved(260.0, 150.0));
        let _ = input.handle_event(&mut arcball, release(MouseButton::Left));
        assert!(arcball.quat().is_finite());

        let restored = InputEvent::Resized {
            width: 400,
            height: 300,
        };
        assert!(input.handle_event(&mut arcball, restored));
        let _ = input.handle_event(&mut arcball, moved(200.0, 150.0));
        let _ = input.handle_event(&mut arcball, press(MouseButton::Left));
        let _ = input.handle_event(&mut arcball, moved(300.0, 150.0));
        assert!(arcball.quat().is_finite());
        assert_ne!(arcball.quat(), Quat::IDENTITY);

        let one_sided = InputEvent::Resized {
            width: 640,
            height: 0,
        };
        assert!(!input.handle_event(&mut arcball, one_sided));
        assert_eq!(arcball.window_size(), IVec2::new(400, 300));
    }
}
