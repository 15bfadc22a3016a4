use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`ArcballInput`](super::ArcballInput) which turns
/// them into drag calls on an
/// [`ArcballController`](crate::ArcballController).
///
/// # Example
///
/// ```
/// use arcball::input::{ArcballInput, InputEvent, MouseButton};
/// use arcball::ArcballController;
/// use glam::IVec2;
///
/// let mut arcball = ArcballController::with_viewport(IVec2::new(400, 300));
/// let mut input = ArcballInput::new();
/// input.handle_event(&mut arcball, InputEvent::CursorMoved { x: 200.0, y: 150.0 });
/// input.handle_event(
///     &mut arcball,
///     InputEvent::MouseButton { button: MouseButton::Left, pressed: true },
/// );
/// input.handle_event(&mut arcball, InputEvent::CursorMoved { x: 350.0, y: 150.0 });
/// assert_ne!(arcball.quat(), glam::Quat::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Viewport resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    #[default]
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button. Side buttons (`Back`, `Forward`, `Other`) have no
    /// counterpart and yield `None`.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it is one the arcball cares about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseInput { state, button, .. } => {
                MouseButton::from_winit(*button).map(|button| Self::MouseButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}
