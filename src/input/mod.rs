//! Input handling: platform-agnostic event types and the processor that
//! routes them into an arcball controller.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into arcball drag calls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::ArcballInput;
