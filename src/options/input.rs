use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::MouseButton;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer bindings for arcball gestures.
pub struct InputOptions {
    /// Mouse button that starts a rotation drag.
    #[schemars(title = "Drag Button")]
    pub drag_button: MouseButton,
}
