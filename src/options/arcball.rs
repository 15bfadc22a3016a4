use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arcball", inline)]
#[serde(default)]
/// Persisted arcball settings.
pub struct ArcballOptions {
    /// Axis to constrain rotation to; absent for free rotation.
    #[schemars(title = "Constraint Axis")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint_axis: Option<[f32; 3]>,
    /// Orientation quaternion as `[x, y, z, w]`.
    #[schemars(skip)]
    pub orientation: [f32; 4],
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            constraint_axis: None,
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}
