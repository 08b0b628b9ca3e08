//! Input-change events sent from the control panel to the controller.
//!
//! Each event carries exactly one value for exactly one control. Numeric
//! values may be out of range; the controller clamps them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Season;

/// A single control change.
///
/// Serialized as `{ "control": "coverage", "value": 80 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case", tag = "control", content = "value")]
#[ts(export, export_to = "bindings/")]
pub enum ControlEvent {
    /// The depth slider moved (metres).
    WaterDepth(f64),
    /// The coverage slider moved (percent).
    Coverage(f64),
    /// The nutrient slider moved.
    NutrientLevel(#[ts(type = "number")] i64),
    /// The water movement slider moved.
    WaterMovement(#[ts(type = "number")] i64),
    /// A season button was pressed.
    Season(Season),
}
