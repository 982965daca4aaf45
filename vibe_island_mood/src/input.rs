// Input events that produce a new mood state.
//
// All outside influence on the mood goes through `MoodInput`. The controller
// turns each UI gesture (slider drag, preset button, text submission) into
// one of these and hands it to `MoodEngine::apply()`, which dispatches to
// the matching derivation. Inputs serialize as internally tagged JSON so a
// sequence of them can be saved and replayed:
//
//   {"kind": "slider", "value": 72.5}
//   {"kind": "preset", "label": "Burnout"}
//   {"kind": "text", "text": "stormy party night"}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoodInput {
    /// Raw slider position. May be fractional or out of range.
    Slider { value: f64 },
    /// Preset label, matched exactly against the catalog.
    Preset { label: String },
    /// Free text run through the keyword rules.
    Text { text: String },
}

impl MoodInput {
    pub fn slider(value: f64) -> Self {
        MoodInput::Slider { value }
    }

    pub fn preset(label: impl Into<String>) -> Self {
        MoodInput::Preset {
            label: label.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        MoodInput::Text { text: text.into() }
    }
}
