// What the terminal prints after each action.

use crate::controller::StandardController;
use serde::Serialize;
use std::fmt::Write as _;
use vibe_island_audio::AudioSnapshot;
use vibe_island_mood::{MoodPreset, MoodState};
use vibe_island_scene::SceneStats;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub state: MoodState,
    pub scene: SceneStats,
    pub audio: AudioSnapshot,
}

impl Report {
    pub fn capture(controller: &StandardController) -> Self {
        Self {
            state: controller.state().clone(),
            scene: controller.scene().stats(),
            audio: controller.audio().snapshot(),
        }
    }

    pub fn to_text(&self) -> String {
        let s = &self.state;
        format!(
            "[{}] level {} | tier {} | {}\n  {}\n  scene: {}\n  audio: {}",
            s.tag,
            s.life_level,
            s.house_tier.number(),
            s.weather,
            s.description,
            self.scene,
            self.audio,
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One line per preset: label, level, weather, description.
pub fn preset_table(presets: &[MoodPreset]) -> String {
    let width = presets.iter().map(|p| p.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for p in presets {
        let _ = writeln!(
            out,
            "{:<width$}  {:>3}  {:<6}  {}",
            p.label,
            p.level,
            p.weather.name(),
            p.description
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vibe_island_mood::MoodEngine;

    #[test]
    fn text_report_has_state_and_summaries() {
        let mut c = StandardController::standard(MoodEngine::default(), 7);
        c.preset("Burnout");
        let text = Report::capture(&c).to_text();
        assert!(text.starts_with("[Burnout] level 20 | tier 1 | storm"), "{text}");
        assert!(text.contains("scene: tier 1 storm"), "{text}");
        assert!(text.contains("audio: master 0.50"), "{text}");
    }

    #[test]
    fn json_report_parses_back() {
        let mut c = StandardController::standard(MoodEngine::default(), 7);
        c.slider(85.0);
        let json = Report::capture(&c).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"]["life_level"], 85);
        assert_eq!(value["state"]["weather"], "sunny");
        assert_eq!(value["scene"]["house_blocks"].as_u64().map(|n| n > 0), Some(true));
        assert_eq!(value["audio"]["initialized"], true);
    }

    #[test]
    fn preset_table_lists_catalog_in_order() {
        let engine = MoodEngine::default();
        let table = preset_table(engine.presets());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Calm"));
        assert!(lines[10].starts_with("Lottery Winner"));
    }
}
